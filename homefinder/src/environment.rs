use std::sync::Arc;

use homefinder_config::{Config, ContactTransportKind};
use homefinder_core_contact_contracts::{ContactSendError, ContactTransportService};
use homefinder_core_contact_impl::{
    transport::{
        EmailContactTransportConfig, EmailContactTransportServiceImpl,
        SimulatedContactTransportServiceImpl,
    },
    ContactFormFeatureConfig, ContactFormFeatureServiceImpl,
};
use homefinder_core_theme_impl::ThemeFeatureServiceImpl;
use homefinder_email_impl::EmailServiceImpl;
use homefinder_models::contact::ContactMessage;
use homefinder_persistence_file::FilePreferenceRepository;

pub type ContactFormFeature = ContactFormFeatureServiceImpl<ContactTransport>;
pub type ThemeFeature = ThemeFeatureServiceImpl<FilePreferenceRepository>;

/// The contact transport selected in the config.
#[derive(Debug, Clone)]
pub enum ContactTransport {
    Simulated(SimulatedContactTransportServiceImpl),
    Email(EmailContactTransportServiceImpl<EmailServiceImpl>),
}

impl ContactTransportService for ContactTransport {
    async fn send(&self, message: ContactMessage) -> Result<(), ContactSendError> {
        match self {
            Self::Simulated(transport) => transport.send(message).await,
            Self::Email(transport) => transport.send(message).await,
        }
    }
}

pub async fn contact_form_feature(config: &Config) -> anyhow::Result<ContactFormFeature> {
    let contact = &config.contact;

    let transport = match contact.transport {
        ContactTransportKind::Simulated => {
            ContactTransport::Simulated(SimulatedContactTransportServiceImpl {
                delay: *contact.simulated_delay,
            })
        }
        ContactTransportKind::Email => {
            let email =
                EmailServiceImpl::new(&config.email.smtp_url, config.email.from.clone()).await?;
            ContactTransport::Email(EmailContactTransportServiceImpl::new(
                email,
                EmailContactTransportConfig {
                    recipient: contact.recipient.clone(),
                },
            ))
        }
    };

    Ok(ContactFormFeatureServiceImpl::new(
        transport,
        ContactFormFeatureConfig {
            submit_label: Arc::from(contact.submit_label.as_str()),
            busy_label: Arc::from(contact.busy_label.as_str()),
            failure_message: Arc::from(contact.failure_message.as_str()),
            success_display: *contact.success_display,
            message_max_chars: contact.message_max_chars,
        },
    ))
}

pub fn theme_feature(config: &Config) -> ThemeFeature {
    ThemeFeatureServiceImpl::new(FilePreferenceRepository::new(&config.preferences.path))
}
