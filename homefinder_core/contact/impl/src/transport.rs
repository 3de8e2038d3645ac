use std::time::Duration;

use homefinder_core_contact_contracts::{ContactSendError, ContactTransportService};
use homefinder_email_contracts::{Email, EmailService};
use homefinder_models::{
    contact::ContactMessage,
    email_address::{EmailAddress, EmailAddressWithName},
};
use tracing::{debug, warn};

/// Pretends to deliver the message after a fixed delay. Never fails.
#[derive(Debug, Clone)]
pub struct SimulatedContactTransportServiceImpl {
    pub delay: Duration,
}

impl ContactTransportService for SimulatedContactTransportServiceImpl {
    async fn send(&self, message: ContactMessage) -> Result<(), ContactSendError> {
        debug!(subject = %message.subject, delay = ?self.delay, "simulating contact message delivery");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Forwards contact messages to the team inbox.
#[derive(Debug, Clone)]
pub struct EmailContactTransportServiceImpl<Email> {
    email: Email,
    config: EmailContactTransportConfig,
}

#[derive(Debug, Clone)]
pub struct EmailContactTransportConfig {
    pub recipient: EmailAddressWithName,
}

impl<Email> EmailContactTransportServiceImpl<Email> {
    pub fn new(email: Email, config: EmailContactTransportConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactTransportService for EmailContactTransportServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send(&self, message: ContactMessage) -> Result<(), ContactSendError> {
        let author = &message.author;
        let contact = match &author.phone {
            Some(phone) => format!("{}, {phone}", author.email),
            None => author.email.to_string(),
        };

        let reply_to = author
            .email
            .parse::<EmailAddress>()
            .inspect_err(|err| warn!(%err, "author email is not a valid mailbox"))
            .ok()
            .map(|address| address.with_name(author.name.to_string()));

        let email = Email {
            recipient: self.config.recipient.clone(),
            subject: format!("[HomeFinder Contact] {}", *message.subject),
            body: format!(
                "Message from {} ({contact}):\n\n{}",
                *author.name, *message.content
            ),
            reply_to,
        };

        if !self.email.send(email).await? {
            return Err(ContactSendError::Send);
        }

        Ok(())
    }
}
