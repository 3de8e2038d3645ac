use anyhow::ensure;
use clap::Subcommand;
use homefinder_config::Config;
use homefinder_email_contracts::{Email, EmailService};
use homefinder_email_impl::EmailServiceImpl;
use homefinder_models::email_address::EmailAddressWithName;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email to check smtp deliverability
    Test { recipient: EmailAddressWithName },
    /// Check that the smtp server is reachable
    Ping,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let email_service =
            EmailServiceImpl::new(&config.email.smtp_url, config.email.from).await?;

        match self {
            EmailCommand::Test { recipient } => test(&email_service, recipient).await,
            EmailCommand::Ping => email_service.ping().await,
        }
    }
}

async fn test(
    email_service: &impl EmailService,
    recipient: EmailAddressWithName,
) -> anyhow::Result<()> {
    let ok = email_service.send(test_email(recipient)).await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}

fn test_email(recipient: EmailAddressWithName) -> Email {
    Email {
        recipient,
        subject: "HomeFinder Email Deliverability Test".into(),
        body: "Email deliverability seems to be working!".into(),
        reply_to: None,
    }
}
