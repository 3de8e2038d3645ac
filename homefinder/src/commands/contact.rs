use anyhow::{anyhow, bail};
use clap::{Args, Subcommand};
use homefinder_config::Config;
use homefinder_core_contact_contracts::{ContactFormFeatureService, ContactFormSubmitError};
use homefinder_models::contact::{validate_form, ContactFormFields, ValidationErrors};

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Check the contact form fields without sending anything
    #[command(aliases(["v"]))]
    Validate {
        #[command(flatten)]
        fields: ContactFieldArgs,
    },
    /// Validate the contact form and send it with the configured transport
    ///
    /// The command exits while the success panel would still be shown, so
    /// the printed transitions end at `submitting -> succeeded`.
    #[command(aliases(["s"]))]
    Submit {
        #[command(flatten)]
        fields: ContactFieldArgs,
    },
}

#[derive(Debug, Args)]
pub struct ContactFieldArgs {
    /// Full name of the sender
    #[arg(long, default_value = "")]
    name: String,
    /// Email address of the sender
    #[arg(long, default_value = "")]
    email: String,
    /// Optional phone number
    #[arg(long, default_value = "")]
    phone: String,
    /// Topic of the inquiry, e.g. "buying" or "general"
    #[arg(long, default_value = "")]
    subject: String,
    /// The message itself
    #[arg(long, default_value = "")]
    message: String,
}

impl From<ContactFieldArgs> for ContactFormFields {
    fn from(args: ContactFieldArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            subject: args.subject,
            message: args.message,
        }
    }
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Validate { fields } => validate(&fields.into()),
            ContactCommand::Submit { fields } => {
                let contact = environment::contact_form_feature(&config).await?;
                submit(&contact, fields.into()).await
            }
        }
    }
}

fn validate(fields: &ContactFormFields) -> anyhow::Result<()> {
    let errors = validate_form(fields);
    if !errors.is_valid() {
        print_errors(&errors);
        bail!("The contact form has {} invalid field(s)", errors.len());
    }

    println!("The contact form is valid.");
    Ok(())
}

async fn submit(
    contact: &impl ContactFormFeatureService,
    fields: ContactFormFields,
) -> anyhow::Result<()> {
    for (field, value) in fields.iter() {
        contact.input(field, value.into()).await;
    }

    let mut transitions = contact.subscribe();
    let result = contact.submit().await;
    while let Ok(transition) = transitions.try_recv() {
        println!("{transition}");
    }

    match result {
        Ok(()) => {
            println!("Thank you! Your message has been sent.");
            Ok(())
        }
        Err(ContactFormSubmitError::Invalid(errors)) => {
            print_errors(&errors);
            bail!("The contact form has {} invalid field(s)", errors.len());
        }
        Err(ContactFormSubmitError::Send) => Err(anyhow!(contact
            .view()
            .await
            .form_error
            .unwrap_or_else(|| ContactFormSubmitError::Send.to_string()))),
        Err(err) => Err(err.into()),
    }
}

fn print_errors(errors: &ValidationErrors) {
    for (field, error) in errors.iter() {
        println!("{:>8}: {error}", field.as_str());
    }
}
