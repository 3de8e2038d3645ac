use std::{sync::Arc, time::Duration};

use homefinder_core_contact_contracts::{ContactFormFeatureService, MockContactTransportService};
use homefinder_models::contact::{
    ContactFormFields, SubmissionState, SubmissionTransition,
};
use tokio::sync::broadcast;

use crate::{ContactFormFeatureConfig, ContactFormFeatureServiceImpl};

mod input;
mod submit;

type Sut = ContactFormFeatureServiceImpl<MockContactTransportService>;

const SUBMIT_LABEL: &str = "Send Message";
const BUSY_LABEL: &str = "Sending...";
const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";
const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

fn sut(transport: MockContactTransportService) -> Sut {
    ContactFormFeatureServiceImpl::new(
        transport,
        ContactFormFeatureConfig {
            submit_label: Arc::from(SUBMIT_LABEL),
            busy_label: Arc::from(BUSY_LABEL),
            failure_message: Arc::from(FAILURE_MESSAGE),
            success_display: SUCCESS_DISPLAY,
            message_max_chars: 1000,
        },
    )
}

fn valid_fields() -> ContactFormFields {
    ContactFormFields {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example.de".into(),
        phone: "+1 (555) 123-4567".into(),
        subject: "buying".into(),
        message: "Is the house on Elm Street still available?".into(),
    }
}

async fn fill(sut: &Sut, fields: &ContactFormFields) {
    for (field, value) in fields.iter() {
        sut.input(field, value.into()).await;
    }
}

fn drain(
    transitions: &mut broadcast::Receiver<SubmissionTransition>,
) -> Vec<(SubmissionState, SubmissionState)> {
    std::iter::from_fn(|| transitions.try_recv().ok())
        .map(|transition| (transition.from, transition.to))
        .collect()
}
