use std::future::Future;

use homefinder_models::contact::{
    ContactField, ContactFormView, ContactMessage, FieldError, SubmissionTransition,
    ValidationErrors,
};
use thiserror::Error;
use tokio::sync::broadcast;

/// Drives a single contact form through its submit cycle.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormFeatureService: Send + Sync + 'static {
    /// Stores the new value of `field` and clears its error slot along with
    /// any form level error.
    fn input(&self, field: ContactField, value: String) -> impl Future<Output = ()> + Send;

    /// Validates a single field after it lost focus and updates its error
    /// slot.
    fn blur(&self, field: ContactField) -> impl Future<Output = Option<FieldError>> + Send;

    /// Validates the whole form and hands it to the transport.
    ///
    /// Only accepted while the form is idle. On success the form switches to
    /// the success panel and resets itself after the configured delay.
    fn submit(&self) -> impl Future<Output = Result<(), ContactFormSubmitError>> + Send;

    /// Returns to the idle state with an empty form, cancelling a pending
    /// auto reset and discarding the result of an in-flight send.
    fn reset(&self) -> impl Future<Output = ()> + Send;

    fn view(&self) -> impl Future<Output = ContactFormView> + Send;

    /// Subscribes to every state change from now on.
    fn subscribe(&self) -> broadcast::Receiver<SubmissionTransition>;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("A submission is already in progress.")]
    Busy,
    #[error("The form contains invalid fields.")]
    Invalid(ValidationErrors),
    #[error("Failed to send message.")]
    Send,
    #[error("The submission was cancelled.")]
    Cancelled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Delivers a validated contact message.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactTransportService: Send + Sync + 'static {
    fn send(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), ContactSendError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendError {
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactTransportService {
    pub fn with_send(mut self, message: ContactMessage, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    result.then_some(()).ok_or(ContactSendError::Send),
                ))
            });
        self
    }

    /// Like [`with_send`](Self::with_send), but the send only completes after
    /// `delay`.
    pub fn with_slow_send(
        mut self,
        message: ContactMessage,
        delay: std::time::Duration,
        result: bool,
    ) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| {
                Box::pin(async move {
                    tokio::time::sleep(delay).await;
                    result.then_some(()).ok_or(ContactSendError::Send)
                })
            });
        self
    }
}
