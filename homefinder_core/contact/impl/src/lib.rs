use std::{sync::Arc, time::Duration};

use homefinder_core_contact_contracts::{
    ContactFormFeatureService, ContactFormSubmitError, ContactSendError, ContactTransportService,
};
use homefinder_models::{
    contact::{
        validate_field, validate_form, ContactField, ContactFormFields, ContactFormView,
        ContactMessage, FieldError, SubmissionState, SubmissionTransition, SubmitButton,
        ValidationErrors,
    },
    ui::counter::CharacterCounter,
};
use tokio::{
    sync::{broadcast, Mutex},
    task::AbortHandle,
};
use tracing::{debug, error, info, warn};

pub mod transport;

#[cfg(test)]
mod tests;

const TRANSITION_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct ContactFormFeatureServiceImpl<Transport> {
    transport: Transport,
    config: ContactFormFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct ContactFormFeatureConfig {
    pub submit_label: Arc<str>,
    pub busy_label: Arc<str>,
    pub failure_message: Arc<str>,
    /// How long the success panel stays up before the form resets itself.
    pub success_display: Duration,
    pub message_max_chars: usize,
}

#[derive(Debug)]
struct State {
    form: Mutex<FormState>,
    transitions: broadcast::Sender<SubmissionTransition>,
}

#[derive(Debug, Default)]
struct FormState {
    state: SubmissionState,
    fields: ContactFormFields,
    errors: ValidationErrors,
    form_error: Option<String>,
    /// Bumped by every submit and reset. A send or timer that captured an
    /// older value must not touch the form anymore.
    generation: u64,
    auto_reset: Option<AbortHandle>,
}

impl<Transport> ContactFormFeatureServiceImpl<Transport> {
    pub fn new(transport: Transport, config: ContactFormFeatureConfig) -> Self {
        let (transitions, _) = broadcast::channel(TRANSITION_CHANNEL_CAPACITY);
        Self {
            transport,
            config,
            state: Arc::new(State {
                form: Default::default(),
                transitions,
            }),
        }
    }
}

impl State {
    fn transition(&self, form: &mut FormState, to: SubmissionState) -> bool {
        let from = form.state;
        if !from.can_transition_to(to) {
            error!(%from, %to, "invalid contact form transition");
            return false;
        }

        form.state = to;
        let transition = SubmissionTransition { from, to };
        debug!(%transition, "contact form transition");
        // no subscribers is fine
        let _ = self.transitions.send(transition);
        true
    }

    /// Moves a submission whose caller went away back to idle. Field values
    /// are kept.
    fn abandon(&self, form: &mut FormState, generation: u64) {
        if form.generation == generation && form.state == SubmissionState::Submitting {
            debug!("contact form submission abandoned while sending");
            self.transition(form, SubmissionState::Idle);
        }
    }

    fn clear(&self, form: &mut FormState) {
        if let Some(auto_reset) = form.auto_reset.take() {
            auto_reset.abort();
        }
        form.fields.clear();
        form.errors.clear();
        form.form_error = None;
        if form.state != SubmissionState::Idle {
            self.transition(form, SubmissionState::Idle);
        }
    }
}

/// Armed while a send is awaited. Dropping it armed means the `submit`
/// future was cancelled before the result came back.
struct InFlightSubmission {
    state: Arc<State>,
    generation: u64,
    armed: bool,
}

impl InFlightSubmission {
    fn new(state: &Arc<State>, generation: u64) -> Self {
        Self {
            state: Arc::clone(state),
            generation,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightSubmission {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let generation = self.generation;
        if let Ok(mut form) = self.state.form.try_lock() {
            self.state.abandon(&mut form, generation);
            return;
        }

        let state = Arc::clone(&self.state);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let mut form = state.form.lock().await;
                    state.abandon(&mut form, generation);
                });
            }
            Err(_) => warn!("contact form submission abandoned outside of a runtime"),
        }
    }
}

impl<Transport> ContactFormFeatureServiceImpl<Transport> {
    fn schedule_auto_reset(&self, form: &mut FormState) {
        let state = Arc::clone(&self.state);
        let generation = form.generation;
        let delay = self.config.success_display;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut form = state.form.lock().await;
            if form.generation != generation {
                return;
            }
            form.auto_reset = None;
            state.clear(&mut form);
        });
        form.auto_reset = Some(handle.abort_handle());
    }

    fn render(&self, form: &FormState) -> ContactFormView {
        let submit_button = if form.state.accepts_submit() {
            SubmitButton::ready(&*self.config.submit_label)
        } else {
            SubmitButton::busy(&*self.config.busy_label)
        };
        let succeeded = form.state == SubmissionState::Succeeded;

        ContactFormView {
            state: form.state,
            fields: form.fields.clone(),
            errors: form.errors.clone(),
            form_error: form.form_error.clone(),
            submit_button,
            form_visible: !succeeded,
            success_visible: succeeded,
            message_counter: CharacterCounter::new(self.config.message_max_chars)
                .render(&form.fields.message),
        }
    }
}

impl<Transport> ContactFormFeatureService for ContactFormFeatureServiceImpl<Transport>
where
    Transport: ContactTransportService,
{
    async fn input(&self, field: ContactField, value: String) {
        let mut form = self.state.form.lock().await;
        form.fields.set(field, value);
        form.errors.remove(field);
        form.form_error = None;
    }

    async fn blur(&self, field: ContactField) -> Option<FieldError> {
        let mut form = self.state.form.lock().await;
        let error = validate_field(field, form.fields.get(field));
        match error {
            Some(error) => form.errors.insert(error),
            None => {
                form.errors.remove(field);
            }
        }
        error
    }

    #[tracing::instrument(skip(self))]
    async fn submit(&self) -> Result<(), ContactFormSubmitError> {
        let mut form = self.state.form.lock().await;
        if !form.state.accepts_submit() {
            debug!(state = %form.state, "submit refused");
            return Err(ContactFormSubmitError::Busy);
        }

        form.generation += 1;
        let generation = form.generation;
        form.form_error = None;
        self.state.transition(&mut form, SubmissionState::Validating);

        let errors = validate_form(&form.fields);
        if !errors.is_valid() {
            debug!(%errors, "contact form invalid");
            form.errors = errors.clone();
            self.state.transition(&mut form, SubmissionState::Idle);
            return Err(ContactFormSubmitError::Invalid(errors));
        }

        form.errors.clear();
        self.state.transition(&mut form, SubmissionState::Submitting);
        let message = ContactMessage::from_fields(&form.fields);
        let in_flight = InFlightSubmission::new(&self.state, generation);
        drop(form);

        let result = self.transport.send(message).await;

        let mut form = self.state.form.lock().await;
        in_flight.disarm();
        if form.generation != generation {
            debug!("contact form was reset while sending");
            return Err(ContactFormSubmitError::Cancelled);
        }

        match result {
            Ok(()) => {
                info!("contact message sent");
                self.state.transition(&mut form, SubmissionState::Succeeded);
                self.schedule_auto_reset(&mut form);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "failed to send contact message");
                self.state.transition(&mut form, SubmissionState::Failed);
                form.form_error = Some(self.config.failure_message.to_string());
                self.state.transition(&mut form, SubmissionState::Idle);
                Err(match err {
                    ContactSendError::Send => ContactFormSubmitError::Send,
                    ContactSendError::Other(err) => ContactFormSubmitError::Other(err),
                })
            }
        }
    }

    async fn reset(&self) {
        let mut form = self.state.form.lock().await;
        form.generation += 1;
        self.state.clear(&mut form);
    }

    async fn view(&self) -> ContactFormView {
        let form = self.state.form.lock().await;
        self.render(&form)
    }

    fn subscribe(&self) -> broadcast::Receiver<SubmissionTransition> {
        self.state.transitions.subscribe()
    }
}
