use super::{ContactField, ContactFormFields, SubmissionState, SubmitButton, ValidationErrors};
use crate::ui::counter::CounterView;

/// Everything a presentation layer needs to draw the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub state: SubmissionState,
    pub fields: ContactFormFields,
    pub errors: ValidationErrors,
    /// Error that does not belong to a single field, e.g. a failed send.
    pub form_error: Option<String>,
    pub submit_button: SubmitButton,
    pub form_visible: bool,
    pub success_visible: bool,
    pub message_counter: CounterView,
}

impl ContactFormView {
    /// Text of the error slot next to `field`; empty when the field is fine.
    pub fn error_text(&self, field: ContactField) -> String {
        self.errors
            .get(field)
            .map(|error| error.to_string())
            .unwrap_or_default()
    }

    /// Whether `field` should be drawn with the error border.
    pub fn is_errored(&self, field: ContactField) -> bool {
        self.errors.contains(field)
    }
}
