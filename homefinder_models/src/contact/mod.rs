use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::nutype_string;

mod submission;
mod validation;
mod view;

pub use submission::{SubmissionState, SubmissionTransition, SubmitButton};
pub use validation::{
    is_valid_email, validate_field, validate_form, FieldError, ValidationErrors, EMAIL_REGEX,
    MESSAGE_MIN_CHARS, NAME_MIN_CHARS, PHONE_REGEX,
};
pub use view::ContactFormView;

/// The named inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Id of the element that displays this field's validation message.
    pub fn error_slot_id(self) -> String {
        format!("{}Error", self.as_str())
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field: {0}")]
pub struct UnknownContactFieldError(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactFieldError(s.into()))
    }
}

/// Raw values of the contact form as typed by the user.
///
/// A field that was never filled in is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        ContactField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

impl<V: Into<String>> FromIterator<(ContactField, V)> for ContactFormFields {
    fn from_iter<T: IntoIterator<Item = (ContactField, V)>>(iter: T) -> Self {
        let mut fields = Self::default();
        for (field, value) in iter {
            fields.set(field, value);
        }
        fields
    }
}

/// A validated contact form submission, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
    pub phone: Option<ContactMessagePhone>,
}

nutype_string!(ContactMessageAuthorName(sanitize(trim)));
nutype_string!(ContactMessageAuthorEmail(sanitize(trim)));
nutype_string!(ContactMessagePhone(sanitize(trim)));
nutype_string!(ContactMessageSubject(sanitize(trim)));
nutype_string!(ContactMessageContent(sanitize(trim)));

impl ContactMessage {
    /// Builds the message from form values.
    ///
    /// Callers are expected to have run [`validate_form`] first; this only
    /// sanitizes.
    pub fn from_fields(fields: &ContactFormFields) -> Self {
        let phone = ContactMessagePhone::new(fields.phone.as_str());
        Self {
            author: ContactMessageAuthor {
                name: ContactMessageAuthorName::new(fields.name.as_str()),
                email: ContactMessageAuthorEmail::new(fields.email.as_str()),
                phone: (!phone.is_empty()).then_some(phone),
            },
            subject: ContactMessageSubject::new(fields.subject.as_str()),
            content: ContactMessageContent::new(fields.message.as_str()),
        }
    }
}
