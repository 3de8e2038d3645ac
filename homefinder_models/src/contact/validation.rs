use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::{ContactField, ContactFormFields};

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// `<local>@<domain>.<tld>` without whitespace.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional leading `+`, then at least ten digits, spaces, hyphens or
/// parentheses.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

/// A human readable validation failure for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Please enter your full name (at least 2 characters)")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a valid phone number")]
    Phone,
    #[error("Please select a subject")]
    Subject,
    #[error("Please enter a message (at least 10 characters)")]
    Message,
}

impl FieldError {
    pub fn for_field(field: ContactField) -> Self {
        match field {
            ContactField::Name => Self::Name,
            ContactField::Email => Self::Email,
            ContactField::Phone => Self::Phone,
            ContactField::Subject => Self::Subject,
            ContactField::Message => Self::Message,
        }
    }

    pub fn field(self) -> ContactField {
        match self {
            Self::Name => ContactField::Name,
            Self::Email => ContactField::Email,
            Self::Phone => ContactField::Phone,
            Self::Subject => ContactField::Subject,
            Self::Message => ContactField::Message,
        }
    }
}

/// Field errors of a form, keyed by field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ContactField, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn remove(&mut self, field: ContactField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

/// Checks a single field value. Rules do not depend on other fields.
pub fn validate_field(field: ContactField, value: &str) -> Option<FieldError> {
    let valid = match field {
        ContactField::Name => value.trim().chars().count() >= NAME_MIN_CHARS,
        ContactField::Email => is_valid_email(value),
        ContactField::Phone => value.is_empty() || PHONE_REGEX.is_match(value),
        ContactField::Subject => !value.is_empty(),
        ContactField::Message => value.trim().chars().count() >= MESSAGE_MIN_CHARS,
    };

    (!valid).then(|| FieldError::for_field(field))
}

/// Checks every field of the form and collects the failures.
pub fn validate_form(fields: &ContactFormFields) -> ValidationErrors {
    fields
        .iter()
        .filter_map(|(field, value)| validate_field(field, value))
        .collect()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
