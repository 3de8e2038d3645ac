use thiserror::Error;

use crate::contact::is_valid_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewsletterSignupError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";

/// Checks a newsletter signup and returns the confirmation text.
pub fn sign_up(email: &str) -> Result<&'static str, NewsletterSignupError> {
    if !email.is_empty() && is_valid_email(email) {
        Ok(NEWSLETTER_THANKS)
    } else {
        Err(NewsletterSignupError::InvalidEmail)
    }
}
