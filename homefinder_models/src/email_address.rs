use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A syntactically valid address as accepted by the SMTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

/// An address with an optional display name, e.g. `HomeFinder <hello@homefinder.example>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: impl Into<String>) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox::new(Some(name.into()), self.0))
    }
}

impl EmailAddressWithName {
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn email(&self) -> EmailAddress {
        EmailAddress(self.0.email.clone())
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(value: EmailAddress) -> Self {
        Self(lettre::message::Mailbox::new(None, value.0))
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_name() {
        let mailbox = "HomeFinder <hello@homefinder.example>"
            .parse::<EmailAddressWithName>()
            .unwrap();

        assert_eq!(mailbox.name(), Some("HomeFinder"));
        assert_eq!(mailbox.email().as_str(), "hello@homefinder.example");
    }

    #[test]
    fn without_name() {
        let address = "hello@homefinder.example".parse::<EmailAddress>().unwrap();
        let mailbox = EmailAddressWithName::from(address.clone());

        assert_eq!(mailbox.name(), None);
        assert_eq!(mailbox.email(), address);
    }

    #[test]
    fn reject_invalid() {
        assert!("not an address".parse::<EmailAddress>().is_err());
    }
}
