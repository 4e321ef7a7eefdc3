//! Wrapper type for an email address that has been validated.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::utils::validation::shape;
use crate::utils::validation::types::InvalidInput;

/// An email address that passed the shape check, stored trimmed and
/// lowercased for consistency.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
pub struct EmailAddress(String);

impl TryFrom<&str> for EmailAddress {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();

        if !shape::is_email_shaped(trimmed) {
            return Err(InvalidInput);
        }

        Ok(Self(trimmed.to_lowercase()))
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
