//! Wrapper type for a Malawi phone number that has been validated.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::utils::validation::shape;
use crate::utils::validation::types::InvalidInput;

/// A phone number in the Malawi convention, stored with all whitespace
/// stripped so equal numbers compare equal.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
pub struct PhoneNumber(String);

impl TryFrom<&str> for PhoneNumber {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Remove the whitespace
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

        if !shape::is_phone_shaped(&compact) {
            return Err(InvalidInput);
        }

        Ok(Self(compact))
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
