//! The per-field validation predicate and the field model it runs on.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::utils::validation::shape;
use crate::utils::validation::verdict::{Fault, Verdict};

/// Declared semantic type of a field's content, controlling which shape
/// check applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Kind {
    /// Free text; only the required flag applies.
    Generic,
    Email,
    Telephone,
}

/// A single form input: its current value, whether it must be filled in,
/// and the kind of content it declares. A field has no identity beyond its
/// position in a form and lives only for the duration of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub value: String,
    pub required: bool,
    pub kind: Kind,
}

impl Field {
    pub fn required(kind: Kind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            required: true,
            kind,
        }
    }

    pub fn optional(kind: Kind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            required: false,
            kind,
        }
    }

    /// Validates the field's current value.
    pub fn validate(&self) -> Verdict {
        validate_field(&self.value, self.required, self.kind)
    }
}

/// Validates one field value against its required flag and kind.
///
/// The value is trimmed before evaluation. Only required-emptiness skips
/// the shape checks: an optional field holding a malformed non-empty value
/// still comes back invalid. An optional field left empty is [`Verdict::Neutral`],
/// neither flagged valid nor invalid.
///
/// Total over all inputs; never panics and never returns an error type.
pub fn validate_field(value: &str, required: bool, kind: Kind) -> Verdict {
    let value = value.trim();

    if required && value.is_empty() {
        return Verdict::Invalid(Fault::MissingRequired);
    }

    if kind == Kind::Email && !value.is_empty() && !shape::is_email_shaped(value) {
        return Verdict::Invalid(Fault::MalformedEmail);
    }

    if kind == Kind::Telephone && !value.is_empty() && !shape::is_phone_shaped(value) {
        return Verdict::Invalid(Fault::MalformedPhone);
    }

    if value.is_empty() {
        Verdict::Neutral
    } else {
        Verdict::Valid
    }
}
