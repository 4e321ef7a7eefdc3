//! Validation outcomes reported for a single field.

use derive_more::derive::Display;

/// Tri-state outcome of validating one field.
///
/// Every input maps to exactly one verdict; malformed input is a normal
/// [`Verdict::Invalid`], never an error. Callers map the verdict to
/// presentation state (flag the field, clear it, or leave it untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Non-empty value that passed every check applicable to its kind.
    Valid,
    /// The value was rejected, with the reason to surface to the user.
    Invalid(Fault),
    /// Optional field left empty; nothing to flag either way.
    Neutral,
}

impl Verdict {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Verdict::Invalid(_))
    }
}

/// Reason carried by an invalid verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Fault {
    #[display("this field is required")]
    MissingRequired,
    #[display("enter a valid email address")]
    MalformedEmail,
    #[display("enter a valid phone number")]
    MalformedPhone,
}
