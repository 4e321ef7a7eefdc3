//! Wrapper types for values that have crossed the form boundary.
//! Each can only be constructed through validation.

mod email;
mod phone;

use derive_more::derive::Display;
use thiserror::Error;

// Re-export commonly used types and functions
pub use email::EmailAddress;
pub use phone::PhoneNumber;

/// Error returned when a wrapper rejects its input.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("invalid input")]
pub struct InvalidInput;
