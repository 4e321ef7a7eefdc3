//! User-facing messages shared by the menu flows.

pub const VALIDATION_ERROR: &str = "Please fill in all required fields correctly.";

pub const REGISTRATION_ERROR: &str = "Registration failed";
