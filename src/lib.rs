//! Form-field validation and registration flows for a crop-advisory
//! platform.
//!
//! The heart of the crate is [`utils::validation`]: a pure, tri-state field
//! validator plus typed wrappers for values that passed it. Around it sit
//! the farmer-registration model, a JSON-backed registration store, and the
//! display-formatting helpers the site uses.

pub mod db;
pub mod models;
pub mod services;
pub mod utils;
