//! Domain model for farmer registration and advisory contact.

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::utils::validation::{EmailAddress, PhoneNumber};

/// Languages the advisory site is published in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Language {
    English,
    Chichewa,
}

/// Staple crops a farmer can register as growing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Crop {
    Maize,
    Beans,
    Groundnuts,
    Rice,
    Cassava,
    Tobacco,
}

/// A registered farmer profile. The phone number doubles as the contact
/// identity, so one profile exists per number.
#[derive(Debug, Serialize, Deserialize, Display)]
#[display("{phone_number}")]
pub struct Farmer {
    pub phone_number: PhoneNumber,
    pub location: String,
    pub farm_size_acres: f64,
    pub preferred_language: Language,
    pub primary_crops: Vec<Crop>,
    pub registered_on: NaiveDate,
}

/// A message sent to the advisory team through the contact form.
#[derive(Debug, Serialize, Deserialize, Display)]
#[display("{name} <{email}>")]
pub struct AdvisoryMessage {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub message: String,
    pub sent_on: NaiveDate,
}
