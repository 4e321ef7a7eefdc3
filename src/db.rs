//! In-memory storage for submitted registrations, saved to JSON.

use crate::models::{AdvisoryMessage, Farmer};
use crate::utils::validation::PhoneNumber;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, ErrorKind::NotFound},
    path::PathBuf,
};

#[derive(Serialize, Deserialize, Default)]
pub struct Database {
    #[serde(skip)]
    path: Option<PathBuf>,
    farmers: Vec<Farmer>,
    messages: Vec<AdvisoryMessage>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self, io::Error> {
        match File::open(&path) {
            // File successfully opened
            Ok(f) => {
                let mut db: Self = serde_json::from_reader(f)?;
                db.path = Some(path);
                Ok(db)
            }

            // No registration file yet, create one
            Err(not_found) if not_found.kind() == NotFound => {
                info!("Registration file not found, creating new empty one");
                let mut new_db = Database::default();
                new_db.path = Some(path);

                // Save immediately to catch IO problems before any data is entered
                new_db.save()?;
                Ok(new_db)
            }

            // Any other IO error, give up
            Err(other) => Err(other),
        }
    }

    pub fn save(&self) -> Result<(), io::Error> {
        if let Some(path) = &self.path {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(file, self)?;
        }
        Ok(())
    }

    pub fn lookup_phone(&self, phone: &PhoneNumber) -> Option<&Farmer> {
        self.farmers.iter().find(|farmer| &farmer.phone_number == phone)
    }

    pub fn store_farmer(&mut self, farmer: Farmer) {
        self.farmers.push(farmer);
    }

    pub fn store_message(&mut self, message: AdvisoryMessage) {
        self.messages.push(message);
    }

    pub fn list_farmers(&self) -> impl Iterator<Item = &Farmer> + '_ {
        self.farmers.iter()
    }

    pub fn list_messages(&self) -> impl Iterator<Item = &AdvisoryMessage> + '_ {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, Language};
    use crate::utils::validation::EmailAddress;
    use chrono::NaiveDate;

    fn sample_farmer() -> Farmer {
        Farmer {
            phone_number: PhoneNumber::try_from("099123456").unwrap(),
            location: "Lilongwe".to_string(),
            farm_size_acres: 2.5,
            preferred_language: Language::Chichewa,
            primary_crops: vec![Crop::Maize, Crop::Groundnuts],
            registered_on: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_open_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let mut db = Database::open(path.clone()).unwrap();
        db.store_farmer(sample_farmer());
        db.store_message(AdvisoryMessage {
            name: "Chisomo Banda".to_string(),
            email: EmailAddress::try_from("chisomo@example.com").unwrap(),
            phone: None,
            message: "When should I plant groundnuts this season?".to_string(),
            sent_on: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
        });
        db.save().unwrap();

        let reloaded = Database::open(path).unwrap();
        let phone = PhoneNumber::try_from("099123456").unwrap();
        let found = reloaded.lookup_phone(&phone).unwrap();
        assert_eq!(found.location, "Lilongwe");
        assert_eq!(found.primary_crops, vec![Crop::Maize, Crop::Groundnuts]);

        let messages: Vec<_> = reloaded.list_messages().collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].email.as_ref(), "chisomo@example.com");
    }

    #[test]
    fn test_lookup_unknown_phone() {
        let db = Database::default();
        let phone = PhoneNumber::try_from("088123456").unwrap();
        assert!(db.lookup_phone(&phone).is_none());
    }
}
