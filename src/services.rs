//! Registration and contact services behind the interactive menus.

use crate::db::Database;
use crate::models::{AdvisoryMessage, Farmer};
use crate::utils::validation::PhoneNumber;
use log::info;
use thiserror::Error;

pub struct Service {
    db: Database,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("A farmer with phone number {phone} is already registered")]
    AlreadyRegistered { phone: PhoneNumber },
}

impl Service {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        self.db.save()
    }

    /// Records a new farmer registration, one profile per phone number.
    pub fn register(&mut self, farmer: Farmer) -> Result<(), ServiceError> {
        if self.db.lookup_phone(&farmer.phone_number).is_some() {
            return Err(ServiceError::AlreadyRegistered {
                phone: farmer.phone_number.clone(),
            });
        }

        info!(
            "Registered farmer {} from {}",
            farmer.phone_number, farmer.location
        );
        self.db.store_farmer(farmer);
        Ok(())
    }

    /// Records a message for the advisory team.
    pub fn contact(&mut self, message: AdvisoryMessage) {
        info!("Advisory message received from {}", message.email);
        self.db.store_message(message);
    }

    pub fn list_farmers(&self) -> impl Iterator<Item = &Farmer> + '_ {
        self.db.list_farmers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, Language};
    use chrono::NaiveDate;

    fn farmer_with_phone(phone: &str) -> Farmer {
        Farmer {
            phone_number: PhoneNumber::try_from(phone).unwrap(),
            location: "Mzimba".to_string(),
            farm_size_acres: 1.2,
            preferred_language: Language::English,
            primary_crops: vec![Crop::Beans],
            registered_on: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
        }
    }

    #[test]
    fn test_duplicate_phone_is_rejected() {
        let mut service = Service::new(Database::default());

        service.register(farmer_with_phone("099123456")).unwrap();
        let second = service.register(farmer_with_phone("099123456"));

        assert!(matches!(
            second,
            Err(ServiceError::AlreadyRegistered { .. })
        ));
        assert_eq!(service.list_farmers().count(), 1);
    }

    #[test]
    fn test_distinct_phones_both_register() {
        let mut service = Service::new(Database::default());

        service.register(farmer_with_phone("099123456")).unwrap();
        service.register(farmer_with_phone("088123456")).unwrap();

        assert_eq!(service.list_farmers().count(), 2);
    }
}
