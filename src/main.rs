use anyhow::{anyhow, Context, Result};
use chrono::Local;
use derive_more::Display;
use inquire::{Editor, MultiSelect, Select, Text};
use log::warn;
use mlimi::db::Database;
use mlimi::models::{AdvisoryMessage, Crop, Farmer, Language};
use mlimi::services::Service;
use mlimi::utils::format::format_date;
use mlimi::utils::messages::{REGISTRATION_ERROR, VALIDATION_ERROR};
use mlimi::utils::validation::{
    validate_field, EmailAddress, Field, Form, Kind, PhoneNumber, Verdict,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const DB_FILE: &str = "registrations.json";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu.
trait Menu {
    /// Runs the menu body once. Returns None when the menu wants to
    /// close, or Some(()) to show it again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, reporting errors without leaving,
    /// until the menu asks to close.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    service: Service,
}

impl App {
    pub fn new(service: Service) -> Self {
        App { service }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Welcome to the Malawi crop advisory service.");
        self.enter_loop();
        self.service.save()?;
        Ok(())
    }

    fn register_farmer(&mut self) -> Result<()> {
        let phone = Text::new("Phone number:")
            .with_placeholder("+265...")
            .with_help_message("Enter your mobile phone number with country code")
            .prompt()?;
        let location = Text::new("Location (district):").prompt()?;
        let farm_size = Text::new("Farm size in acres:")
            .with_help_message("Approximate size of your farm in acres")
            .prompt()?;

        check_entries(&[
            ("phone number", Field::required(Kind::Telephone, phone.as_str())),
            ("location", Field::required(Kind::Generic, location.as_str())),
            ("farm size", Field::required(Kind::Generic, farm_size.as_str())),
        ])?;

        let farm_size_acres: f64 = farm_size
            .trim()
            .parse()
            .map_err(|_| anyhow!("Farm size must be a number"))?;
        if farm_size_acres <= 0.0 {
            return Err(anyhow!("Farm size must be greater than zero"));
        }

        let preferred_language =
            Select::new("Preferred language:", Language::iter().collect()).prompt()?;
        let primary_crops = MultiSelect::new("Primary crops:", Crop::iter().collect())
            .with_help_message("Select the main crops you grow")
            .prompt()?;

        self.service
            .register(Farmer {
                phone_number: PhoneNumber::try_from(phone.as_str())?,
                location: location.trim().to_owned(),
                farm_size_acres,
                preferred_language,
                primary_crops,
                registered_on: Local::now().date_naive(),
            })
            .context(REGISTRATION_ERROR)?;

        println!("[*] Registration received.");
        Ok(())
    }

    fn contact_advisor(&mut self) -> Result<()> {
        let name = Text::new("Your name:").prompt()?;
        let email = Text::new("Email address:").prompt()?;
        let phone = Text::new("Phone number (optional):").prompt()?;

        check_entries(&[
            ("name", Field::required(Kind::Generic, name.as_str())),
            ("email", Field::required(Kind::Email, email.as_str())),
            ("phone number", Field::optional(Kind::Telephone, phone.as_str())),
        ])?;

        let message = Editor::new("Your message:").prompt()?;
        if validate_field(&message, true, Kind::Generic) != Verdict::Valid {
            return Err(anyhow!("Message cannot be empty"));
        }

        let phone = phone.trim();
        self.service.contact(AdvisoryMessage {
            name: name.trim().to_owned(),
            email: EmailAddress::try_from(email.as_str())?,
            phone: if phone.is_empty() {
                None
            } else {
                Some(PhoneNumber::try_from(phone)?)
            },
            message,
            sent_on: Local::now().date_naive(),
        });

        println!("[*] Your message has been sent to the advisory team.");
        Ok(())
    }

    fn list_farmers(&self) {
        let farmers: Vec<&Farmer> = self.service.list_farmers().collect();

        if farmers.is_empty() {
            println!("[*] No farmers registered yet");
            return;
        }

        for farmer in farmers {
            println!(
                "{} | {} | {:.1} acres | {} | registered {}",
                farmer.phone_number,
                farmer.location,
                farmer.farm_size_acres,
                farmer.preferred_language,
                format_date(farmer.registered_on),
            );
        }
    }
}

/// Validates the entered fields together and prints a hint for each
/// rejected one, the way the web form flags inputs on submit. Every field
/// is checked so every hint is shown, even when an early field already
/// failed.
fn check_entries(entries: &[(&str, Field)]) -> Result<()> {
    let form: Form = entries.iter().map(|(_, field)| field.clone()).collect();
    let report = form.validate();

    for ((label, _), verdict) in entries.iter().zip(report.verdicts()) {
        if let Verdict::Invalid(fault) = verdict {
            println!("[!] {label}: {fault}");
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        warn!("Form submission rejected by validation");
        Err(anyhow!(VALIDATION_ERROR))
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Register as a farmer")]
            Register,
            #[display("Contact an advisor")]
            Contact,
            #[display("List registered farmers")]
            List,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What would you like to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Register => {
                self.register_farmer()?;
                Ok(MENU_LOOP)
            }
            Choice::Contact => {
                self.contact_advisor()?;
                Ok(MENU_LOOP)
            }
            Choice::List => {
                self.list_farmers();
                Ok(MENU_LOOP)
            }
            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

fn main() -> anyhow::Result<()> {
    simple_logging::log_to_file("./mlimi.log", log::LevelFilter::Info)?;

    let db = Database::open(DB_FILE.into())?;
    App::new(Service::new(db)).start()
}
