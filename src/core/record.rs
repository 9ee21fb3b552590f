//! # Contact Records
//!
//! A contact is either a `Person` or an `Organization`. Both carry a phone
//! number and a pair of timestamps; the rest of the fields depend on the
//! variant.
//!
//! ```text
//! Contact (serde tag = "type")
//! ├── Person        name, lastName, birthDate, gender
//! └── Organization  name, address
//!     + number, timeCreated, timeEdited   (both variants)
//! ```
//!
//! Unset fields hold [`NO_DATA`] (or [`NO_NUMBER`] for the phone number), so
//! nothing is ever empty. Editable fields are listed in a fixed table per
//! variant and resolved by [`Contact::field_for`].

use serde::{Deserialize, Serialize};

use crate::core::clock::Clock;
use crate::core::console::Console;
use crate::core::validate::{self, ValidationError};

/// Placeholder for a text field the user never supplied.
pub const NO_DATA: &str = "[no data]";
/// Placeholder for a missing or rejected phone number.
pub const NO_NUMBER: &str = "[no number]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Person,
    Organization,
}

impl ContactKind {
    /// Parses the answer to the "Enter the type" prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "person" => Some(ContactKind::Person),
            "organization" => Some(ContactKind::Organization),
            _ => None,
        }
    }
}

/// Fields a user may change from the record view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surname,
    BirthDate,
    Gender,
    Address,
    Number,
}

impl Field {
    pub fn key(self) -> &'static str {
        self.keys()[0]
    }

    /// Names a selector is matched against; the first is the prompt name,
    /// the rest are the wire-format spellings where they differ.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["name"],
            Field::Surname => &["surname", "lastName"],
            Field::BirthDate => &["birthDate"],
            Field::Gender => &["gender"],
            Field::Address => &["address"],
            Field::Number => &["number"],
        }
    }
}

const PERSON_FIELDS: &[Field] = &[
    Field::Name,
    Field::Surname,
    Field::BirthDate,
    Field::Gender,
    Field::Number,
];

const ORGANIZATION_FIELDS: &[Field] = &[Field::Name, Field::Address, Field::Number];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub number: String,
    pub time_created: String,
    pub time_edited: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub address: String,
    pub number: String,
    pub time_created: String,
    pub time_edited: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Contact {
    Person(Person),
    Organization(Organization),
}

impl Person {
    pub fn new(created_at: String) -> Self {
        Self {
            name: NO_DATA.to_string(),
            last_name: NO_DATA.to_string(),
            birth_date: NO_DATA.to_string(),
            gender: NO_DATA.to_string(),
            number: NO_NUMBER.to_string(),
            time_edited: created_at.clone(),
            time_created: created_at,
        }
    }
}

impl Organization {
    pub fn new(created_at: String) -> Self {
        Self {
            name: NO_DATA.to_string(),
            address: NO_DATA.to_string(),
            number: NO_NUMBER.to_string(),
            time_edited: created_at.clone(),
            time_created: created_at,
        }
    }
}

/// Prompts once and runs `check` on the answer, printing the diagnostic on rejection.
fn ask<C: Console + ?Sized>(
    console: &mut C,
    message: &str,
    check: fn(&str) -> Result<String, ValidationError>,
) -> Option<String> {
    let input = console.prompt(message).unwrap_or_default();
    match check(&input) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Rejected input for {:?}: {}", message, e);
            console.say(&e.to_string());
            None
        }
    }
}

impl Contact {
    /// Walks the user through every field of a new contact.
    ///
    /// Never fails: a rejected answer leaves the field at its placeholder
    /// and the next field is asked for.
    pub fn create<C: Console + ?Sized>(kind: ContactKind, console: &mut C, clock: &dyn Clock) -> Contact {
        let contact = match kind {
            ContactKind::Person => {
                let name = ask(console, "Enter the name:", validate::text);
                let last_name = ask(console, "Enter the surname:", validate::text);
                let birth_date = ask(console, "Enter the birth date:", validate::birth_date);
                let gender = ask(console, "Enter the gender (M, F):", validate::gender);
                let number = ask(console, "Enter the number:", validate::phone);

                let mut person = Person::new(clock.now());
                person.name = name.unwrap_or(person.name);
                person.last_name = last_name.unwrap_or(person.last_name);
                person.birth_date = birth_date.unwrap_or(person.birth_date);
                person.gender = gender.unwrap_or(person.gender);
                person.number = number.unwrap_or(person.number);
                Contact::Person(person)
            }
            ContactKind::Organization => {
                let name = ask(console, "Enter the organization name:", validate::text);
                let address = ask(console, "Enter the address:", validate::text);
                let number = ask(console, "Enter the number:", validate::phone);

                let mut org = Organization::new(clock.now());
                org.name = name.unwrap_or(org.name);
                org.address = address.unwrap_or(org.address);
                org.number = number.unwrap_or(org.number);
                Contact::Organization(org)
            }
        };
        console.say("The record added.\n");
        contact
    }

    pub fn kind(&self) -> ContactKind {
        match self {
            Contact::Person(_) => ContactKind::Person,
            Contact::Organization(_) => ContactKind::Organization,
        }
    }

    pub fn number(&self) -> &str {
        match self {
            Contact::Person(p) => &p.number,
            Contact::Organization(o) => &o.number,
        }
    }

    pub fn time_created(&self) -> &str {
        match self {
            Contact::Person(p) => &p.time_created,
            Contact::Organization(o) => &o.time_created,
        }
    }

    pub fn time_edited(&self) -> &str {
        match self {
            Contact::Person(p) => &p.time_edited,
            Contact::Organization(o) => &o.time_edited,
        }
    }

    /// The editable fields of this variant, in prompt order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Contact::Person(_) => PERSON_FIELDS,
            Contact::Organization(_) => ORGANIZATION_FIELDS,
        }
    }

    pub fn field_prompt(&self) -> &'static str {
        match self {
            Contact::Person(_) => "Select a field (name, surname, birth, gender, number):",
            Contact::Organization(_) => "Select a field (name, address, number):",
        }
    }

    /// First field with a key containing `selector` (case-sensitive).
    pub fn field_for(&self, selector: &str) -> Option<Field> {
        self.fields()
            .iter()
            .copied()
            .find(|field| field.keys().iter().any(|key| key.contains(selector)))
    }

    /// Asks for a new value of the field named by `selector` and stores it.
    ///
    /// Unlike [`Contact::create`], the value is stored as typed: no field
    /// validation runs here. Returns `false` when nothing was changed.
    pub fn edit<C: Console + ?Sized>(&mut self, selector: &str, console: &mut C, clock: &dyn Clock) -> bool {
        let Some(field) = self.field_for(selector) else {
            log::debug!("No field matches selector {:?}", selector);
            return false;
        };
        match console.prompt(&format!("Enter {selector}:")) {
            Some(value) => self.set_field(field, value, clock),
            None => false,
        }
    }

    /// Assigns `value` to `field` and refreshes `timeEdited`.
    /// Returns `false` if the field does not belong to this variant.
    pub fn set_field(&mut self, field: Field, value: String, clock: &dyn Clock) -> bool {
        let slot = match (&mut *self, field) {
            (Contact::Person(p), Field::Name) => &mut p.name,
            (Contact::Person(p), Field::Surname) => &mut p.last_name,
            (Contact::Person(p), Field::BirthDate) => &mut p.birth_date,
            (Contact::Person(p), Field::Gender) => &mut p.gender,
            (Contact::Person(p), Field::Number) => &mut p.number,
            (Contact::Organization(o), Field::Name) => &mut o.name,
            (Contact::Organization(o), Field::Address) => &mut o.address,
            (Contact::Organization(o), Field::Number) => &mut o.number,
            _ => return false,
        };
        *slot = value;
        self.touch(clock);
        true
    }

    /// Moves `timeEdited` forward to now; it never moves backwards.
    fn touch(&mut self, clock: &dyn Clock) {
        let now = clock.now();
        let edited = match self {
            Contact::Person(p) => &mut p.time_edited,
            Contact::Organization(o) => &mut o.time_edited,
        };
        if now > *edited {
            *edited = now;
        }
    }

    /// One-line label used by listings and search results.
    pub fn summary_line(&self) -> String {
        match self {
            Contact::Person(p) => format!("{} {}", p.name, p.last_name),
            Contact::Organization(o) => o.name.clone(),
        }
    }

    pub fn detail_text(&self) -> String {
        match self {
            Contact::Person(p) => format!(
                "Name: {}\nSurname: {}\nBirth date: {}\nGender: {}\nNumber: {}\nTime created: {}\nTime last edit: {}",
                p.name, p.last_name, p.birth_date, p.gender, p.number, p.time_created, p.time_edited
            ),
            Contact::Organization(o) => format!(
                "Organization name: {}\nAddress: {}\nNumber: {}\nTime created: {}\nTime last edit: {}",
                o.name, o.address, o.number, o.time_created, o.time_edited
            ),
        }
    }

    /// Every stored value except the `[no data]` placeholder, timestamps included.
    pub fn searchable_fields(&self) -> Vec<&str> {
        let values: Vec<&str> = match self {
            Contact::Person(p) => vec![
                p.name.as_str(),
                p.last_name.as_str(),
                p.birth_date.as_str(),
                p.gender.as_str(),
                p.number.as_str(),
                p.time_created.as_str(),
                p.time_edited.as_str(),
            ],
            Contact::Organization(o) => vec![
                o.name.as_str(),
                o.address.as_str(),
                o.number.as_str(),
                o.time_created.as_str(),
                o.time_edited.as_str(),
            ],
        };
        values.into_iter().filter(|value| *value != NO_DATA).collect()
    }
}
