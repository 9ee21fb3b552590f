//! # Field Validation
//!
//! Pure checks for the text a user types while creating a contact.
//! Every function returns the accepted (possibly normalized) value or a
//! `ValidationError` whose `Display` is the diagnostic shown to the user.
//!
//! Rejection is never fatal: the caller decides whether the field keeps its
//! sentinel or its previous value.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::RegexSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Bad address!")]
    BadText,
    #[error("Wrong number format!")]
    WrongNumber,
    #[error("Bad birth date!")]
    BadBirthDate,
    #[error("Bad gender!")]
    BadGender,
}

// Optional `+`, optional country digit, optional space, then one of four shapes:
// (a) parenthesized first group, (b) parenthesized group suffix,
// (c) plain groups, (d) parenthesized second group.
// Digits and spaces are ASCII only.
const PHONE_PATTERNS: [&str; 4] = [
    r"^\+?[0-9]?(?-u:\s)?\([a-zA-Z0-9]+\)([ -][a-zA-Z0-9]{2,})*$",
    r"^\+?[0-9]?(?-u:\s)?[a-zA-Z0-9]+\(([ -][a-zA-Z0-9]{2,})*\)$",
    r"^\+?[0-9]?(?-u:\s)?[a-zA-Z0-9]+([ -][a-zA-Z0-9]{2,})*$",
    r"^\+?[0-9]?(?-u:\s)?[a-zA-Z0-9]+[ -]\([a-zA-Z0-9]+\)([ -][a-zA-Z0-9]*)*$",
];

static PHONE_SHAPES: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(PHONE_PATTERNS).expect("phone patterns are valid regexes"));

/// Names, surnames and addresses: anything non-blank, trimmed.
pub fn text(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::BadText)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Phone numbers are accepted verbatim when they match any known shape.
pub fn phone(input: &str) -> Result<String, ValidationError> {
    if PHONE_SHAPES.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(ValidationError::WrongNumber)
    }
}

/// Parses an ISO calendar date (`YYYY-MM-DD`) and returns it re-rendered.
pub fn birth_date(input: &str) -> Result<String, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| ValidationError::BadBirthDate)
}

pub fn gender(input: &str) -> Result<String, ValidationError> {
    let upper = input.trim().to_uppercase();
    match upper.as_str() {
        "M" | "F" => Ok(upper),
        _ => Err(ValidationError::BadGender),
    }
}
