use crate::domain::model::Person;
use crate::utils::error::{PersonError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Read-only guard run before a person is used any further.
pub fn process_person(person: Option<&Person>) -> Result<()> {
    let person = person.ok_or(PersonError::InvalidInput)?;
    if person.age < 0 {
        return Err(PersonError::InvalidAge { age: person.age });
    }
    Ok(())
}

impl Validate for Person {
    fn validate(&self) -> Result<()> {
        process_person(Some(self))
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PersonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| PersonError::DateParseError {
        field: field_name.to_string(),
        value: value.to_string(),
    })
}

pub fn validate_date(field_name: &str, value: &str) -> Result<()> {
    parse_date(field_name, value).map(|_| ())
}
