use crate::core::age::calculate_age;
use crate::domain::ports::{Clock, Greeter};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A person with basic information.
///
/// `age` is whatever the caller supplied; it is not reconciled with the
/// age derived from `birthdate`. Non-negative age is only checked by
/// [`crate::utils::validation::process_person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub birthdate: NaiveDate,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            age,
            birthdate,
        }
    }

    /// `"<name> is <age> years old"`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Whole years between `birthdate` and `reference_date`.
    pub fn calculate_age(&self, reference_date: NaiveDate) -> i32 {
        calculate_age(self.birthdate, reference_date)
    }

    pub fn age_today(&self, clock: &dyn Clock) -> i32 {
        self.calculate_age(clock.today())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} years old", self.name, self.age)
    }
}

impl Greeter for Person {
    fn greet(&self) -> String {
        format!("Hello, my name is {}", self.name)
    }
}
