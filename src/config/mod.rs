#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::demo::OutputFormat;
use crate::domain::model::Person;
use crate::domain::ports::{Clock, FixedClock, SystemClock};
use chrono::NaiveDate;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Resolved inputs for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub person: Person,
    /// `None` means "today" from the system clock.
    pub reference_date: Option<NaiveDate>,
    pub format: OutputFormat,
}

impl DemoSettings {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_date {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }
}
