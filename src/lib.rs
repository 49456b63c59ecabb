pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::{toml_config::PersonFile, DemoSettings};
pub use crate::core::age::calculate_age;
pub use crate::core::demo::{DemoEngine, DemoReport, OutputFormat};
pub use domain::model::Person;
pub use domain::ports::{Clock, FixedClock, Greeter, SystemClock};
pub use utils::error::{PersonError, Result};
pub use utils::validation::process_person;
