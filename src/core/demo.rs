use crate::domain::model::Person;
use crate::domain::ports::{Clock, Greeter};
use crate::utils::error::{PersonError, Result};
use crate::utils::validation::process_person;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = PersonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PersonError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

/// Everything the demonstration produces, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub person: Person,
    pub description: String,
    pub greeting: String,
    pub calculated_age: i32,
    pub capability_greeting: String,
    pub error: Option<String>,
}

impl DemoReport {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.description.clone(),
            self.greeting.clone(),
            format!("Calculated age: {}", self.calculated_age),
            self.capability_greeting.clone(),
        ];
        if let Some(error) = &self.error {
            lines.push(format!("Error processing person: {}", error));
        }
        lines
    }
}

/// Runs the fixed person demonstration against an injected clock.
pub struct DemoEngine<'a> {
    person: &'a Person,
    clock: &'a dyn Clock,
}

impl<'a> DemoEngine<'a> {
    pub fn new(person: &'a Person, clock: &'a dyn Clock) -> Self {
        Self { person, clock }
    }

    pub fn run(&self) -> DemoReport {
        tracing::debug!("Running demo for {:?}", self.person);

        let description = self.person.describe();
        let greeting = self.person.greet();

        let reference_date = self.clock.today();
        let calculated_age = self.person.calculate_age(reference_date);
        tracing::debug!("📅 Reference date {} -> age {}", reference_date, calculated_age);

        // 透過 trait object 呼叫，不依賴具體型別
        let greeter: &dyn Greeter = self.person;
        let capability_greeting = greeter.greet();

        let error = match process_person(Some(self.person)) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    "⚠️ Validation failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                Some(e.to_string())
            }
        };

        DemoReport {
            person: self.person.clone(),
            description,
            greeting,
            calculated_age,
            capability_greeting,
            error,
        }
    }

    pub fn run_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<DemoReport> {
        let report = self.run();
        match format {
            OutputFormat::Text => {
                for line in report.lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(report)
    }
}
