use crate::config::toml_config::PersonFile;
use crate::config::DemoSettings;
use crate::core::demo::OutputFormat;
use crate::domain::model::Person;
use crate::utils::error::Result;
use crate::utils::validation::{parse_date, validate_date, validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-demo")]
#[command(about = "Demonstrates a Person model, its greeting capability and age calculation")]
pub struct CliConfig {
    #[arg(long, default_value = "John Doe")]
    pub name: String,

    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    pub age: i32,

    /// Birthdate as YYYY-MM-DD
    #[arg(long, default_value = "1990-01-01")]
    pub birthdate: String,

    /// Date used as "now" for age calculation (YYYY-MM-DD), defaults to today in UTC
    #[arg(long)]
    pub reference_date: Option<String>,

    /// TOML person file; replaces --name, --age and --birthdate
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併命令列與設定檔，命令列的 --reference-date 優先
    pub fn resolve(&self) -> Result<DemoSettings> {
        let format: OutputFormat = self.format.parse()?;
        let cli_reference = self
            .reference_date
            .as_deref()
            .map(|value| parse_date("reference_date", value))
            .transpose()?;

        let (person, reference_date) = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading person from: {}", path);
                let file = PersonFile::from_file(path)?;
                file.validate()?;
                let file_reference = file.reference_date()?;
                (file.to_person()?, cli_reference.or(file_reference))
            }
            None => {
                let birthdate = parse_date("birthdate", &self.birthdate)?;
                (Person::new(self.name.clone(), self.age, birthdate), cli_reference)
            }
        };

        Ok(DemoSettings {
            person,
            reference_date,
            format,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_none() {
            validate_non_empty_string("name", &self.name)?;
            validate_date("birthdate", &self.birthdate)?;
        }
        if let Some(reference_date) = &self.reference_date {
            validate_date("reference_date", reference_date)?;
        }
        self.format.parse::<OutputFormat>()?;
        Ok(())
    }
}
