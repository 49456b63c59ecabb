use crate::domain::model::Person;
use crate::utils::error::{PersonError, Result};
use crate::utils::validation::{parse_date, validate_date, validate_non_empty_string, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Person file loaded with `--config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonFile {
    pub person: PersonSection,
    pub demo: Option<DemoSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSection {
    pub name: String,
    pub age: i32,
    pub birthdate: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoSection {
    pub reference_date: Option<String>,
}

impl PersonFile {
    /// Reads and parses a person file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a person file after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PersonError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_person(&self) -> Result<Person> {
        let birthdate = parse_date("person.birthdate", &self.person.birthdate)?;
        Ok(Person::new(self.person.name.clone(), self.person.age, birthdate))
    }

    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.demo
            .as_ref()
            .and_then(|d| d.reference_date.as_deref())
            .map(|value| parse_date("demo.reference_date", value))
            .transpose()
    }
}

// 年齡不在這裡檢查，負數交給 process_person 回報
impl Validate for PersonFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("person.name", &self.person.name)?;
        validate_date("person.birthdate", &self.person.birthdate)?;
        self.reference_date()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_person_file() {
        let toml_content = r#"
[person]
name = "Jane Roe"
age = 41
birthdate = "1983-07-14"

[demo]
reference_date = "2024-06-15"
"#;

        let file = PersonFile::from_toml_str(toml_content).unwrap();
        let person = file.to_person().unwrap();

        assert_eq!(person.name, "Jane Roe");
        assert_eq!(person.age, 41);
        assert_eq!(person.birthdate, NaiveDate::from_ymd_opt(1983, 7, 14).unwrap());
        assert_eq!(
            file.reference_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_demo_section_is_optional() {
        let toml_content = r#"
[person]
name = "Jane Roe"
age = 41
birthdate = "1983-07-14"
"#;

        let file = PersonFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.reference_date().unwrap(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PERSON_DEMO_TEST_NAME", "Env Person");

        let toml_content = r#"
[person]
name = "${PERSON_DEMO_TEST_NAME}"
age = 20
birthdate = "2004-02-02"
"#;

        let file = PersonFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.person.name, "Env Person");

        std::env::remove_var("PERSON_DEMO_TEST_NAME");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let toml_content = r#"
[person]
name = "${PERSON_DEMO_SURELY_UNSET}"
age = 20
birthdate = "2004-02-02"
"#;

        let file = PersonFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.person.name, "${PERSON_DEMO_SURELY_UNSET}");
    }

    #[test]
    fn test_validation_rejects_bad_date() {
        let toml_content = r#"
[person]
name = "Jane"
age = 41
birthdate = "14/07/1983"
"#;

        let file = PersonFile::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            file.validate(),
            Err(PersonError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_missing_field_is_toml_error() {
        let result = PersonFile::from_toml_str("[person]\nname = \"Jane\"\n");
        assert!(matches!(result, Err(PersonError::TomlError(_))));
    }

    #[test]
    fn test_person_file_from_disk() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[person]
name = "File Person"
age = 12
birthdate = "2012-12-12"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let file = PersonFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.person.name, "File Person");
    }
}
