//! Maze tool configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::{Hand, MazeError};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// File name looked up by [`MazeConfig::discover`].
pub const CONFIG_FILE_NAME: &str = ".trimaze.json";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(MazeError::config(format!(
                "unknown format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Defaults for the command-line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Hand kept on the wall while tracing.
    #[serde(default)]
    pub hand: Hand,

    /// Abort a trace after this many cells.
    #[serde(default)]
    pub max_steps: Option<usize>,

    /// Abort a trace that provably never exits.
    #[serde(default)]
    pub detect_cycles: bool,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl MazeConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| MazeError::config(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parses configuration from JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| MazeError::config(format!("Invalid JSON: {}", e)))?;

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(MazeError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| MazeError::config(format!("Invalid config: {}", e)))
    }

    /// Returns the config file in `dir`, if there is one.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_default() {
        let config = MazeConfig::new();
        assert_eq!(config.hand, Hand::Right);
        assert_eq!(config.max_steps, None);
        assert!(!config.detect_cycles);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "hand": "left",
            "max_steps": 100,
            "detect_cycles": true,
            "format": "json"
        }"#;

        let config = MazeConfig::from_json(json).unwrap();
        assert_eq!(
            config,
            MazeConfig {
                hand: Hand::Left,
                max_steps: Some(100),
                detect_cycles: true,
                format: OutputFormat::Json,
            }
        );
    }

    #[test]
    fn test_config_empty_object() {
        assert_eq!(MazeConfig::from_json("{}").unwrap(), MazeConfig::new());
    }

    #[rstest]
    #[case::unknown_property(r#"{ "hands": "left" }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "detect_cycles": "yes" }"#, "Config validation failed")]
    #[case::invalid_enum_value(r#"{ "hand": "up" }"#, "Config validation failed")]
    #[case::zero_steps(r#"{ "max_steps": 0 }"#, "Config validation failed")]
    #[case::not_json("hand = left", "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = MazeConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }

    #[test]
    fn test_discover_and_load() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(MazeConfig::discover(dir.path()), None);

        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "hand": "left" }"#).unwrap();

        let found = MazeConfig::discover(dir.path()).unwrap();
        assert_eq!(found, path);
        assert_eq!(MazeConfig::from_file(found).unwrap().hand, Hand::Left);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
