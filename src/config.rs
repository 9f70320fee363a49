//! YAML Configuration File Support for plagcheck
//!
//! Loads the normalization and matching configuration from a single YAML
//! file so deployments can tune the threshold or comment markers without a
//! rebuild. Every section is optional and falls back to the defaults the
//! checker was calibrated with.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # plagcheck configuration
//! version: "1.0"
//! name: "intro-course"
//!
//! canonical:
//!   version: 1
//!   comment_markers: ["#", "//"]
//!   lowercase: true
//!
//! matcher:
//!   threshold: 0.85
//!   min_length: 20
//!   autojunk: false
//!   prune: true
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use matcher::{MatchConfig, MatchError, PlagiarismChecker};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PlagcheckConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Normalization rules
    #[serde(default)]
    pub canonical: NormalizeConfig,

    /// Similarity engine tuning
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl PlagcheckConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PlagcheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;

        Ok(())
    }

    /// Build a checker from this configuration.
    pub fn checker(&self) -> Result<PlagiarismChecker, MatchError> {
        PlagiarismChecker::new(self.canonical.clone(), self.matcher.clone())
    }
}

impl Default for PlagcheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: NormalizeConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
canonical:
  version: 1
  lowercase: true
matcher:
  threshold: 0.9
"#;

        let config = PlagcheckConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert!(config.canonical.lowercase);
        assert_eq!(config.canonical.comment_markers, vec!["#", "//"]);
        assert_eq!(config.matcher.threshold, 0.9);
        assert_eq!(config.matcher.min_length, 20);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
matcher:
  min_length: 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PlagcheckConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.matcher.min_length, 10);
    }

    #[test]
    fn test_default_config() {
        let config = PlagcheckConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = PlagcheckConfig::from_file("/nonexistent/plagcheck.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_unsupported_version() {
        let result = PlagcheckConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  threshold: 1.5
"#;

        let result = PlagcheckConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("threshold"));
    }

    #[test]
    fn test_comment_marker_validation() {
        let yaml = r##"
version: "1.0"
canonical:
  comment_markers: ["#", ""]
"##;

        let result = PlagcheckConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(msg)) if msg.starts_with("canonical")));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let config = PlagcheckConfig {
            name: Some("production".into()),
            matcher: MatchConfig::default().with_threshold(0.9).with_parallel(true),
            ..PlagcheckConfig::default()
        };

        let yaml = config.to_yaml().unwrap();
        let parsed = PlagcheckConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
        assert!(parsed.checker().is_ok());
    }
}
