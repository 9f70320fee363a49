//! Configuration types for source-code normalization.
//!
//! This module defines [`NormalizeConfig`], which controls how submitted code
//! is reduced to its comparison form.
//!
//! # Versioning
//!
//! The `version` field feeds the identity hash of every normalized document.
//! Any change to normalization behavior (even bug fixes) must be accompanied by
//! a version bump so that hashes recorded under the old rules stay
//! distinguishable from the new ones.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.comment_markers, vec!["#".to_string(), "//".to_string()]);
//! assert!(config.lowercase);
//! ```
//!
//! ## Only C-family comments
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig {
//!     comment_markers: vec!["//".into()],
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Line-comment markers stripped by default, in application order.
pub const DEFAULT_COMMENT_MARKERS: [&str; 2] = ["#", "//"];

/// Configuration for the normalization pipeline.
///
/// The default configuration reproduces the normalization every stored
/// similarity score was calibrated against:
///
/// 1. strip `#` line comments
/// 2. strip `//` line comments
/// 3. remove all whitespace
/// 4. lowercase
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "comment_markers": ["#", "//"],
///   "lowercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Version of the normalization rules. Must be >= 1.
    ///
    /// Included in the identity hash:
    /// ```text
    /// SHA-256(version.to_be_bytes() || 0x00 || normalized_bytes)
    /// ```
    #[serde(default = "NormalizeConfig::default_version")]
    pub version: u32,

    /// Line-comment markers. Each marker removes everything from its first
    /// occurrence on a line through the end of that line. Markers are applied
    /// one after another, in the listed order, before whitespace is removed.
    ///
    /// Markers are matched verbatim: there is no string-literal awareness, so
    /// `"#fff"` inside a literal also starts a comment.
    #[serde(default = "NormalizeConfig::default_comment_markers")]
    pub comment_markers: Vec<String>,

    /// If true, lowercase the whitespace-free text as the final step.
    #[serde(default = "NormalizeConfig::default_lowercase")]
    pub lowercase: bool,
}

impl NormalizeConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_comment_markers() -> Vec<String> {
        DEFAULT_COMMENT_MARKERS
            .iter()
            .map(|marker| marker.to_string())
            .collect()
    }

    pub(crate) fn default_lowercase() -> bool {
        true
    }

    /// Validate the configuration.
    ///
    /// Markers must be non-empty and must not contain whitespace: whitespace is
    /// removed after comments, so such a marker could never be matched against
    /// the text the caller actually sees.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        for marker in &self.comment_markers {
            if marker.is_empty() {
                return Err(CanonicalError::InvalidConfig(
                    "comment markers must not be empty".into(),
                ));
            }
            if marker.chars().any(char::is_whitespace) {
                return Err(CanonicalError::InvalidConfig(format!(
                    "comment marker {marker:?} must not contain whitespace"
                )));
            }
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            comment_markers: Self::default_comment_markers(),
            lowercase: Self::default_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(NormalizeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("version 0 is reserved");
        assert!(matches!(err, CanonicalError::InvalidConfig(msg) if msg.contains("version")));
    }

    #[test]
    fn whitespace_marker_rejected() {
        let cfg = NormalizeConfig {
            comment_markers: vec!["-- ".into()],
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_marker_rejected() {
        let cfg = NormalizeConfig {
            comment_markers: vec![String::new()],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: NormalizeConfig = serde_json::from_str(r#"{"lowercase": false}"#).expect("parse");
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.comment_markers, NormalizeConfig::default_comment_markers());
        assert!(!cfg.lowercase);
    }
}
