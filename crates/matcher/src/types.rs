use canonical::CanonicalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::CorpusError;

/// Similarity at or above which a submission is flagged.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Normalized candidates shorter than this many characters are never flagged.
pub const DEFAULT_MIN_LENGTH: usize = 20;

/// A prior submission to compare against.
///
/// `author_id` is opaque to the matcher; it is only echoed back in a
/// [`Verdict`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub author_id: String,
    pub code: String,
}

impl Submission {
    pub fn new(author_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            code: code.into(),
        }
    }
}

/// Outcome of a single plagiarism check.
///
/// Invariants:
/// - `source_author_id` is `Some` iff at least one prior submission was
///   compared and `similarity > 0`.
/// - `is_plagiarized` iff `similarity >= threshold`.
///
/// `similarity` is reported even when the submission is not flagged, so
/// callers can show or audit near misses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub is_plagiarized: bool,
    pub similarity: f64,
    pub source_author_id: Option<String>,
}

impl Verdict {
    /// Not plagiarized, nothing compared.
    pub fn clean() -> Self {
        Self {
            is_plagiarized: false,
            similarity: 0.0,
            source_author_id: None,
        }
    }

    /// Similarity as a whole percentage, truncated (0.999 -> 99).
    pub fn similarity_percent(&self) -> u32 {
        (self.similarity * 100.0).floor() as u32
    }
}

/// Tuning knobs for the similarity engine.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Flag submissions whose best similarity is `>= threshold`. In `(0, 1]`.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f64,
    /// Minimum normalized candidate length, in characters, before any
    /// comparison happens.
    #[serde(default = "MatchConfig::default_min_length")]
    pub min_length: usize,
    /// Discard popular characters as match seeds on long prior submissions.
    /// Reproduces scores produced with that heuristic; see
    /// [`SequenceMatcher`](crate::SequenceMatcher).
    #[serde(default)]
    pub autojunk: bool,
    /// Skip prior submissions whose cheap upper bound cannot beat the current
    /// best score. Never changes the verdict.
    #[serde(default = "MatchConfig::default_prune")]
    pub prune: bool,
    /// Score prior submissions on the rayon pool. Disables pruning.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> f64 {
        DEFAULT_THRESHOLD
    }

    pub(crate) fn default_min_length() -> usize {
        DEFAULT_MIN_LENGTH
    }

    pub(crate) fn default_prune() -> bool {
        true
    }

    /// Builder-style override of the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder-style override of the minimum length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Builder-style toggle for parallel scoring.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 || self.threshold > 1.0 {
            return Err(MatchError::InvalidConfig(format!(
                "threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            min_length: Self::default_min_length(),
            autojunk: false,
            prune: Self::default_prune(),
            use_parallel: false,
        }
    }
}

/// Errors produced by the similarity engine.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Invalid normalization configuration.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    /// Prior submissions could not be fetched. Never downgraded to a clean
    /// verdict.
    #[error("corpus unavailable for problem {problem_id}: {source}")]
    CorpusUnavailable {
        problem_id: String,
        #[source]
        source: CorpusError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.threshold, 0.85);
        assert_eq!(cfg.min_length, 20);
        assert!(!cfg.autojunk);
        assert!(cfg.prune);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        for threshold in [0.0, -0.1, 1.01, f64::NAN, f64::INFINITY] {
            let cfg = MatchConfig::default().with_threshold(threshold);
            let err = cfg.validate().expect_err("config should be invalid");
            match err {
                MatchError::InvalidConfig(msg) => assert!(msg.contains("threshold")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn threshold_of_one_is_allowed() {
        assert!(MatchConfig::default().with_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn similarity_percent_truncates() {
        let verdict = Verdict {
            is_plagiarized: true,
            similarity: 0.8999,
            source_author_id: Some("s2".into()),
        };
        assert_eq!(verdict.similarity_percent(), 89);
        assert_eq!(Verdict::clean().similarity_percent(), 0);
    }

    #[test]
    fn verdict_serializes_to_flat_json() {
        let verdict = Verdict {
            is_plagiarized: true,
            similarity: 1.0,
            source_author_id: Some("student2".into()),
        };
        let json = serde_json::to_value(&verdict).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "is_plagiarized": true,
                "similarity": 1.0,
                "source_author_id": "student2",
            })
        );
    }

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: MatchConfig = serde_json::from_str(r#"{"threshold": 0.9}"#).expect("parse");
        assert_eq!(cfg.threshold, 0.9);
        assert_eq!(cfg.min_length, DEFAULT_MIN_LENGTH);
        assert!(cfg.prune);
    }
}
