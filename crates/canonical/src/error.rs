use thiserror::Error;

/// Errors that can occur while building a normalized document.
///
/// Plain [`normalize`](crate::normalize) never fails; only configuration
/// problems surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
