//! # Code Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides whether a newly submitted piece of source code is a
//! near-duplicate of a prior submission by a *different* author to the same
//! problem. It sits on top of `canonical`, which normalizes code so that
//! formatting and comments do not affect the comparison, and it owns the
//! gestalt (Ratcliff/Obershelp) similarity computation and the flagging
//! policy.
//!
//! Storage stays outside: prior submissions arrive through a
//! [`CorpusProvider`], and the result is a plain [`Verdict`] value.
//!
//! ## Core Types
//!
//! - [`PlagiarismChecker`]: validated configs plus an optional metrics
//!   observer; runs checks.
//! - [`MatchConfig`]: threshold (default 0.85), minimum normalized length
//!   (default 20), and scan knobs (`autojunk`, `prune`, `use_parallel`).
//! - [`Submission`] / [`Verdict`]: input corpus entries and check outcome.
//! - [`CorpusProvider`]: source of prior submissions, with [`InMemoryCorpus`]
//!   and the [`CorpusFn`] closure adapter.
//! - [`SequenceMatcher`]: the similarity algorithm, usable on any slice of
//!   hashable elements.
//!
//! ## Flagging rules
//!
//! 1. Normalize the candidate; if it has fewer than `min_length` characters
//!    the verdict is clean and the corpus is never fetched.
//! 2. Fetch the corpus. Failures propagate as
//!    [`MatchError::CorpusUnavailable`].
//! 3. Score each prior submission with non-empty code. The highest score
//!    wins; on ties the earliest submission in provider order is kept.
//! 4. Flag when the best score is `>= threshold`.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::{MatchConfig, PlagiarismChecker, Submission};
//! use canonical::NormalizeConfig;
//!
//! let checker = PlagiarismChecker::new(
//!     NormalizeConfig::default(),
//!     MatchConfig::default().with_threshold(0.9),
//! )
//! .expect("valid config");
//!
//! let prior = vec![
//!     Submission::new("student2", "def solve(a, b):\n    return a + b  # sum"),
//!     Submission::new("student3", "print(sum(map(int, input().split())))"),
//! ];
//!
//! let verdict = checker
//!     .check("def solve(a,b):\n  return a+b", "problem-1", "student1", &prior)
//!     .expect("corpus available");
//! assert!(verdict.is_plagiarized);
//! assert_eq!(verdict.source_author_id.as_deref(), Some("student2"));
//! ```
//!
//! ## Observability
//!
//! Every check runs inside a `matcher.check` tracing span and ends with a
//! `check_complete` event (or `corpus_fetch_failure`). Attach a
//! [`CheckMetrics`] implementation with
//! [`PlagiarismChecker::with_metrics`] to record latency and scan statistics.

pub mod corpus;
pub mod engine;
pub mod metrics;
pub mod sequence;
pub mod types;

pub use crate::corpus::{CorpusError, CorpusFn, CorpusProvider, InMemoryCorpus};
pub use crate::engine::{check, PlagiarismChecker};
pub use crate::metrics::{CheckMetrics, ScanStats};
pub use crate::sequence::{ratio, Match, SequenceMatcher, AUTOJUNK_MIN_LEN};
pub use crate::types::{
    MatchConfig, MatchError, Submission, Verdict, DEFAULT_MIN_LENGTH, DEFAULT_THRESHOLD,
};
