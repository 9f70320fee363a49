// Metrics hooks for the matcher.
//
// A `CheckMetrics` implementation is attached to a `PlagiarismChecker` with
// `with_metrics`; the checker reports latency, corpus statistics and the
// outcome of every call to `check`. This keeps instrumentation decoupled from
// any specific metrics backend without process-wide state.
use std::time::Duration;

use crate::types::{MatchError, Verdict};

/// What one check did with the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Prior submissions returned by the provider.
    pub corpus_size: usize,
    /// Prior submissions scored (exact fast path included).
    pub compared: usize,
    /// Prior submissions with empty code.
    pub skipped: usize,
    /// Prior submissions skipped because their upper bound could not win.
    pub pruned: usize,
}

/// Metrics observer for plagiarism checks.
pub trait CheckMetrics: Send + Sync {
    /// Record the outcome of one check.
    ///
    /// `latency` is the wall-clock duration of the whole check, corpus fetch
    /// included. `stats` is all zeros when the candidate was too short or the
    /// corpus could not be fetched.
    fn record_check(
        &self,
        problem_id: &str,
        latency: Duration,
        stats: &ScanStats,
        result: Result<&Verdict, &MatchError>,
    );
}
