//! Corpus providers: where prior submissions come from.
//!
//! The engine never touches storage. Callers hand it a [`CorpusProvider`] that
//! returns, for one problem, every prior submission by authors other than the
//! requesting one. Iteration order is the provider's order and decides which
//! author is reported when two prior submissions tie on similarity (the first
//! one wins).

use std::error::Error as StdError;

use thiserror::Error;

use crate::types::Submission;

/// Errors a provider may report. The engine propagates them instead of
/// returning a clean verdict.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus unavailable: {0}")]
    Unavailable(String),
    #[error("corpus backend error: {0}")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}

/// Source of prior submissions for a problem.
pub trait CorpusProvider {
    /// Prior submissions to `problem_id`, excluding those by `author_id`.
    fn prior_submissions(
        &self,
        problem_id: &str,
        author_id: &str,
    ) -> Result<Vec<Submission>, CorpusError>;
}

/// An already-filtered corpus, returned as-is regardless of the arguments.
impl CorpusProvider for [Submission] {
    fn prior_submissions(&self, _: &str, _: &str) -> Result<Vec<Submission>, CorpusError> {
        Ok(self.to_vec())
    }
}

impl CorpusProvider for Vec<Submission> {
    fn prior_submissions(&self, problem_id: &str, author_id: &str) -> Result<Vec<Submission>, CorpusError> {
        self.as_slice().prior_submissions(problem_id, author_id)
    }
}

/// Adapts a closure into a [`CorpusProvider`].
///
/// ```rust
/// use matcher::{CorpusFn, CorpusProvider, Submission};
///
/// let provider = CorpusFn::new(|problem: &str, _author: &str| {
///     Ok(vec![Submission::new("s2", format!("# {problem}\nprint(1)"))])
/// });
/// assert_eq!(provider.prior_submissions("p1", "s1").unwrap().len(), 1);
/// ```
pub struct CorpusFn<F>(F);

impl<F> CorpusFn<F>
where
    F: Fn(&str, &str) -> Result<Vec<Submission>, CorpusError>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> CorpusProvider for CorpusFn<F>
where
    F: Fn(&str, &str) -> Result<Vec<Submission>, CorpusError>,
{
    fn prior_submissions(&self, problem_id: &str, author_id: &str) -> Result<Vec<Submission>, CorpusError> {
        (self.0)(problem_id, author_id)
    }
}

#[derive(Debug, Clone)]
struct StoredSubmission {
    problem_id: String,
    author_id: String,
    code: Option<String>,
}

/// Submission history held in memory, in arrival order.
///
/// Filters the way a storage query would: same problem, other authors,
/// non-null non-empty code. `with_max_recent` caps the corpus to the N most
/// recent matching submissions, the knob for bounding check latency on
/// problems with very many submissions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    records: Vec<StoredSubmission>,
    max_recent: Option<usize>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the `max_recent` most recent matching submissions.
    pub fn with_max_recent(mut self, max_recent: usize) -> Self {
        self.max_recent = Some(max_recent);
        self
    }

    /// Record a submission.
    pub fn insert(
        &mut self,
        problem_id: impl Into<String>,
        author_id: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.records.push(StoredSubmission {
            problem_id: problem_id.into(),
            author_id: author_id.into(),
            code: Some(code.into()),
        });
    }

    /// Record a submission whose code was never stored.
    pub fn insert_without_code(&mut self, problem_id: impl Into<String>, author_id: impl Into<String>) {
        self.records.push(StoredSubmission {
            problem_id: problem_id.into(),
            author_id: author_id.into(),
            code: None,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn prior_submissions(&self, problem_id: &str, author_id: &str) -> Result<Vec<Submission>, CorpusError> {
        let mut matching: Vec<Submission> = self
            .records
            .iter()
            .filter(|r| r.problem_id == problem_id && r.author_id != author_id)
            .filter_map(|r| match r.code.as_deref() {
                Some(code) if !code.is_empty() => Some(Submission::new(r.author_id.clone(), code)),
                _ => None,
            })
            .collect();

        if let Some(cap) = self.max_recent {
            let excess = matching.len().saturating_sub(cap);
            matching.drain(..excess);
        }
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> InMemoryCorpus {
        let mut corpus = InMemoryCorpus::new();
        corpus.insert("p1", "alice", "print('a')");
        corpus.insert("p1", "bob", "print('b')");
        corpus.insert("p2", "carol", "print('c')");
        corpus.insert("p1", "alice", "print('a2')");
        corpus.insert("p1", "dave", "");
        corpus.insert_without_code("p1", "erin");
        corpus.insert("p1", "frank", "print('f')");
        corpus
    }

    fn authors(subs: &[Submission]) -> Vec<&str> {
        subs.iter().map(|s| s.author_id.as_str()).collect()
    }

    #[test]
    fn excludes_requesting_author_other_problems_and_missing_code() {
        let subs = history().prior_submissions("p1", "alice").expect("in-memory");
        assert_eq!(authors(&subs), vec!["bob", "frank"]);
    }

    #[test]
    fn preserves_arrival_order() {
        let subs = history().prior_submissions("p1", "bob").expect("in-memory");
        assert_eq!(authors(&subs), vec!["alice", "alice", "frank"]);
        assert_eq!(subs[1].code, "print('a2')");
    }

    #[test]
    fn max_recent_keeps_latest() {
        let corpus = history().with_max_recent(2);
        let subs = corpus.prior_submissions("p1", "bob").expect("in-memory");
        assert_eq!(authors(&subs), vec!["alice", "frank"]);
        assert_eq!(subs[0].code, "print('a2')");
    }

    #[test]
    fn max_recent_zero_yields_nothing() {
        let corpus = history().with_max_recent(0);
        assert!(corpus.prior_submissions("p1", "bob").expect("in-memory").is_empty());
    }

    #[test]
    fn unknown_problem_is_empty_not_an_error() {
        assert!(history().prior_submissions("p9", "bob").expect("in-memory").is_empty());
    }

    #[test]
    fn closure_errors_surface() {
        let provider = CorpusFn::new(|_: &str, _: &str| Err(CorpusError::Unavailable("db down".into())));
        let err = provider.prior_submissions("p1", "s1").expect_err("provider fails");
        assert_eq!(err.to_string(), "corpus unavailable: db down");
    }

    #[test]
    fn slice_provider_returns_everything() {
        let fixed = vec![Submission::new("s2", "x"), Submission::new("s3", "y")];
        let subs = fixed.prior_submissions("ignored", "ignored").expect("slice");
        assert_eq!(subs, fixed);
    }
}
