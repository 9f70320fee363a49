//! Workspace umbrella crate for plagcheck.
//!
//! This crate stitches together code normalization (`canonical`) and the
//! similarity engine (`matcher`) so a grading service can screen a submission
//! with a single call, and it carries the review policy applied to a
//! [`Verdict`]: what the student is told and what gets stored.

pub mod config;

pub use canonical::{
    CanonicalError, NormalizeConfig, NormalizedCode, canonicalize, hash_text, normalize,
    normalize_with, strip_line_comments, strip_whitespace,
};
pub use config::{ConfigLoadError, PlagcheckConfig};
pub use matcher::{
    CheckMetrics, CorpusError, CorpusFn, CorpusProvider, InMemoryCorpus, MatchConfig, MatchError,
    PlagiarismChecker, ScanStats, SequenceMatcher, Submission, Verdict, check, ratio,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors surfaced while reviewing a submission.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("plagiarism check failed: {0}")]
    Check(#[from] MatchError),
}

/// What happens to a submission after screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Flagged; not graded.
    Rejected,
    /// Clean; continues to grading.
    Pending,
}

/// Plagiarism fields persisted with a submission.
///
/// Unflagged submissions store a zero score and no source, even when a near
/// miss was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismRecord {
    pub is_plagiarized: bool,
    pub plagiarism_score: f64,
    pub source_author_id: Option<String>,
}

impl PlagiarismRecord {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        if verdict.is_plagiarized {
            Self {
                is_plagiarized: true,
                plagiarism_score: verdict.similarity,
                source_author_id: verdict.source_author_id.clone(),
            }
        } else {
            Self {
                is_plagiarized: false,
                plagiarism_score: 0.0,
                source_author_id: None,
            }
        }
    }
}

/// Evaluation attached to a rejected submission in place of a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correctness: String,
    pub efficiency: String,
    pub code_style: String,
    pub best_practices: String,
    pub suggestions: String,
}

impl Evaluation {
    /// The fixed evaluation given to plagiarized code.
    pub fn plagiarized() -> Self {
        Self {
            correctness: "Plagiarism Detected".into(),
            efficiency: "N/A".into(),
            code_style: "N/A".into(),
            best_practices: "Do not copy code.".into(),
            suggestions: "Please write your own solution.".into(),
        }
    }
}

/// Decision derived from a [`Verdict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub status: ReviewStatus,
    /// Grade assigned by screening; `Some(0)` when rejected, otherwise left to
    /// the grader.
    pub score: Option<u32>,
    /// Message shown to the student when rejected.
    pub feedback: Option<String>,
    /// Set only when rejected; pending submissions are evaluated by the grader.
    pub evaluation: Option<Evaluation>,
    pub record: PlagiarismRecord,
}

/// Apply the review policy to a verdict.
///
/// ```rust
/// use plagcheck::{review, ReviewStatus, Verdict};
///
/// let verdict = Verdict {
///     is_plagiarized: true,
///     similarity: 0.937,
///     source_author_id: Some("student2".into()),
/// };
/// let outcome = review(&verdict);
/// assert_eq!(outcome.status, ReviewStatus::Rejected);
/// assert_eq!(outcome.score, Some(0));
/// assert_eq!(
///     outcome.feedback.as_deref(),
///     Some("Plagiarism detected! Your code is 93% similar to another student's submission.")
/// );
/// let evaluation = outcome.evaluation.unwrap();
/// assert_eq!(evaluation.correctness, "Plagiarism Detected");
/// assert_eq!(evaluation.suggestions, "Please write your own solution.");
/// ```
pub fn review(verdict: &Verdict) -> ReviewOutcome {
    let record = PlagiarismRecord::from_verdict(verdict);
    if verdict.is_plagiarized {
        ReviewOutcome {
            status: ReviewStatus::Rejected,
            score: Some(0),
            feedback: Some(format!(
                "Plagiarism detected! Your code is {}% similar to another student's submission.",
                verdict.similarity_percent()
            )),
            evaluation: Some(Evaluation::plagiarized()),
            record,
        }
    } else {
        ReviewOutcome {
            status: ReviewStatus::Pending,
            score: None,
            feedback: None,
            evaluation: None,
            record,
        }
    }
}

/// Screen a submission and apply the review policy.
///
/// Corpus failures propagate; a submission is never passed to grading because
/// the history could not be read.
pub fn review_submission<P>(
    config: &PlagcheckConfig,
    code: &str,
    problem_id: &str,
    author_id: &str,
    provider: &P,
) -> Result<ReviewOutcome, ReviewError>
where
    P: CorpusProvider + ?Sized,
{
    config.validate()?;
    let checker = config.checker()?;
    let verdict = checker.check(code, problem_id, author_id, provider)?;
    let outcome = review(&verdict);
    info!(
        problem_id,
        author_id,
        status = ?outcome.status,
        similarity = verdict.similarity,
        "submission_reviewed"
    );
    Ok(outcome)
}
