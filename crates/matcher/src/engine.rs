use std::sync::Arc;
use std::time::Instant;

use canonical::{normalize_with, NormalizeConfig, NormalizedCode};
use rayon::prelude::*;
use tracing::{debug, info, span, warn, Level};

use crate::corpus::CorpusProvider;
use crate::metrics::{CheckMetrics, ScanStats};
use crate::sequence::SequenceMatcher;
use crate::types::{MatchConfig, MatchError, Submission, Verdict};


/// Flags a candidate submission that is a near-duplicate of another author's
/// prior submission to the same problem.
///
/// Holds validated configuration only; every call to [`check`](Self::check)
/// is independent, so one checker can serve concurrent callers.
#[derive(Clone)]
pub struct PlagiarismChecker {
    normalize_cfg: NormalizeConfig,
    cfg: MatchConfig,
    metrics: Option<Arc<dyn CheckMetrics>>,
}

impl Default for PlagiarismChecker {
    fn default() -> Self {
        Self {
            normalize_cfg: NormalizeConfig::default(),
            cfg: MatchConfig::default(),
            metrics: None,
        }
    }
}

impl PlagiarismChecker {
    /// Construct a checker from explicit configs, validating both.
    pub fn new(normalize_cfg: NormalizeConfig, cfg: MatchConfig) -> Result<Self, MatchError> {
        normalize_cfg.validate()?;
        cfg.validate()?;
        Ok(Self {
            normalize_cfg,
            cfg,
            metrics: None,
        })
    }

    /// Attach a metrics observer that sees every call to [`check`](Self::check).
    pub fn with_metrics(mut self, metrics: Arc<dyn CheckMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn normalize_config(&self) -> &NormalizeConfig {
        &self.normalize_cfg
    }

    /// Check `candidate_code` from `author_id` against the prior submissions
    /// `provider` returns for `problem_id`.
    ///
    /// Candidates that normalize to fewer than `min_length` characters are
    /// never flagged and the provider is not consulted. A provider failure is
    /// returned as [`MatchError::CorpusUnavailable`], never as a clean verdict.
    pub fn check<P>(
        &self,
        candidate_code: &str,
        problem_id: &str,
        author_id: &str,
        provider: &P,
    ) -> Result<Verdict, MatchError>
    where
        P: CorpusProvider + ?Sized,
    {
        let start = Instant::now();
        let span = span!(
            Level::INFO,
            "matcher.check",
            problem_id = %problem_id,
            author_id = %author_id
        );
        let _guard = span.enter();

        let candidate = self.normalized(candidate_code);
        if candidate.char_len < self.cfg.min_length {
            debug!(
                normalized_len = candidate.char_len,
                min_length = self.cfg.min_length,
                "candidate_too_short"
            );
            let verdict = Verdict::clean();
            self.record(problem_id, start, &ScanStats::default(), Ok(&verdict));
            return Ok(verdict);
        }

        let corpus = match provider.prior_submissions(problem_id, author_id) {
            Ok(corpus) => corpus,
            Err(source) => {
                let err = MatchError::CorpusUnavailable {
                    problem_id: problem_id.to_string(),
                    source,
                };
                warn!(
                    error = %err,
                    elapsed_micros = start.elapsed().as_micros(),
                    "corpus_fetch_failure"
                );
                self.record(problem_id, start, &ScanStats::default(), Err(&err));
                return Err(err);
            }
        };

        let (verdict, stats) = self.scan(&candidate, &corpus);
        info!(
            similarity = verdict.similarity,
            is_plagiarized = verdict.is_plagiarized,
            source_author_id = ?verdict.source_author_id,
            corpus_size = stats.corpus_size,
            compared = stats.compared,
            skipped = stats.skipped,
            pruned = stats.pruned,
            elapsed_micros = start.elapsed().as_micros(),
            "check_complete"
        );
        self.record(problem_id, start, &stats, Ok(&verdict));
        Ok(verdict)
    }

    /// Score a candidate against an already-fetched corpus.
    ///
    /// Same rules as [`check`](Self::check) without the provider, tracing or
    /// metrics.
    pub fn check_corpus(&self, candidate_code: &str, corpus: &[Submission]) -> Verdict {
        let candidate = self.normalized(candidate_code);
        if candidate.char_len < self.cfg.min_length {
            return Verdict::clean();
        }
        self.scan(&candidate, corpus).0
    }

    /// Similarity of two raw code strings after normalization. No length
    /// cutoff applies.
    pub fn similarity(&self, a_code: &str, b_code: &str) -> f64 {
        let a = self.normalized(a_code);
        let b = self.normalized(b_code);
        self.score(&a, &a.chars(), &b, None).unwrap_or(0.0)
    }

    fn normalized(&self, code: &str) -> NormalizedCode {
        NormalizedCode::from_normalized(
            normalize_with(code, &self.normalize_cfg),
            self.normalize_cfg.version,
        )
    }

    fn scan(&self, candidate: &NormalizedCode, corpus: &[Submission]) -> (Verdict, ScanStats) {
        let candidate_chars = candidate.chars();
        let mut stats = ScanStats {
            corpus_size: corpus.len(),
            ..ScanStats::default()
        };
        let mut best = 0.0_f64;
        let mut source: Option<&Submission> = None;

        if self.cfg.use_parallel {
            // Score on the pool, then fold in provider order so ties resolve
            // exactly as in the sequential scan.
            let scores: Vec<Option<f64>> = corpus
                .par_iter()
                .map(|prior| {
                    if prior.code.is_empty() {
                        return None;
                    }
                    let prior_doc = self.normalized(&prior.code);
                    self.score(candidate, &candidate_chars, &prior_doc, None)
                })
                .collect();

            for (prior, score) in corpus.iter().zip(scores) {
                let Some(score) = score else {
                    stats.skipped += 1;
                    continue;
                };
                stats.compared += 1;
                debug!(prior_author_id = %prior.author_id, similarity = score, "prior_scored");
                if score > best {
                    best = score;
                    source = Some(prior);
                }
            }
        } else {
            for prior in corpus {
                if prior.code.is_empty() {
                    stats.skipped += 1;
                    continue;
                }
                let prior_doc = self.normalized(&prior.code);
                let floor = self.cfg.prune.then_some(best);
                match self.score(candidate, &candidate_chars, &prior_doc, floor) {
                    Some(score) => {
                        stats.compared += 1;
                        debug!(prior_author_id = %prior.author_id, similarity = score, "prior_scored");
                        if score > best {
                            best = score;
                            source = Some(prior);
                        }
                    }
                    None => stats.pruned += 1,
                }
            }
        }

        let verdict = Verdict {
            is_plagiarized: best >= self.cfg.threshold,
            similarity: best,
            source_author_id: source.map(|s| s.author_id.clone()),
        };
        (verdict, stats)
    }

    /// Ratio of `candidate` against `prior`, or `None` when a cheap upper
    /// bound shows it cannot exceed `floor`.
    fn score(
        &self,
        candidate: &NormalizedCode,
        candidate_chars: &[char],
        prior: &NormalizedCode,
        floor: Option<f64>,
    ) -> Option<f64> {
        // Popular-element pruning can score identical long texts below 1.0,
        // so the hash shortcut only holds without autojunk.
        if !self.cfg.autojunk && candidate.sha256_hex == prior.sha256_hex {
            return Some(1.0);
        }

        let prior_chars = prior.chars();
        let matcher = SequenceMatcher::with_autojunk(candidate_chars, &prior_chars, self.cfg.autojunk);
        if let Some(floor) = floor {
            if matcher.real_quick_ratio() <= floor || matcher.quick_ratio() <= floor {
                return None;
            }
        }
        Some(matcher.ratio())
    }

    fn record(
        &self,
        problem_id: &str,
        start: Instant,
        stats: &ScanStats,
        result: Result<&Verdict, &MatchError>,
    ) {
        if let Some(metrics) = &self.metrics {
            metrics.record_check(problem_id, start.elapsed(), stats, result);
        }
    }
}

/// Check with default normalization and matching rules.
///
/// ```rust
/// use matcher::{check, Submission};
///
/// let prior = vec![Submission::new("student2", "def solve(a, b):\n    return a + b")];
/// let verdict = check("def solve(a,b):\n  return a+b", "p1", "student1", &prior).unwrap();
/// assert!(verdict.is_plagiarized);
/// assert_eq!(verdict.similarity, 1.0);
/// assert_eq!(verdict.source_author_id.as_deref(), Some("student2"));
/// ```
pub fn check<P>(
    candidate_code: &str,
    problem_id: &str,
    author_id: &str,
    provider: &P,
) -> Result<Verdict, MatchError>
where
    P: CorpusProvider + ?Sized,
{
    PlagiarismChecker::default().check(candidate_code, problem_id, author_id, provider)
}
