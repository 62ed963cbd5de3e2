//! Scoring seam: the strategy trait and the result/context types shared by
//! every powder scoring implementation.

use serde::Serialize;

use crate::Verdict;

/// Temporal side input for crowd estimation.
///
/// Scoring itself never consults a clock or calendar; callers derive the
/// flags from an injected calendar and pass them in.
///
/// # Examples
/// ```
/// use powline_core::ScoreContext;
///
/// let saturday = ScoreContext::new(true, false);
/// assert!(saturday.weekend);
/// assert!(!ScoreContext::default().holiday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreContext {
    /// The scored period falls on a Saturday or Sunday.
    pub weekend: bool,
    /// The scored period falls on a listed holiday.
    pub holiday: bool,
}

impl ScoreContext {
    /// Build a context from explicit weekend and holiday flags.
    #[must_use]
    pub const fn new(weekend: bool, holiday: bool) -> Self {
        Self { weekend, holiday }
    }
}

/// Outcome of scoring one resort: an integer score, the verdict it implies,
/// and the headline label for that verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Non-negative powder score.
    pub score: u32,
    /// Verdict derived from the score thresholds.
    pub verdict: Verdict,
    /// Headline shown alongside the verdict.
    pub label: &'static str,
}

impl ScoreResult {
    /// Derive the verdict and label for a final score.
    ///
    /// Thresholds: 25 and above is a go, 15 and above a maybe, anything
    /// lower a skip.
    ///
    /// # Examples
    /// ```
    /// use powline_core::{ScoreResult, Verdict};
    ///
    /// assert_eq!(ScoreResult::from_score(25).verdict, Verdict::Go);
    /// assert_eq!(ScoreResult::from_score(24).verdict, Verdict::Maybe);
    /// assert_eq!(ScoreResult::from_score(14).verdict, Verdict::Skip);
    /// ```
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 25 {
            Self {
                score,
                verdict: Verdict::Go,
                label: "Ski tomorrow morning",
            }
        } else if score >= 15 {
            Self {
                score,
                verdict: Verdict::Maybe,
                label: "Worth considering",
            }
        } else {
            Self {
                score,
                verdict: Verdict::Skip,
                label: "Skip this one",
            }
        }
    }
}

/// Score one resort signal under a temporal context.
///
/// Implementations are deterministic and side-effect free: identical inputs
/// always produce identical results. They must be `Send + Sync` so scorers
/// can be shared across rendering contexts.
///
/// # Examples
///
/// ```rust
/// use powline_core::{PowderScorer, ScoreContext, ScoreResult};
///
/// struct FlatScorer;
///
/// impl PowderScorer for FlatScorer {
///     type Signal = u32;
///
///     fn score(&self, signal: &u32, _context: ScoreContext) -> ScoreResult {
///         ScoreResult::from_score(*signal)
///     }
/// }
///
/// let result = FlatScorer.score(&30, ScoreContext::default());
/// assert_eq!(result.score, 30);
/// ```
pub trait PowderScorer: Send + Sync {
    /// Input shape the strategy understands.
    type Signal;

    /// Return the score and verdict for `signal` under `context`.
    fn score(&self, signal: &Self::Signal, context: ScoreContext) -> ScoreResult;
}
