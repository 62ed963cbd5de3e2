//! Scoring for stored history records, retained for signals shaped like the
//! original mock feed.

use chrono::{Days, NaiveDate};
use powline_core::{
    ForecastDay, PowderScorer, RecordedSignal, ResortConditions, ScoreContext, ScoreResult,
    Verdict,
};

/// The legacy scoring strategy, operating on [`RecordedSignal`] inputs.
///
/// The raw score is unclamped and can go negative for long drives onto icy
/// surfaces. [`PowderScorer::score`] clamps before deriving the verdict;
/// [`LegacyScorer::conditions`] reports the raw value alongside it.
///
/// # Examples
/// ```
/// use powline_core::{RecordedSignal, SnowQuality};
/// use powline_core::test_support::{history_day, resort_record};
/// use powline_scorer::LegacyScorer;
///
/// let signal = RecordedSignal {
///     resort: resort_record("vail", 110, 5317.0),
///     forecasts: vec![history_day("vail", "2026-01-14", 12.0, SnowQuality::Powder)],
/// };
/// assert_eq!(LegacyScorer.raw_score(&signal), 35);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyScorer;

impl LegacyScorer {
    /// Unclamped powder score: snowfall and surface quality weighted up,
    /// drive time and small-resort crowding down. An empty history scores 0.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "the score averages quality points over the history before rounding to an integer"
    )]
    #[must_use]
    pub fn raw_score(&self, signal: &RecordedSignal) -> i32 {
        if signal.forecasts.is_empty() {
            return 0;
        }
        let total_snowfall: f64 = signal.forecasts.iter().map(|f| f.snowfall_inches).sum();
        let quality_sum: f64 = signal.forecasts.iter().map(|f| f.snow_quality.points()).sum();
        let avg_quality = quality_sum / signal.forecasts.len() as f64;
        let drive_penalty = (f64::from(signal.resort.drive_minutes) / 30.0).min(5.0);
        let crowd_risk = if signal.resort.acres < 1000.0 { 2.0 } else { 0.0 };
        (total_snowfall * 2.0 + avg_quality * 1.5 - drive_penalty - crowd_risk).round() as i32
    }

    /// Summarise a record into presentation-ready conditions as of `today`.
    ///
    /// The snowfall windows include days from one (48h) and four (5 day)
    /// days before `today`, with no upper bound. The morning timing hints
    /// are filled only on a go verdict.
    #[must_use]
    pub fn conditions(&self, signal: &RecordedSignal, today: NaiveDate) -> ResortConditions {
        let raw = self.raw_score(signal);
        let result = ScoreResult::from_score(raw.max(0).unsigned_abs());
        let go = result.verdict == Verdict::Go;
        ResortConditions {
            resort_id: signal.resort.id.clone(),
            snowfall_48h: window_total(&signal.forecasts, today.checked_sub_days(Days::new(1))),
            snowfall_5day: window_total(&signal.forecasts, today.checked_sub_days(Days::new(4))),
            powder_score: raw,
            verdict: result.verdict,
            verdict_label: result.label,
            best_time: go.then_some("8-11am"),
            snow_ends: go.then_some("7:30am"),
        }
    }
}

/// Total snowfall for days on or after `cutoff`; an unrepresentable cutoff
/// admits every day.
fn window_total(forecasts: &[ForecastDay], cutoff: Option<NaiveDate>) -> f64 {
    forecasts
        .iter()
        .filter(|f| cutoff.is_none_or(|earliest| f.date >= earliest))
        .map(|f| f.snowfall_inches)
        .sum()
}

impl PowderScorer for LegacyScorer {
    type Signal = RecordedSignal;

    fn score(&self, signal: &RecordedSignal, _context: ScoreContext) -> ScoreResult {
        ScoreResult::from_score(self.raw_score(signal).max(0).unsigned_abs())
    }
}
