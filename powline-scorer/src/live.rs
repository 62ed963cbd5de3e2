//! Scoring for live feed signals: snowfall and surface quality, adjusted for
//! drive time, crowds, wind, temperature, open terrain, and any upstream
//! go/no-go assessment.

use powline_core::{GoNoGo, PowderScorer, ResortSignal, ScoreContext, ScoreResult};

/// The current scoring strategy, operating on [`ResortSignal`] inputs.
///
/// Scoring is pure: identical signal and context always produce the same
/// result. Missing weather degrades to no wind and no temperature
/// adjustment; a missing assessment neither caps nor boosts.
///
/// # Examples
/// ```
/// use powline_core::{PowderScorer, ScoreContext, Verdict, test_support::ranked_signal};
/// use powline_scorer::LiveScorer;
///
/// let signal = ranked_signal("alta", 12.0, 40);
/// let result = LiveScorer.score(&signal, ScoreContext::default());
/// assert_eq!(result.verdict, Verdict::Go);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveScorer;

/// Wind contribution: a penalty plus the dangerous-gust override flag.
struct WindEffect {
    penalty: f64,
    force_skip: bool,
}

/// Quality tier for a free-text conditions string.
///
/// Substring checks run in order; "fresh powder on packed base" is powder,
/// not packed.
fn condition_quality(conditions: &str) -> f64 {
    let lowered = conditions.to_lowercase();
    if lowered.contains("powder") {
        10.0
    } else if lowered.contains("snow") {
        7.0
    } else if lowered.contains("pack") {
        5.0
    } else if lowered.contains("wet") {
        3.0
    } else {
        4.0
    }
}

/// No penalty through 15 mph, then linear to 10 at 40 mph. Gusts at 50 mph
/// or above force a skip outright.
#[expect(
    clippy::float_arithmetic,
    reason = "the penalty interpolates linearly between the wind thresholds"
)]
fn wind_penalty(speed: Option<f64>, gusts: Option<f64>) -> WindEffect {
    if gusts.is_some_and(|g| g >= 50.0) {
        return WindEffect {
            penalty: 10.0,
            force_skip: true,
        };
    }
    let effective = speed.unwrap_or(0.0);
    if effective <= 15.0 {
        return WindEffect {
            penalty: 0.0,
            force_skip: false,
        };
    }
    WindEffect {
        penalty: (((effective - 15.0) / 25.0) * 10.0).min(10.0),
        force_skip: false,
    }
}

/// +2 inside the 20-28F preservation band; -2 per started 5F below zero,
/// floored at -10.
#[expect(
    clippy::float_arithmetic,
    reason = "the cold penalty scales with full 5F increments below zero"
)]
fn temp_adjustment(feels_like: Option<f64>) -> f64 {
    feels_like.map_or(0.0, |temperature| {
        if (20.0..=28.0).contains(&temperature) {
            2.0
        } else if temperature < 0.0 {
            (-2.0 * (temperature.abs() / 5.0).ceil()).max(-10.0)
        } else {
            0.0
        }
    })
}

/// 10 below a quarter open, 5 below half open.
const fn terrain_penalty(open_pct: f64) -> f64 {
    if open_pct < 25.0 {
        10.0
    } else if open_pct < 50.0 {
        5.0
    } else {
        0.0
    }
}

/// Holidays dominate weekends; 1.4 averages the Saturday and Sunday rates.
const fn crowd_multiplier(context: ScoreContext) -> f64 {
    if context.holiday {
        2.0
    } else if context.weekend {
        1.4
    } else {
        1.0
    }
}

impl PowderScorer for LiveScorer {
    type Signal = ResortSignal;

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the score blends weighted float factors and converts only after clamping to a small non-negative range"
    )]
    fn score(&self, signal: &ResortSignal, context: ScoreContext) -> ScoreResult {
        let quality = condition_quality(&signal.conditions);
        // The flat feed total, not the daily-aware sum; scoring tracks the
        // same period as the derived verdict.
        let base = signal.forecast_total_inches * 2.0 + quality * 1.5;
        let drive_penalty = (f64::from(signal.drive_time_minutes) / 30.0).min(5.0);
        let crowd_risk = if signal.terrain.acres < 1000.0 { 2.0 } else { 0.0 };

        let weather = signal.weather;
        let wind = wind_penalty(weather.map(|w| w.wind_speed), weather.map(|w| w.wind_gusts));
        let temperature = temp_adjustment(weather.and_then(|w| w.feels_like));
        let terrain = terrain_penalty(signal.terrain_open_pct);

        let overall = signal.go_no_go.as_ref().map(|assessment| assessment.overall);
        let go_bonus = if overall == Some(GoNoGo::Go) { 5.0 } else { 0.0 };

        let mut score = (base - drive_penalty - crowd_risk * crowd_multiplier(context)
            - wind.penalty
            + temperature
            - terrain
            + go_bonus)
            .round();
        if wind.force_skip {
            score = score.min(5.0);
        }
        if overall == Some(GoNoGo::NoGo) {
            score = score.min(14.0);
        }
        ScoreResult::from_score(score.max(0.0) as u32)
    }
}
