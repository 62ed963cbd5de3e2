//! Proximity-aware dashboard sectioning.
//!
//! Re-ranks the flat ranked payload (already sorted by snowfall
//! descending upstream) into the three dashboard sections under the
//! user's drive constraint.

use powline_core::{DriveRadius, ResortSignal};
use serde::Serialize;

/// Cap on the worth-the-drive section.
const WORTH_THE_DRIVE_LIMIT: usize = 5;

/// Minimum forecast total before a farther resort is worth showcasing.
const MIN_WORTH_INCHES: f64 = 4.0;

/// The three dashboard sections, recomputed whenever the ranked list or
/// the drive constraint changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSections {
    /// Best in-radius resort, or `None` for an empty payload.
    pub top_pick: Option<ResortSignal>,
    /// Remaining in-radius resorts, best verdict and deepest snow first.
    pub your_resorts: Vec<ResortSignal>,
    /// Out-of-radius resorts with enough snow to justify the trip.
    pub worth_the_drive: Vec<ResortSignal>,
}

/// Partition a ranked resort list into dashboard sections.
///
/// Resorts within the drive radius (an unknown drive time of 0 counts as
/// within) form the nearby set; the first of those is the top pick and the
/// rest sort by verdict then snowfall. When nothing is within radius the
/// whole payload stands in for the nearby set so the dashboard never
/// renders empty, and the worth-the-drive section stays empty because
/// there is no meaningful top pick to compare against.
///
/// # Examples
/// ```
/// use powline_core::{DriveRadius, test_support::ranked_signal};
/// use powline_rank::rank_for_dashboard;
///
/// let resorts = vec![
///     ranked_signal("jackson-hole", 20.0, 120),
///     ranked_signal("eldora", 5.0, 30),
/// ];
/// let sections = rank_for_dashboard(resorts, DriveRadius::Within60);
///
/// let top = sections.top_pick.expect("one resort is within the radius");
/// assert_eq!(top.slug, "eldora");
/// let far = sections.worth_the_drive.first().expect("the storm justifies the trip");
/// assert_eq!(far.slug, "jackson-hole");
/// ```
#[must_use]
pub fn rank_for_dashboard(resorts: Vec<ResortSignal>, radius: DriveRadius) -> DashboardSections {
    let (nearby, farther): (Vec<_>, Vec<_>) = resorts
        .into_iter()
        .partition(|signal| radius.admits(signal.drive_time_minutes));

    // Fallback: with nothing in radius (location not resolved yet, or
    // stale drive times) the whole payload becomes the effective nearby
    // set. Worth-the-drive is suppressed in that case.
    let (effective, candidates) = if nearby.is_empty() {
        (farther, Vec::new())
    } else {
        (nearby, farther)
    };

    let mut picks = effective.into_iter();
    let top_pick = picks.next();
    let mut your_resorts: Vec<_> = picks.collect();
    sort_by_verdict_then_snow(&mut your_resorts);

    let best_nearby_inches = top_pick
        .as_ref()
        .map_or(0.0, |signal| signal.forecast_total_inches);

    DashboardSections {
        top_pick,
        your_resorts,
        worth_the_drive: worth_the_drive(candidates, best_nearby_inches),
    }
}

/// Stable sort by verdict priority (go first), snowfall breaking ties.
fn sort_by_verdict_then_snow(signals: &mut [ResortSignal]) {
    signals.sort_by(|a, b| {
        a.verdict()
            .priority()
            .cmp(&b.verdict().priority())
            .then_with(|| b.forecast_total_inches.total_cmp(&a.forecast_total_inches))
    });
}

/// Farther resorts worth showcasing: at least four inches forecast and
/// more than half the best nearby total, capped at five.
#[expect(
    clippy::float_arithmetic,
    reason = "the showcase floor is half the top pick's forecast total"
)]
fn worth_the_drive(candidates: Vec<ResortSignal>, best_nearby_inches: f64) -> Vec<ResortSignal> {
    let mut keep: Vec<_> = candidates
        .into_iter()
        .filter(|signal| {
            signal.forecast_total_inches >= MIN_WORTH_INCHES
                && signal.forecast_total_inches > best_nearby_inches * 0.5
        })
        .collect();
    sort_by_verdict_then_snow(&mut keep);
    keep.truncate(WORTH_THE_DRIVE_LIMIT);
    keep
}
