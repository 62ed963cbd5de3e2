//! Index-ranked list rows with search, compound filters, and grouping.
//!
//! The ranked payload carries no intrinsic score for the flat list view,
//! so rows take a display-only approximation from their rank position.
//! Search and filters whittle the rows down; grouping and the two
//! subsections then derive their own orderings from the survivors.

use std::collections::BTreeMap;

use powline_core::{Pass, Region, ResortSignal};

/// Cap on the nearby subsection.
const NEARBY_LIMIT: usize = 8;

/// Cap on the top-conditions subsection.
const TOP_CONDITIONS_LIMIT: usize = 10;

/// A list row: a ranked signal paired with the derived fields the list
/// views sort and filter on.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// The underlying ranked signal.
    pub signal: ResortSignal,
    /// Display-only rank-position score in `[15, 35]`.
    pub approx_score: u32,
    /// Broad region bucket for grouping.
    pub region: Region,
    /// Seven-day snowfall total in inches.
    pub snowfall: f64,
}

impl ListEntry {
    /// Build list rows from a ranked payload, assigning each row its
    /// approximate score from its position in the full list.
    ///
    /// # Examples
    /// ```
    /// use powline_core::test_support::ranked_signal;
    /// use powline_rank::ListEntry;
    ///
    /// let rows = ListEntry::from_ranked(vec![
    ///     ranked_signal("alta", 18.0, 35),
    ///     ranked_signal("brighton", 12.0, 40),
    ///     ranked_signal("sundance", 3.0, 55),
    /// ]);
    /// let scores: Vec<u32> = rows.iter().map(|row| row.approx_score).collect();
    /// assert_eq!(scores, [35, 25, 15]);
    /// ```
    #[must_use]
    pub fn from_ranked(signals: Vec<ResortSignal>) -> Vec<Self> {
        let len = signals.len();
        signals
            .into_iter()
            .enumerate()
            .map(|(index, signal)| Self {
                approx_score: approx_score(index, len),
                region: signal.region_bucket(),
                snowfall: signal.forecast_inches(),
                signal,
            })
            .collect()
    }
}

/// Approximate powder score for position `index` in a list of `len`
/// resorts sorted by snowfall descending.
///
/// Interpolates linearly from 35 down to 15; a list of one (or none)
/// scores a flat 30. Display-only, never the authoritative score.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the interpolation maps small list indices onto [15, 35]"
)]
#[must_use]
pub fn approx_score(index: usize, len: usize) -> u32 {
    if len <= 1 {
        return 30;
    }
    let position = index as f64 / (len - 1) as f64;
    (35.0 - position * 20.0).round() as u32
}

/// Keep rows whose name, state, or region label contains the query,
/// case-insensitively. A blank query keeps everything.
#[must_use]
pub fn search(rows: Vec<ListEntry>, query: &str) -> Vec<ListEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            row.signal.name.to_lowercase().contains(&needle)
                || row.signal.state.to_lowercase().contains(&needle)
                || row.region.label().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Compound list filters. Every active filter must pass for a row to
/// survive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListFilters {
    /// Keep resorts whose primary pass matches.
    pub pass: Option<Pass>,
    /// Keep resorts within an hour's drive; unknown drive times pass.
    pub within_hour: bool,
    /// Keep resorts with at least six inches forecast.
    pub six_plus: bool,
    /// Keep resorts in one region.
    pub region: Option<Region>,
    /// Keep resorts in one state.
    pub state: Option<String>,
}

impl ListFilters {
    /// Whether a row survives every active filter.
    #[must_use]
    pub fn matches(&self, row: &ListEntry) -> bool {
        self.pass
            .is_none_or(|pass| row.signal.primary_pass() == pass)
            && (!self.within_hour || row.signal.drive_time_minutes <= 60)
            && (!self.six_plus || row.snowfall >= 6.0)
            && self.region.is_none_or(|region| row.region == region)
            && self
                .state
                .as_deref()
                .is_none_or(|state| row.signal.state == state)
    }

    /// Drop every row that fails a filter.
    #[must_use]
    pub fn apply(&self, rows: Vec<ListEntry>) -> Vec<ListEntry> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

/// Bucket rows by region, each bucket sorted by approximate score
/// descending. Buckets iterate in [`Region`] declaration order.
#[must_use]
pub fn group_by_region(rows: Vec<ListEntry>) -> BTreeMap<Region, Vec<ListEntry>> {
    let mut buckets: BTreeMap<Region, Vec<ListEntry>> = BTreeMap::new();
    for row in rows {
        buckets.entry(row.region).or_default().push(row);
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| b.approx_score.cmp(&a.approx_score));
    }
    buckets
}

/// The closest rows with a known drive time, ascending, capped at eight.
#[must_use]
pub fn nearby(rows: &[ListEntry]) -> Vec<ListEntry> {
    let mut close: Vec<_> = rows
        .iter()
        .filter(|row| row.signal.drive_time_minutes > 0)
        .cloned()
        .collect();
    close.sort_by_key(|row| row.signal.drive_time_minutes);
    close.truncate(NEARBY_LIMIT);
    close
}

/// The best-scoring rows, descending, capped at ten.
#[must_use]
pub fn top_conditions(rows: &[ListEntry]) -> Vec<ListEntry> {
    let mut best = rows.to_vec();
    best.sort_by(|a, b| b.approx_score.cmp(&a.approx_score));
    best.truncate(TOP_CONDITIONS_LIMIT);
    best
}
