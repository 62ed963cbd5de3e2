//! Injected holiday calendar feeding the crowd multiplier.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use powline_core::ScoreContext;

/// Holiday dates used for crowd estimation.
///
/// The calendar is injected configuration rather than a baked-in constant:
/// [`HolidayCalendar::season_2025_26`] ships the current season's United
/// States dates, and callers swap in their own set when the season rolls
/// over.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use powline_scorer::HolidayCalendar;
///
/// let calendar = HolidayCalendar::season_2025_26();
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// assert!(calendar.is_holiday(christmas));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

/// United States ski-season holidays for 2025-26.
const SEASON_2025_26: &[(i32, u32, u32)] = &[
    (2025, 11, 28), // Thanksgiving Friday
    (2025, 11, 29), // Thanksgiving Saturday
    (2025, 12, 24), // Christmas Eve
    (2025, 12, 25), // Christmas Day
    (2025, 12, 26), // Christmas break
    (2025, 12, 31), // New Year's Eve
    (2026, 1, 1),   // New Year's Day
    (2026, 1, 19),  // MLK Day
    (2026, 2, 16),  // Presidents' Day
    (2026, 3, 16),  // Spring break week (approximate)
    (2026, 3, 17),
    (2026, 3, 18),
    (2026, 3, 19),
    (2026, 3, 20),
];

impl HolidayCalendar {
    /// Build a calendar from explicit dates.
    #[must_use]
    pub fn new<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// The bundled 2025-26 United States season calendar.
    #[must_use]
    pub fn season_2025_26() -> Self {
        Self::new(
            SEASON_2025_26
                .iter()
                .filter_map(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day)),
        )
    }

    /// Whether `date` is a listed holiday.
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Derive the weekend and holiday flags for `date`.
    #[must_use]
    pub fn context_for(&self, date: NaiveDate) -> ScoreContext {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        ScoreContext::new(weekend, self.is_holiday(date))
    }

    /// Number of listed dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the calendar lists no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
