//! Powder scoring strategies for the Powline engine.
//!
//! Two strategies share the [`PowderScorer`](powline_core::PowderScorer)
//! contract:
//! - [`LiveScorer`] scores live feed signals, blending forecast snowfall and
//!   surface quality with drive-time, crowd, wind, temperature, open-terrain,
//!   and go/no-go factors.
//! - [`LegacyScorer`] reproduces the original arithmetic for stored history
//!   records and summarises them into presentation-ready conditions.
//!
//! Crowd estimation needs to know about weekends and holidays; the
//! [`HolidayCalendar`] derives both flags from an injected date list so the
//! season's calendar stays configuration rather than code.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use powline_core::{PowderScorer, test_support::ranked_signal};
//! use powline_scorer::{HolidayCalendar, LiveScorer};
//!
//! let calendar = HolidayCalendar::season_2025_26();
//! let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
//! let result = LiveScorer.score(&ranked_signal("alta", 14.0, 35), calendar.context_for(date));
//! assert!(result.score >= 25);
//! ```

#![forbid(unsafe_code)]

mod calendar;
mod legacy;
mod live;

pub use calendar::HolidayCalendar;
pub use legacy::LegacyScorer;
pub use live::LiveScorer;
