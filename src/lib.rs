//! Facade crate for the Powline ski-conditions engine.
//!
//! This crate re-exports the core domain types and exposes the scoring and
//! ranking implementations behind feature flags.

#![forbid(unsafe_code)]

pub use powline_core::{
    DriveRadius, GoNoGo, Pass, PowderScorer, Region, ResortSignal, ScoreContext, ScoreResult,
    UserProfile, Verdict,
};

#[cfg(feature = "scorer")]
pub use powline_scorer::{HolidayCalendar, LegacyScorer, LiveScorer};

#[cfg(feature = "rank")]
pub use powline_rank::{
    DashboardSections, Gazetteer, ListEntry, ListFilters, MapFilters, MapItem, VerdictFilter,
    rank_for_dashboard,
};
