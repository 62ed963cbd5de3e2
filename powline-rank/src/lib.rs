//! Ranking and projection for the Powline dashboard, list, and map views.
//!
//! Consumes decoded [`ResortSignal`](powline_core::ResortSignal) payloads
//! and produces the plain data the views render:
//!
//! - [`rank_for_dashboard`] sections the payload under a drive radius;
//! - [`ListEntry`] rows with [`search`], [`ListFilters`],
//!   [`group_by_region`], and the [`nearby`] and [`top_conditions`]
//!   subsections;
//! - [`project`] joins signals against a [`Gazetteer`] to build map pins.
//!
//! Everything here is a pure projection: no I/O, no shared state, safe to
//! recompute on every render.
//!
//! # Examples
//! ```
//! use powline_core::{DriveRadius, test_support::ranked_signal};
//! use powline_rank::rank_for_dashboard;
//!
//! let sections = rank_for_dashboard(
//!     vec![
//!         ranked_signal("alta", 14.0, 35),
//!         ranked_signal("brighton", 9.0, 45),
//!     ],
//!     DriveRadius::Fly,
//! );
//!
//! assert_eq!(sections.top_pick.map(|top| top.slug), Some("alta".to_owned()));
//! assert_eq!(sections.your_resorts.len(), 1);
//! assert!(sections.worth_the_drive.is_empty());
//! ```

#![forbid(unsafe_code)]

mod dashboard;
mod list;
mod map;

pub use dashboard::{DashboardSections, rank_for_dashboard};
pub use list::{
    ListEntry, ListFilters, approx_score, group_by_region, nearby, search, top_conditions,
};
pub use map::{Gazetteer, MapFilters, MapItem, VerdictFilter, project};

#[cfg(test)]
mod tests;
