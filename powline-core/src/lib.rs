//! Core domain types for the Powline engine.
//!
//! The crate fixes the shared vocabulary the scoring and ranking crates
//! build on:
//! - **Wire decoding** for the aggregated conditions feed: [`ResortSignal`]
//!   with its nested elevation, terrain, weather, and assessment payloads.
//! - **Normalisation** of units ([`cm_to_inches`] and friends), pass
//!   identifiers ([`Pass`]), and free-form feed regions ([`Region`]).
//! - **Scoring contracts**: the [`PowderScorer`] trait plus the
//!   [`ScoreResult`] verdict mapping every scorer funnels through.
//! - **User state**: the locally-owned [`UserProfile`] injected into every
//!   ranking call.
//!
//! Nothing here performs I/O; callers decode payloads and hand the types in.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod pass;
mod profile;
mod record;
mod region;
mod resort;
mod scorer;
mod units;
mod verdict;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use pass::Pass;
pub use profile::{
    AlertFrequency, AlertResortFilter, AlertSettings, AlertTiming, DriveRadius, HomeLocation,
    SkiPreference, UserProfile,
};
pub use record::{
    ForecastDay, RecordedSignal, ResortConditions, ResortRecord, SnowQuality, Visibility,
};
pub use region::Region;
pub use resort::{
    AssessmentFactor, DailyForecast, ElevationProfile, GoNoGoAssessment, ResortSignal,
    TerrainBreakdown, TerrainProfile, WeatherSnapshot,
};
pub use scorer::{PowderScorer, ScoreContext, ScoreResult};
pub use units::{
    celsius_to_fahrenheit, cm_to_inches, inches_to_cm, kph_to_mph, meters_to_feet, meters_to_miles,
};
pub use verdict::{GoNoGo, Verdict};
