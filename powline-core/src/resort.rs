//! Resort signal shapes decoded from ranked wire payloads.
//!
//! A [`ResortSignal`] is one resort's snapshot for the active forecast
//! period. The helpers on it centralise the derivations presentation code
//! needs: seven-day totals, fallback verdicts, primary pass, and the
//! placeholder weather used when the feed omits a snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::units::round1;
use crate::{GoNoGo, Pass, Region, Verdict, cm_to_inches};

/// Base, summit, and vertical drop in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationProfile {
    /// Base elevation.
    pub base: f64,
    /// Summit elevation.
    pub summit: f64,
    /// Vertical drop.
    pub vertical: f64,
}

/// Trail difficulty mix in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainBreakdown {
    /// Beginner terrain share.
    pub beginner: f64,
    /// Intermediate terrain share.
    pub intermediate: f64,
    /// Advanced terrain share.
    pub advanced: f64,
    /// Expert terrain share, when the resort reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expert: Option<f64>,
}

/// Terrain inventory for one resort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainProfile {
    /// Skiable acres.
    pub acres: f64,
    /// Trail count.
    pub trails: u32,
    /// Lift count.
    pub lifts: u32,
    /// Difficulty mix.
    pub breakdown: TerrainBreakdown,
}

/// One day of the forecast breakdown. Snowfall is reported in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast date.
    pub date: NaiveDate,
    /// Expected snowfall in centimetres.
    #[serde(rename = "snowfall")]
    pub snowfall_cm: f64,
    /// Daytime high in Fahrenheit.
    pub high: f64,
    /// Overnight low in Fahrenheit.
    pub low: f64,
}

/// Current weather snapshot for one resort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Daytime high in Fahrenheit.
    pub high: f64,
    /// Overnight low in Fahrenheit.
    pub low: f64,
    /// Sustained wind in mph.
    pub wind_speed: f64,
    /// Gusts in mph.
    pub wind_gusts: f64,
    /// Feels-like temperature in Fahrenheit, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
}

impl WeatherSnapshot {
    /// Fixed placeholder used when the feed omits a snapshot.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            high: 25.0,
            low: 10.0,
            wind_speed: 15.0,
            wind_gusts: 0.0,
            feels_like: None,
        }
    }
}

/// One contributing factor of a go/no-go assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentFactor {
    /// Factor name, e.g. "Wind".
    pub label: String,
    /// Status keyword, e.g. "good" or "warning".
    pub status: String,
    /// Free-text detail.
    pub detail: String,
}

/// Structured upstream judgment about whether conditions warrant a visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoNoGoAssessment {
    /// Overall status.
    pub overall: GoNoGo,
    /// One-line summary used as the verdict label.
    pub summary: String,
    /// Contributing factors.
    #[serde(default)]
    pub factors: Vec<AssessmentFactor>,
}

/// Per-resort, per-period snapshot from the ranked wire payload.
///
/// Forecast totals are non-negative. A `drive_time_minutes` of 0 means the
/// drive time is unknown, not that the resort is at the doorstep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortSignal {
    /// Unique resort key.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Granular wire region; bucket with [`ResortSignal::region_bucket`].
    pub region: String,
    /// State or province code.
    pub state: String,
    /// Raw wire pass identifiers.
    #[serde(default)]
    pub passes: Vec<String>,
    /// Elevation profile in feet.
    pub elevation: ElevationProfile,
    /// Terrain inventory.
    pub terrain: TerrainProfile,
    /// Seasonal average snowfall in inches. Camel-cased on the wire.
    #[serde(rename = "avgSnowfall")]
    pub avg_snowfall: f64,
    /// Last 24h snowfall in centimetres.
    pub snowfall_24h: f64,
    /// Last 24h snowfall in inches.
    pub snowfall_24h_inches: f64,
    /// Forecast total for the active period in centimetres.
    pub forecast_total: f64,
    /// Forecast total for the active period in inches.
    pub forecast_total_inches: f64,
    /// Base depth in inches.
    pub base_depth: f64,
    /// Percentage of terrain currently open.
    pub terrain_open_pct: f64,
    /// One-way drive time in minutes; 0 when unknown.
    pub drive_time_minutes: u32,
    /// One-way distance in miles.
    pub distance_miles: f64,
    /// Free-text conditions summary.
    pub conditions: String,
    /// Day-by-day forecast breakdown, when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_forecast: Option<Vec<DailyForecast>>,
    /// Current weather, when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    /// Upstream go/no-go assessment, when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_no_go: Option<GoNoGoAssessment>,
}

impl ResortSignal {
    /// Seven-day snowfall total in inches.
    ///
    /// Sums the daily breakdown (converted from centimetres, rounded to one
    /// decimal) when a non-empty breakdown is present; otherwise falls back
    /// to the flat forecast total.
    #[must_use]
    pub fn forecast_inches(&self) -> f64 {
        self.daily_forecast
            .as_deref()
            .filter(|days| !days.is_empty())
            .map_or(self.forecast_total_inches, |days| {
                round1(days.iter().map(|day| cm_to_inches(day.snowfall_cm)).sum())
            })
    }

    /// Verdict for this signal.
    ///
    /// Uses the upstream assessment when present; otherwise derives one
    /// from the seven-day total and the conditions text.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.go_no_go
            .as_ref()
            .map_or_else(|| self.derived_verdict().0, |assessment| {
                assessment.overall.verdict()
            })
    }

    /// Label accompanying [`ResortSignal::verdict`].
    ///
    /// The assessment summary when present, else the derived headline.
    #[must_use]
    pub fn verdict_label(&self) -> String {
        self.go_no_go.as_ref().map_or_else(
            || self.derived_verdict().1.to_owned(),
            |assessment| assessment.summary.clone(),
        )
    }

    /// Snow-based fallback verdict used when no assessment is present:
    /// eight inches is a go, four inches (or snow in the conditions text)
    /// a maybe, anything less a skip. Reads the flat total rather than the
    /// daily breakdown so the verdict tracks the active period.
    fn derived_verdict(&self) -> (Verdict, &'static str) {
        let total = self.forecast_total_inches;
        if total >= 8.0 {
            (Verdict::Go, "Great conditions")
        } else if total >= 4.0 || self.conditions.to_lowercase().contains("snow") {
            (Verdict::Maybe, "Worth considering")
        } else {
            (Verdict::Skip, "Limited snow")
        }
    }

    /// First listed pass bucketed into the closed vocabulary, or
    /// [`Pass::None`] for a resort with no affiliations.
    #[must_use]
    pub fn primary_pass(&self) -> Pass {
        self.passes
            .first()
            .map_or(Pass::None, |raw| Pass::from_api(raw))
    }

    /// Broad region bucket for this signal's wire region.
    #[must_use]
    pub fn region_bucket(&self) -> Region {
        Region::from_api(&self.region)
    }

    /// Whether a usable drive time is present (0 is the unknown sentinel).
    #[must_use]
    pub const fn has_drive_time(&self) -> bool {
        self.drive_time_minutes > 0
    }

    /// The weather snapshot, or the fixed placeholder when the feed
    /// omitted one.
    #[must_use]
    pub fn weather_or_placeholder(&self) -> WeatherSnapshot {
        self.weather.unwrap_or_else(WeatherSnapshot::placeholder)
    }
}
