//! Historical record shapes from the mock-data era.
//!
//! These predate the ranked wire payload and survive so the legacy scoring
//! strategy can keep reproducing its original arithmetic against recorded
//! fixtures. New integrations should use [`ResortSignal`](crate::ResortSignal).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Pass, Region, Verdict};

/// Graded snow surface quality from the recorded forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnowQuality {
    /// Fresh powder.
    Powder,
    /// Packed powder or groomed.
    Packed,
    /// Wet or heavy snow.
    Wet,
    /// Icy surface.
    Ice,
}

impl SnowQuality {
    /// Quality points fed into the legacy score average.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::Powder => 10.0,
            Self::Packed => 5.0,
            Self::Wet => 3.0,
            Self::Ice => 1.0,
        }
    }
}

/// Sky state attached to a recorded forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Clear skies.
    Clear,
    /// Partly cloudy.
    PartlyCloudy,
    /// Overcast.
    Overcast,
    /// Actively snowing.
    Snowing,
}

/// One recorded forecast day for one resort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Resort the day belongs to.
    pub resort_id: String,
    /// Forecast date.
    pub date: NaiveDate,
    /// Snowfall in inches.
    pub snowfall_inches: f64,
    /// Graded surface quality.
    pub snow_quality: SnowQuality,
    /// Wind in mph.
    pub wind_mph: f64,
    /// Daytime high in Fahrenheit.
    pub high_temp_f: f64,
    /// Overnight low in Fahrenheit.
    pub low_temp_f: f64,
    /// Sky state.
    pub visibility: Visibility,
}

/// A resort as the mock-data era recorded it.
///
/// `drive_minutes` is signed with -1 meaning unknown; the legacy score
/// formula consumes the raw value as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortRecord {
    /// Unique resort key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Pass affiliation.
    pub pass: Pass,
    /// Broad region bucket.
    pub region: Region,
    /// State or province code.
    pub state: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// One-way drive in minutes; -1 when unknown.
    pub drive_minutes: i32,
    /// Base elevation in feet.
    pub base_elevation: f64,
    /// Summit elevation in feet.
    pub summit_elevation: f64,
    /// Trail count.
    pub trails: u32,
    /// Skiable acres.
    pub acres: f64,
}

/// A resort record paired with its recorded forecast days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedSignal {
    /// The resort.
    pub resort: ResortRecord,
    /// Its forecast days, already filtered to this resort.
    pub forecasts: Vec<ForecastDay>,
}

/// Rolled-up conditions summary the mock-data views consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResortConditions {
    /// Resort the summary belongs to.
    pub resort_id: String,
    /// Snowfall over the last two recorded days, in inches.
    pub snowfall_48h: f64,
    /// Snowfall over the last five recorded days, in inches.
    pub snowfall_5day: f64,
    /// Raw legacy powder score; unlike the live score it may be negative.
    pub powder_score: i32,
    /// Verdict implied by the score.
    pub verdict: Verdict,
    /// Headline for the verdict.
    pub verdict_label: &'static str,
    /// Suggested window, present only on a go.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<&'static str>,
    /// When snowfall is expected to taper, present only on a go.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow_ends: Option<&'static str>,
}
