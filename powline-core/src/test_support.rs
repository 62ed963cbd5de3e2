//! Test-only builders for signals and history records used by unit and
//! behaviour tests.
//!
//! The live-signal builder deliberately avoids every scoring trigger: a
//! machine-groomed surface, terrain open above the penalty thresholds, and
//! no wind, assessment, or holiday data. Tests flip exactly the field they
//! exercise.

use chrono::NaiveDate;

use crate::{
    DailyForecast, ElevationProfile, ForecastDay, Pass, Region, ResortRecord, ResortSignal,
    SnowQuality, TerrainBreakdown, TerrainProfile, Visibility, inches_to_cm,
};

/// A live signal with neutral conditions, ready for scoring and ranking
/// tests.
#[must_use]
pub fn ranked_signal(slug: &str, forecast_inches: f64, drive_minutes: u32) -> ResortSignal {
    ResortSignal {
        slug: slug.to_owned(),
        name: display_name(slug),
        region: "colorado-i70".to_owned(),
        state: "CO".to_owned(),
        passes: vec!["epic".to_owned()],
        elevation: ElevationProfile {
            base: 8120.0,
            summit: 11570.0,
            vertical: 3450.0,
        },
        terrain: TerrainProfile {
            acres: 2000.0,
            trails: 150,
            lifts: 20,
            breakdown: TerrainBreakdown {
                beginner: 20.0,
                intermediate: 40.0,
                advanced: 30.0,
                expert: Some(10.0),
            },
        },
        avg_snowfall: 300.0,
        snowfall_24h: 0.0,
        snowfall_24h_inches: 0.0,
        forecast_total: inches_to_cm(forecast_inches),
        forecast_total_inches: forecast_inches,
        base_depth: 100.0,
        terrain_open_pct: 80.0,
        drive_time_minutes: drive_minutes,
        distance_miles: f64::from(drive_minutes),
        conditions: "Machine groomed".to_owned(),
        daily_forecast: None,
        weather: None,
        go_no_go: None,
    }
}

/// A single daily forecast entry with the given snowfall in centimetres.
///
/// # Panics
/// Panics when `date` is not an ISO `YYYY-MM-DD` date.
#[must_use]
pub fn forecast_day_cm(date: &str, snowfall_cm: f64) -> DailyForecast {
    DailyForecast {
        date: iso_date(date),
        snowfall_cm,
        high: 25.0,
        low: 12.0,
    }
}

/// A stored resort row with mid-table geography and size.
#[must_use]
pub fn resort_record(id: &str, drive_minutes: i32, acres: f64) -> ResortRecord {
    ResortRecord {
        id: id.to_owned(),
        name: display_name(id),
        pass: Pass::Epic,
        region: Region::Colorado,
        state: "CO".to_owned(),
        lat: 39.6403,
        lng: -106.3742,
        drive_minutes,
        base_elevation: 8120.0,
        summit_elevation: 11570.0,
        trails: 150,
        acres,
    }
}

/// A calm, clear history day with the given snowfall and surface quality.
///
/// # Panics
/// Panics when `date` is not an ISO `YYYY-MM-DD` date.
#[must_use]
pub fn history_day(
    resort_id: &str,
    date: &str,
    snowfall_inches: f64,
    snow_quality: SnowQuality,
) -> ForecastDay {
    ForecastDay {
        resort_id: resort_id.to_owned(),
        date: iso_date(date),
        snowfall_inches,
        snow_quality,
        wind_mph: 5.0,
        high_temp_f: 28.0,
        low_temp_f: 15.0,
        visibility: Visibility::Clear,
    }
}

/// Parse an ISO date, panicking on malformed test input.
#[must_use]
pub fn iso_date(date: &str) -> NaiveDate {
    date.parse().expect("test dates use YYYY-MM-DD")
}

fn display_name(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut start_of_word = true;
    for ch in slug.chars() {
        if ch == '-' {
            name.push(' ');
            start_of_word = true;
        } else if start_of_word {
            name.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            name.push(ch);
        }
    }
    name
}
