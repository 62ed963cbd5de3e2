//! User profile: home location, drive tolerance, passes, preferences, and
//! alert settings.
//!
//! The profile is owned by the caller and injected into every ranking call;
//! nothing here reads ambient state. Persistence belongs to the storage
//! collaborator; this module only fixes the serialized shape.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Pass;

/// Resolved home location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeLocation {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Human-readable place name.
    pub display_name: String,
}

/// Maximum acceptable one-way drive, or fly-anywhere.
///
/// Serialized as the minute count (45, 60, 120, 180) or the string "fly".
///
/// # Examples
/// ```
/// use powline_core::DriveRadius;
///
/// assert!(DriveRadius::Within60.admits(45));
/// assert!(!DriveRadius::Within60.admits(61));
/// assert!(DriveRadius::Fly.admits(600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DriveRadius {
    /// Up to 45 minutes.
    Within45,
    /// Up to an hour.
    #[default]
    Within60,
    /// Up to two hours.
    Within120,
    /// Up to three hours.
    Within180,
    /// No limit.
    Fly,
}

/// Radius rungs with their advertised mile equivalents.
const RADIUS_MILES: &[(DriveRadius, u32)] = &[
    (DriveRadius::Within45, 40),
    (DriveRadius::Within60, 55),
    (DriveRadius::Within120, 100),
    (DriveRadius::Within180, 150),
];

impl DriveRadius {
    /// The minute limit, or `None` for [`DriveRadius::Fly`].
    #[must_use]
    pub const fn as_minutes(self) -> Option<u32> {
        match self {
            Self::Within45 => Some(45),
            Self::Within60 => Some(60),
            Self::Within120 => Some(120),
            Self::Within180 => Some(180),
            Self::Fly => None,
        }
    }

    /// The radius for an exact minute count, if it is one of the rungs.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            45 => Some(Self::Within45),
            60 => Some(Self::Within60),
            120 => Some(Self::Within120),
            180 => Some(Self::Within180),
            _ => None,
        }
    }

    /// Whether a drive of `minutes` falls inside the radius.
    ///
    /// [`DriveRadius::Fly`] admits everything. The unknown-drive sentinel
    /// (0 minutes) is admitted by every radius; partitioning treats an
    /// unresolved location as nearby rather than dropping the resort.
    #[must_use]
    pub fn admits(self, minutes: u32) -> bool {
        self.as_minutes().is_none_or(|limit| minutes <= limit)
    }

    /// Advertised mile equivalent of the radius, or `None` for
    /// [`DriveRadius::Fly`].
    #[must_use]
    pub fn approx_miles(self) -> Option<u32> {
        RADIUS_MILES
            .iter()
            .find(|(radius, _)| *radius == self)
            .map(|(_, miles)| *miles)
    }

    /// The smallest radius whose mile equivalent covers `miles`, with ten
    /// miles of grace per rung; anything farther clamps to three hours.
    ///
    /// # Examples
    /// ```
    /// use powline_core::DriveRadius;
    ///
    /// assert_eq!(DriveRadius::from_miles(48.0), DriveRadius::Within45);
    /// assert_eq!(DriveRadius::from_miles(400.0), DriveRadius::Within180);
    /// ```
    #[must_use]
    pub fn from_miles(miles: f64) -> Self {
        RADIUS_MILES
            .iter()
            .find(|(_, threshold)| miles <= f64::from(threshold + 10))
            .map_or(Self::Within180, |(radius, _)| *radius)
    }

    /// Wire spelling: the minute count, or "fly".
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Within45 => "45",
            Self::Within60 => "60",
            Self::Within120 => "120",
            Self::Within180 => "180",
            Self::Fly => "fly",
        }
    }
}

impl std::fmt::Display for DriveRadius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DriveRadius {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fly") {
            return Ok(Self::Fly);
        }
        s.parse::<u32>()
            .ok()
            .and_then(Self::from_minutes)
            .ok_or_else(|| format!("unknown drive radius '{s}' (expected 45, 60, 120, 180, or fly)"))
    }
}

impl Serialize for DriveRadius {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_minutes() {
            Some(minutes) => serializer.serialize_u32(minutes),
            None => serializer.serialize_str("fly"),
        }
    }
}

impl<'de> Deserialize<'de> for DriveRadius {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RadiusVisitor;

        impl Visitor<'_> for RadiusVisitor {
            type Value = DriveRadius;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("45, 60, 120, 180, or \"fly\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                u32::try_from(value)
                    .ok()
                    .and_then(DriveRadius::from_minutes)
                    .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u32::try_from(value)
                    .ok()
                    .and_then(DriveRadius::from_minutes)
                    .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value
                    .parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(RadiusVisitor)
    }
}

/// How often storm alerts should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFrequency {
    /// Only significant storms.
    BigStorms,
    /// Any fresh snowfall.
    AnySnow,
    /// A weekly digest.
    Weekly,
    /// Alerts disabled.
    Off,
}

/// When an alert should arrive relative to the ski day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTiming {
    /// The evening before.
    NightBefore,
    /// Early the same morning.
    EarlyMorning,
    /// Both.
    Both,
}

/// Which resorts an alert may cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertResortFilter {
    /// Every resort.
    All,
    /// Favourites only.
    Favorites,
    /// Resorts on an owned pass only.
    PassOnly,
}

/// Storm alert preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Trigger cadence.
    pub frequency: AlertFrequency,
    /// Delivery timing.
    pub timing: AlertTiming,
    /// Minimum snowfall, in inches, worth alerting about.
    pub min_snowfall_inches: f64,
    /// Resort coverage.
    pub resort_filter: AlertResortFilter,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            frequency: AlertFrequency::BigStorms,
            timing: AlertTiming::NightBefore,
            min_snowfall_inches: 6.0,
            resort_filter: AlertResortFilter::PassOnly,
        }
    }
}

/// The locally-owned user profile injected into ranking calls.
///
/// `Default` is the first-load profile; [`UserProfile::reset`] returns an
/// existing profile to it. Unknown keys in persisted JSON are ignored so
/// older profiles keep loading.
///
/// # Examples
/// ```
/// use powline_core::{DriveRadius, UserProfile};
///
/// let profile = UserProfile::default().with_max_drive(DriveRadius::Within120);
/// assert_eq!(profile.max_drive_minutes, DriveRadius::Within120);
/// assert!(!profile.onboarding_complete);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Resolved home location, once the user has set one.
    pub home_location: Option<HomeLocation>,
    /// Drive tolerance.
    pub max_drive_minutes: DriveRadius,
    /// Owned passes.
    pub passes: Vec<Pass>,
    /// Named resort for a resort-specific pass.
    pub specific_resort_pass: Option<String>,
    /// Stated ski preferences.
    pub preferences: Vec<SkiPreference>,
    /// Storm alert preferences.
    pub alert_settings: AlertSettings,
    /// Whether onboarding finished.
    pub onboarding_complete: bool,
}

impl UserProfile {
    /// Replace the drive tolerance, returning `self` for chaining.
    #[must_use]
    pub fn with_max_drive(mut self, radius: DriveRadius) -> Self {
        self.max_drive_minutes = radius;
        self
    }

    /// Replace the home location, returning `self` for chaining.
    #[must_use]
    pub fn with_home(mut self, location: HomeLocation) -> Self {
        self.home_location = Some(location);
        self
    }

    /// Whether the user owns `pass`.
    #[must_use]
    pub fn owns_pass(&self, pass: Pass) -> bool {
        self.passes.contains(&pass)
    }

    /// Return the profile to the first-load defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A stated ski preference from onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkiPreference {
    /// Chases powder days.
    Powder,
    /// Prefers groomed runs.
    Groomers,
    /// Tree skiing.
    Trees,
    /// Steep terrain.
    Steeps,
    /// Terrain parks.
    Park,
    /// Avoids crowds.
    AvoidCrowds,
    /// Close and easy outings.
    CloseEasy,
    /// Skis during storms.
    StormSkiing,
    /// Waits for bluebird days.
    Bluebird,
}
