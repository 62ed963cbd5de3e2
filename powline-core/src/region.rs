//! Broad user-facing region taxonomy and the bucketing of granular wire
//! regions into it.
//!
//! The wire protocol reports granular regions such as `colorado-i70` or
//! `utah-cottonwoods`; the client groups resorts under ten broad buckets.
//!
//! # Examples
//! ```
//! use powline_core::Region;
//!
//! assert_eq!(Region::from_api("utah-cottonwoods"), Region::Utah);
//! assert_eq!(Region::PacificNorthwest.label(), "Pacific Northwest");
//! ```

use serde::{Deserialize, Serialize};

/// Broad region bucket used for grouping and search.
///
/// Declaration order is the canonical presentation order for grouped lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Colorado.
    Colorado,
    /// Utah.
    Utah,
    /// California.
    California,
    /// Washington, Oregon, and Alaska.
    PacificNorthwest,
    /// New England, New York, and the mid-Atlantic.
    Northeast,
    /// Wyoming, Montana, and Idaho.
    NorthernRockies,
    /// British Columbia and Alberta.
    CanadaWest,
    /// New Mexico, Arizona, and Nevada.
    Southwest,
    /// The midwest and great plains.
    Midwest,
    /// The southeast.
    Southeast,
}

/// Granular wire regions in bucketing order.
///
/// Order matters: the prefix scan in [`Region::from_api`] walks this table
/// top to bottom and takes the first hit.
const API_REGION_BUCKETS: &[(&str, Region)] = &[
    // Colorado sub-regions
    ("colorado-i70", Region::Colorado),
    ("colorado-aspen", Region::Colorado),
    ("colorado-south", Region::Colorado),
    ("colorado-north", Region::Colorado),
    ("colorado-west", Region::Colorado),
    ("colorado-front-range", Region::Colorado),
    // Utah sub-regions
    ("utah-cottonwoods", Region::Utah),
    ("utah-wasatch", Region::Utah),
    ("utah-park-city", Region::Utah),
    ("utah-northern", Region::Utah),
    ("utah-southern", Region::Utah),
    // Northern Rockies
    ("wyoming", Region::NorthernRockies),
    ("montana", Region::NorthernRockies),
    ("idaho", Region::NorthernRockies),
    // California
    ("california-tahoe", Region::California),
    ("california-eastern-sierra", Region::California),
    ("california-sierra", Region::California),
    ("california-central", Region::California),
    ("california-southern", Region::California),
    ("california-northern", Region::California),
    // Pacific Northwest
    ("pacific-northwest", Region::PacificNorthwest),
    ("alaska", Region::PacificNorthwest),
    // Northeast
    ("new-england", Region::Northeast),
    ("new-york", Region::Northeast),
    ("mid-atlantic", Region::Northeast),
    // Southwest
    ("new-mexico", Region::Southwest),
    ("arizona", Region::Southwest),
    ("nevada", Region::Southwest),
    // Western Canada
    ("british-columbia", Region::CanadaWest),
    ("alberta", Region::CanadaWest),
    // Midwest
    ("michigan", Region::Midwest),
    ("minnesota", Region::Midwest),
    ("wisconsin", Region::Midwest),
    ("midwest", Region::Midwest),
    ("great-plains", Region::Midwest),
    // Southeast
    ("southeast", Region::Southeast),
];

impl Region {
    /// Bucket a granular wire region into a broad region.
    ///
    /// The input is lowercased with whitespace runs collapsed to dashes,
    /// then matched exactly against the known granular regions. On a miss,
    /// a prefix scan matches the input against the first dash-delimited
    /// token of each known key in table order. On a total miss the function
    /// warns and falls back to [`Region::Southwest`]; the fallback target is
    /// historical, not meaningful, so callers that need strictness should
    /// parse with `FromStr` instead.
    ///
    /// # Examples
    /// ```
    /// use powline_core::Region;
    ///
    /// assert_eq!(Region::from_api("Colorado I70"), Region::Colorado);
    /// assert_eq!(Region::from_api("utah-uintas"), Region::Utah);
    /// ```
    #[must_use]
    pub fn from_api(raw: &str) -> Self {
        let normalised = raw
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        if let Some((_, region)) = API_REGION_BUCKETS
            .iter()
            .find(|(key, _)| *key == normalised)
        {
            return *region;
        }

        let prefix_hit = API_REGION_BUCKETS.iter().find(|(key, _)| {
            key.split('-')
                .next()
                .is_some_and(|token| normalised.starts_with(token))
        });
        if let Some((_, region)) = prefix_hit {
            return *region;
        }

        log::warn!("unmapped wire region {raw:?}, falling back to southwest");
        Self::Southwest
    }

    /// Return the region as its snake_case identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colorado => "colorado",
            Self::Utah => "utah",
            Self::California => "california",
            Self::PacificNorthwest => "pacific_northwest",
            Self::Northeast => "northeast",
            Self::NorthernRockies => "northern_rockies",
            Self::CanadaWest => "canada_west",
            Self::Southwest => "southwest",
            Self::Midwest => "midwest",
            Self::Southeast => "southeast",
        }
    }

    /// Human-readable label used for display and text search.
    ///
    /// # Examples
    /// ```
    /// use powline_core::Region;
    ///
    /// assert_eq!(Region::CanadaWest.label(), "Western Canada");
    /// ```
    pub const fn label(self) -> &'static str {
        match self {
            Self::Colorado => "Colorado",
            Self::Utah => "Utah",
            Self::California => "California",
            Self::PacificNorthwest => "Pacific Northwest",
            Self::Northeast => "Northeast",
            Self::NorthernRockies => "Northern Rockies",
            Self::CanadaWest => "Western Canada",
            Self::Southwest => "Southwest",
            Self::Midwest => "Midwest",
            Self::Southeast => "Southeast",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "colorado" => Ok(Self::Colorado),
            "utah" => Ok(Self::Utah),
            "california" => Ok(Self::California),
            "pacific_northwest" => Ok(Self::PacificNorthwest),
            "northeast" => Ok(Self::Northeast),
            "northern_rockies" => Ok(Self::NorthernRockies),
            "canada_west" => Ok(Self::CanadaWest),
            "southwest" => Ok(Self::Southwest),
            "midwest" => Ok(Self::Midwest),
            "southeast" => Ok(Self::Southeast),
            _ => Err(format!("unknown region '{s}'")),
        }
    }
}
