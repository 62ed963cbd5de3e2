//! Map projection: verdict-coloured, snowfall-scaled resort pins.
//!
//! The ranked payload carries no coordinates, so projection joins each
//! signal against a [`Gazetteer`] and silently drops resorts the table
//! does not know. Coordinates are WGS84 with `x = longitude` and
//! `y = latitude`.

use std::collections::HashMap;

use geo::Coord;
use powline_core::{Pass, ResortSignal, Verdict};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A resort pin ready for the map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapItem {
    /// Unique resort key.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Primary pass affiliation.
    pub pass: Pass,
    /// Pin colour. The upstream assessment when present, otherwise
    /// `Skip`; a resort with no assessment is never a maybe on the map.
    pub verdict: Verdict,
    /// Seven-day snowfall total in inches.
    pub snowfall: f64,
    /// Drive time in minutes, 0 for unknown.
    pub drive_minutes: u32,
    /// Pin position.
    pub location: Coord<f64>,
}

impl MapItem {
    /// Pin radius scaled by snowfall, clamped to `[5, 14]`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the radius grows half a point per forecast inch"
    )]
    #[must_use]
    pub fn pin_radius(&self) -> f64 {
        (5.0 + self.snowfall * 0.5).clamp(5.0, 14.0)
    }
}

impl Serialize for MapItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MapItem", 8)?;
        state.serialize_field("slug", &self.slug)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("pass", &self.pass)?;
        state.serialize_field("verdict", &self.verdict)?;
        state.serialize_field("snowfall", &self.snowfall)?;
        state.serialize_field("drive_minutes", &self.drive_minutes)?;
        state.serialize_field("lat", &self.location.y)?;
        state.serialize_field("lon", &self.location.x)?;
        state.end()
    }
}

/// Project ranked signals into map pins, dropping resorts without a
/// coordinate lookup.
///
/// # Examples
/// ```
/// use powline_core::test_support::ranked_signal;
/// use powline_rank::{Gazetteer, project};
///
/// let signals = vec![
///     ranked_signal("alta", 12.0, 40),
///     ranked_signal("somewhere-new", 9.0, 20),
/// ];
/// let pins = project(&signals, &Gazetteer::builtin());
///
/// assert_eq!(pins.len(), 1);
/// let pin = pins.first().expect("alta is in the coordinate table");
/// assert_eq!(pin.slug, "alta");
/// ```
#[must_use]
pub fn project(signals: &[ResortSignal], gazetteer: &Gazetteer) -> Vec<MapItem> {
    signals
        .iter()
        .filter_map(|signal| {
            gazetteer.lookup(&signal.slug).map(|location| MapItem {
                slug: signal.slug.clone(),
                name: signal.name.clone(),
                pass: signal.primary_pass(),
                verdict: signal
                    .go_no_go
                    .as_ref()
                    .map_or(Verdict::Skip, |assessment| assessment.overall.verdict()),
                snowfall: signal.forecast_inches(),
                drive_minutes: signal.drive_time_minutes,
                location,
            })
        })
        .collect()
}

/// Three-mode verdict filter for the map chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerdictFilter {
    /// Every verdict passes.
    #[default]
    All,
    /// Only go resorts.
    Go,
    /// Go or maybe; skip is rejected.
    MaybePlus,
}

impl VerdictFilter {
    /// Whether a pin with this verdict passes the filter.
    #[must_use]
    pub const fn admits(self, verdict: Verdict) -> bool {
        match self {
            Self::All => true,
            Self::Go => matches!(verdict, Verdict::Go),
            Self::MaybePlus => !matches!(verdict, Verdict::Skip),
        }
    }
}

/// Pass and verdict filters for the map view, applied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapFilters {
    /// Keep pins whose pass matches, or all passes when unset.
    pub pass: Option<Pass>,
    /// Verdict mode.
    pub verdict: VerdictFilter,
}

impl MapFilters {
    /// Drop every pin that fails a filter.
    #[must_use]
    pub fn apply(self, items: Vec<MapItem>) -> Vec<MapItem> {
        items
            .into_iter()
            .filter(|item| {
                self.pass.is_none_or(|pass| item.pass == pass) && self.verdict.admits(item.verdict)
            })
            .collect()
    }
}

/// Slug to coordinate lookup backing the map view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gazetteer {
    coords: HashMap<String, Coord<f64>>,
}

impl Gazetteer {
    /// The shipped resort coordinate table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN
                .iter()
                .map(|&(slug, lat, lon)| (slug.to_owned(), Coord { x: lon, y: lat })),
        )
    }

    /// A gazetteer over an arbitrary coordinate table.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Coord<f64>)>,
    {
        Self {
            coords: pairs.into_iter().collect(),
        }
    }

    /// Coordinates for a slug, or `None` for an unknown resort.
    #[must_use]
    pub fn lookup(&self, slug: &str) -> Option<Coord<f64>> {
        self.coords.get(slug).copied()
    }

    /// Number of known resorts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Shipped coordinates as (slug, latitude, longitude).
///
/// The upstream API holds coordinates in its data model but never sends
/// them; this table bridges the gap for the map.
const BUILTIN: &[(&str, f64, f64)] = &[
    // Colorado: I-70 corridor
    ("vail", 39.6403, -106.3742),
    ("beaver-creek", 39.6042, -106.5165),
    ("breckenridge", 39.4817, -106.0384),
    ("keystone", 39.6069, -105.9497),
    ("copper-mountain", 39.5022, -106.1497),
    ("arapahoe-basin", 39.6426, -105.8718),
    ("loveland", 39.68, -105.8978),
    ("winter-park", 39.8868, -105.7625),
    ("eldora", 39.9372, -105.5828),
    // Colorado: elsewhere
    ("steamboat", 40.4572, -106.8045),
    ("aspen-snowmass", 39.2084, -106.949),
    ("aspen-mountain", 39.1869, -106.8187),
    ("aspen-highlands", 39.1781, -106.8558),
    ("buttermilk", 39.169, -106.8684),
    ("telluride", 37.9375, -107.8123),
    ("crested-butte", 38.899, -106.965),
    ("purgatory", 37.6301, -107.8135),
    ("monarch", 38.5124, -106.3323),
    ("wolf-creek", 37.4731, -106.7934),
    ("powderhorn", 39.069, -108.1508),
    // Utah: the Cottonwoods and Wasatch back
    ("snowbird", 40.583, -111.6509),
    ("alta", 40.5884, -111.6386),
    ("brighton", 40.5981, -111.5833),
    ("solitude", 40.6199, -111.5928),
    // Utah: Park City
    ("park-city", 40.6514, -111.508),
    ("deer-valley", 40.6375, -111.4783),
    // Utah: elsewhere
    ("snowbasin", 41.216, -111.8569),
    ("powder-mountain", 41.3789, -111.7808),
    ("brian-head", 37.7021, -112.8499),
    ("sundance", 40.3934, -111.5878),
    ("nordic-valley", 41.3104, -111.8648),
    // California: Tahoe
    ("palisades-tahoe", 39.1968, -120.2354),
    ("heavenly", 38.9353, -119.94),
    ("northstar", 39.2746, -120.121),
    ("kirkwood", 38.685, -120.0653),
    ("sugar-bowl", 39.3045, -120.3352),
    ("boreal", 39.3322, -120.3488),
    ("diamond-peak", 39.2533, -119.9218),
    ("sierra-at-tahoe", 38.8017, -120.0801),
    // California: eastern Sierra
    ("mammoth-mountain", 37.6308, -119.0326),
    ("june-mountain", 37.7672, -119.0893),
    // California: SoCal
    ("bear-mountain", 34.2275, -116.86),
    ("snow-summit", 34.2366, -116.8906),
    ("mountain-high", 34.3723, -117.6926),
    // Pacific Northwest
    ("crystal-mountain", 46.9352, -121.5045),
    ("stevens-pass", 47.7453, -121.089),
    ("mt-baker", 48.8574, -121.665),
    ("mt-bachelor", 43.9794, -121.6886),
    ("timberline", 45.3311, -121.7113),
    ("meadows", 45.3311, -121.6649),
    ("mission-ridge", 47.2928, -120.3986),
    ("white-pass", 46.6372, -121.3902),
    ("snoqualmie", 47.4206, -121.4135),
    // Alaska
    ("alyeska", 60.9606, -149.1),
    // Northeast
    ("killington", 43.6045, -72.8201),
    ("stowe", 44.5303, -72.7815),
    ("sugarbush", 44.1358, -72.9108),
    ("jay-peak", 44.9272, -72.5048),
    ("sunday-river", 44.4731, -70.8567),
    ("sugarloaf", 45.0314, -70.3131),
    ("loon", 44.0364, -71.6214),
    ("bretton-woods", 44.2547, -71.4636),
    ("cannon", 44.1564, -71.6989),
    ("wildcat", 44.2642, -71.2394),
    ("stratton", 43.1134, -72.9087),
    ("okemo", 43.4015, -72.7173),
    ("mount-snow", 42.9603, -72.9211),
    ("hunter-mountain", 42.2003, -74.2256),
    ("windham-mountain", 42.2969, -74.2539),
    ("whiteface", 44.3654, -73.9026),
    ("gore-mountain", 43.6747, -74.0064),
    // Northern Rockies
    ("jackson-hole", 43.5877, -110.8279),
    ("big-sky", 45.2833, -111.4014),
    ("sun-valley", 43.6975, -114.3514),
    ("grand-targhee", 43.7897, -110.9585),
    ("whitefish", 48.4816, -114.3564),
    ("schweitzer", 48.3675, -116.6221),
    ("brundage", 44.8614, -116.154),
    ("bogus-basin", 43.7643, -116.1026),
    ("red-lodge", 45.1856, -109.3354),
    // New Mexico
    ("taos", 36.5969, -105.4544),
    ("angel-fire", 36.3933, -105.285),
    ("ski-santa-fe", 35.7955, -105.8019),
    // Canada West
    ("whistler-blackcomb", 50.1163, -122.9574),
    ("revelstoke", 51.0, -118.1642),
    ("kicking-horse", 51.2975, -117.0478),
    ("sunshine-village", 51.0715, -115.7737),
    ("lake-louise", 51.4403, -116.1518),
    ("fernie", 49.4622, -115.0867),
    ("red-mountain", 49.1044, -117.8456),
    // Midwest
    ("boyne-mountain", 45.1672, -84.9414),
    ("crystal-mountain-mi", 44.5228, -86.2514),
    ("nubs-nob", 45.47, -84.9031),
    ("lutsen", 47.6633, -90.714),
    ("granite-peak", 44.9486, -89.6832),
    // Southeast
    ("snowshoe", 38.4098, -79.9959),
    ("wintergreen", 37.9383, -78.9447),
    ("beech-mountain", 36.1858, -81.8757),
    ("sugar-mountain", 36.1203, -81.8689),
    ("cataloochee", 35.571, -83.0943),
];
