//! Season pass affiliations.
//!
//! The wire protocol knows five identifiers; the client additionally tracks
//! a resort-specific pass which has no wire spelling of its own.
//!
//! # Examples
//! ```
//! use powline_core::Pass;
//!
//! assert_eq!(Pass::from_api("ikon"), Pass::Ikon);
//! assert_eq!(Pass::from_api("season-2024"), Pass::None);
//! assert_eq!(Pass::ResortSpecific.api_name(), "none");
//! ```

use serde::{Deserialize, Serialize};

/// A season pass a resort honours or a user owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    /// Vail Resorts' Epic pass.
    Epic,
    /// Alterra's Ikon pass.
    Ikon,
    /// The Indy pass.
    Indy,
    /// The Mountain Collective pass.
    MountainCollective,
    /// A single-resort pass with no multi-resort affiliation.
    ResortSpecific,
    /// No pass affiliation.
    None,
}

impl Pass {
    /// Bucket a raw wire identifier into a pass.
    ///
    /// The five wire identifiers map to themselves; anything unrecognised
    /// degrades to [`Pass::None`]. The reserved resort-specific value never
    /// arrives on the wire, so this function never produces it.
    ///
    /// # Examples
    /// ```
    /// use powline_core::Pass;
    ///
    /// assert_eq!(Pass::from_api("mountain_collective"), Pass::MountainCollective);
    /// assert_eq!(Pass::from_api("resort_specific"), Pass::None);
    /// ```
    #[must_use]
    pub fn from_api(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "epic" => Self::Epic,
            "ikon" => Self::Ikon,
            "indy" => Self::Indy,
            "mountain_collective" => Self::MountainCollective,
            "none" => Self::None,
            _ => Self::None,
        }
    }

    /// Return the pass as its snake_case identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Epic => "epic",
            Self::Ikon => "ikon",
            Self::Indy => "indy",
            Self::MountainCollective => "mountain_collective",
            Self::ResortSpecific => "resort_specific",
            Self::None => "none",
        }
    }

    /// Return the identifier the wire protocol accepts for this pass.
    ///
    /// [`Pass::ResortSpecific`] has no wire spelling and maps to `none`.
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::ResortSpecific => "none",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Pass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epic" => Ok(Self::Epic),
            "ikon" => Ok(Self::Ikon),
            "indy" => Ok(Self::Indy),
            "mountain_collective" => Ok(Self::MountainCollective),
            "resort_specific" => Ok(Self::ResortSpecific),
            "none" => Ok(Self::None),
            _ => Err(format!("unknown pass '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("epic", Pass::Epic)]
    #[case("ikon", Pass::Ikon)]
    #[case("indy", Pass::Indy)]
    #[case("mountain_collective", Pass::MountainCollective)]
    #[case("none", Pass::None)]
    #[case("EPIC", Pass::Epic)]
    #[case("resort_specific", Pass::None)]
    #[case("platinum-plus", Pass::None)]
    #[case("", Pass::None)]
    fn buckets_wire_identifiers(#[case] raw: &str, #[case] expected: Pass) {
        assert_eq!(Pass::from_api(raw), expected);
    }

    #[test]
    fn resort_specific_has_no_wire_spelling() {
        assert_eq!(Pass::ResortSpecific.api_name(), "none");
        assert_eq!(Pass::Ikon.api_name(), "ikon");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Pass::MountainCollective).unwrap();
        assert_eq!(json, "\"mountain_collective\"");
    }
}
