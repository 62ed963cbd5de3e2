//! Verdict vocabulary: the three-way recommendation and the upstream
//! go/no-go assessment status it can be derived from.
//!
//! # Examples
//! ```
//! use powline_core::{GoNoGo, Verdict};
//!
//! assert_eq!(Verdict::Go.as_str(), "go");
//! assert_eq!(GoNoGo::Conditional.verdict(), Verdict::Maybe);
//! ```

use serde::{Deserialize, Serialize};

/// Three-way recommendation for a resort: ski it, consider it, or skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Conditions warrant a visit.
    Go,
    /// Borderline; worth a closer look.
    Maybe,
    /// Not worth the trip.
    Skip,
}

impl Verdict {
    /// Return the verdict as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use powline_core::Verdict;
    ///
    /// assert_eq!(Verdict::Maybe.as_str(), "maybe");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Maybe => "maybe",
            Self::Skip => "skip",
        }
    }

    /// Sort rank for ranking lists: `Go` first, `Skip` last.
    ///
    /// # Examples
    /// ```
    /// use powline_core::Verdict;
    ///
    /// assert!(Verdict::Go.priority() < Verdict::Skip.priority());
    /// ```
    pub const fn priority(self) -> u8 {
        match self {
            Self::Go => 0,
            Self::Maybe => 1,
            Self::Skip => 2,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" => Ok(Self::Go),
            "maybe" => Ok(Self::Maybe),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("unknown verdict '{s}'")),
        }
    }
}

/// Overall status of an upstream go/no-go assessment.
///
/// The wire spelling of [`GoNoGo::NoGo`] is `no-go`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoNoGo {
    /// Conditions assessed as favourable.
    Go,
    /// Favourable with caveats.
    Conditional,
    /// Assessed as unfavourable.
    NoGo,
}

impl GoNoGo {
    /// Return the status as its wire spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Conditional => "conditional",
            Self::NoGo => "no-go",
        }
    }

    /// Map the assessment status onto a [`Verdict`].
    ///
    /// Conditional becomes maybe and no-go becomes skip.
    ///
    /// # Examples
    /// ```
    /// use powline_core::{GoNoGo, Verdict};
    ///
    /// assert_eq!(GoNoGo::NoGo.verdict(), Verdict::Skip);
    /// ```
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::Go => Verdict::Go,
            Self::Conditional => Verdict::Maybe,
            Self::NoGo => Verdict::Skip,
        }
    }
}

impl std::fmt::Display for GoNoGo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GoNoGo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" => Ok(Self::Go),
            "conditional" => Ok(Self::Conditional),
            "no-go" => Ok(Self::NoGo),
            _ => Err(format!("unknown go/no-go status '{s}'")),
        }
    }
}
