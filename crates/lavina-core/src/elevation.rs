//! Elevation boundaries and bands

use serde::{Deserialize, Serialize};

/// An elevation constraint on a danger rating or avalanche problem.
///
/// Describes either a range below a certain bound (only `upper_bound` set),
/// above a certain bound (only `lower_bound` set), or a band (both set).
/// Both bounds unset means the whole elevation range. Bound values use a
/// numeric string at 100 m resolution, or the literal `"treeline"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationBoundaryOrBand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
}

/// A parsed elevation bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationBound {
    /// Numeric altitude in metres.
    Numeric(i32),

    /// The treeline, wherever it locally sits.
    Treeline,
}

impl ElevationBound {
    /// Parse a raw bound string.
    ///
    /// Returns `None` for malformed values; a bound that cannot be read is
    /// treated by consumers as if it carried no numeric information.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("treeline") {
            return Some(Self::Treeline);
        }
        raw.trim().parse::<i32>().ok().map(Self::Numeric)
    }

    /// The numeric altitude, if this bound has one.
    pub fn metres(&self) -> Option<i32> {
        match self {
            Self::Numeric(m) => Some(*m),
            Self::Treeline => None,
        }
    }
}

impl ElevationBoundaryOrBand {
    /// Create an "above this altitude" constraint.
    pub fn above(lower: impl Into<String>) -> Self {
        Self {
            lower_bound: Some(lower.into()),
            upper_bound: None,
        }
    }

    /// Create a "below this altitude" constraint.
    pub fn below(upper: impl Into<String>) -> Self {
        Self {
            lower_bound: None,
            upper_bound: Some(upper.into()),
        }
    }

    /// Whether no bound is set, i.e. the whole elevation range applies.
    pub fn is_unbounded(&self) -> bool {
        self.lower_bound.is_none() && self.upper_bound.is_none()
    }

    /// The parsed lower bound, if present and well-formed.
    pub fn lower(&self) -> Option<ElevationBound> {
        self.lower_bound.as_deref().and_then(ElevationBound::parse)
    }

    /// The parsed upper bound, if present and well-formed.
    pub fn upper(&self) -> Option<ElevationBound> {
        self.upper_bound.as_deref().and_then(ElevationBound::parse)
    }

    /// The numeric lower bound in metres, if one is set.
    ///
    /// `"treeline"` carries no altitude and yields `None`.
    pub fn numeric_lower(&self) -> Option<i32> {
        self.lower().and_then(|b| b.metres())
    }
}
