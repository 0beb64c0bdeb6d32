//! Danger-rating resolution
//!
//! Reduces a bulletin's danger ratings to one displayable warn level for a
//! micro-region's elevation class. Micro-region polygons are split into a
//! "low" and a "high" part at a nominal elevation line; ratings carry
//! their own elevation constraints, and the two have to be reconciled.

use lavina_core::{DangerRating, ValidTimePeriod};
use serde::{Deserialize, Serialize};

/// The elevation classification of a micro-region polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationClass {
    /// The part below the elevation line.
    Low,

    /// The part above the elevation line.
    High,

    /// No elevation distinction requested.
    LowHigh,
}

impl ElevationClass {
    /// Parse the wire spelling (`low`, `high`, `low_high`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Self::Low),
            "high" => Some(Self::High),
            "low_high" => Some(Self::LowHigh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::LowHigh => "low_high",
        }
    }
}

impl std::fmt::Display for ElevationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve a rating set to one warn level (0-5) for an elevation class.
///
/// Worst case wins: the result is the maximum warn level among the
/// applicable ratings, because a region is exactly as dangerous as its
/// most severe concurrently-valid rating. Ratings are never averaged.
/// An empty or inapplicable rating set resolves to 0 ("no rating").
///
/// `threshold` is the micro-region polygon's nominal split altitude. A
/// `High` query demotes to `Low` when a rating's forecast boundary sits
/// above that split line (its numeric `lowerBound` exceeds the
/// threshold): the high part of the polygon must not display a danger
/// level that only holds even higher up.
pub fn resolve(
    ratings: &[DangerRating],
    class: ElevationClass,
    threshold: Option<i32>,
) -> u8 {
    let class = reclassify(ratings, class, threshold);

    ratings
        .iter()
        .filter(|rating| applies(rating, class))
        .map(|rating| rating.main_value.warn_level())
        .max()
        .unwrap_or(0)
}

/// Step 1: threshold reclassification of the queried class.
fn reclassify(
    ratings: &[DangerRating],
    class: ElevationClass,
    threshold: Option<i32>,
) -> ElevationClass {
    let Some(threshold) = threshold else {
        return class;
    };
    if class != ElevationClass::High {
        return class;
    }

    let boundary_above_polygon_split = ratings.iter().any(|rating| {
        rating
            .elevation
            .as_ref()
            .and_then(|e| e.numeric_lower())
            .is_some_and(|lower| lower > threshold)
    });

    if boundary_above_polygon_split {
        ElevationClass::Low
    } else {
        class
    }
}

/// Step 2: whether a rating applies to the (possibly reclassified) class.
fn applies(rating: &DangerRating, class: ElevationClass) -> bool {
    if class == ElevationClass::LowHigh {
        return true;
    }
    let Some(elevation) = rating.elevation.as_ref() else {
        return true;
    };
    if elevation.is_unbounded() {
        return true;
    }
    match class {
        ElevationClass::Low => elevation.upper_bound.is_some(),
        ElevationClass::High => elevation.lower_bound.is_some(),
        ElevationClass::LowHigh => true,
    }
}

/// Keep the ratings valid during a given time period.
///
/// `all_day` ratings (and ratings with no period at all) apply to every
/// query; an `earlier`/`later` query additionally selects the ratings
/// constrained to that same period.
pub fn ratings_for_period(
    ratings: &[DangerRating],
    period: ValidTimePeriod,
) -> Vec<DangerRating> {
    ratings
        .iter()
        .filter(|rating| match rating.valid_time_period {
            None | Some(ValidTimePeriod::AllDay) => true,
            Some(p) => p == period,
        })
        .cloned()
        .collect()
}
