//! Danger ratings and the EAWS rating vocabulary

use serde::{Deserialize, Serialize};

use crate::aspect::Aspect;
use crate::elevation::ElevationBoundaryOrBand;
use crate::bulletin::MetaData;

/// Danger rating value, according to the EAWS danger scale definition.
///
/// These identifiers are STABLE - they are the wire vocabulary shared by
/// all providers. Do not rename variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerRatingValue {
    NoRating,
    NoSnow,
    Low,
    Moderate,
    Considerable,
    High,
    VeryHigh,
}

impl DangerRatingValue {
    /// Get the rating as its stable string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoRating => "no_rating",
            Self::NoSnow => "no_snow",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Considerable => "considerable",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// All seven rating identifiers, in ascending order of severity.
    pub const ALL: [DangerRatingValue; 7] = [
        Self::NoRating,
        Self::NoSnow,
        Self::Low,
        Self::Moderate,
        Self::Considerable,
        Self::High,
        Self::VeryHigh,
    ];
}

impl std::fmt::Display for DangerRatingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Valid time period limits the validity of an element to an earlier or
/// later part of the day. It is used to distinguish danger ratings or
/// avalanche problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidTimePeriod {
    AllDay,
    Earlier,
    Later,
}

impl ValidTimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllDay => "all_day",
            Self::Earlier => "earlier",
            Self::Later => "later",
        }
    }
}

impl std::fmt::Display for ValidTimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A danger rating with its elevation constraint and valid time period.
///
/// If `valid_time_period` or `elevation` constrain a rating, the bulletin
/// is expected to define companion ratings for the complementary cases -
/// consumers must not assume one rating per bulletin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerRating {
    pub main_value: DangerRatingValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<ElevationBoundaryOrBand>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time_period: Option<ValidTimePeriod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspects: Option<Vec<Aspect>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl DangerRating {
    /// Create an unconstrained rating.
    pub fn new(main_value: DangerRatingValue) -> Self {
        Self {
            main_value,
            elevation: None,
            valid_time_period: None,
            aspects: None,
            custom_data: None,
            meta_data: None,
        }
    }

    /// Constrain the rating to an elevation range.
    pub fn with_elevation(mut self, elevation: ElevationBoundaryOrBand) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Constrain the rating to a part of the day.
    pub fn with_period(mut self, period: ValidTimePeriod) -> Self {
        self.valid_time_period = Some(period);
        self
    }
}
