//! Avalanche problems and the EAWS problem vocabulary

use serde::{Deserialize, Serialize};

use crate::aspect::Aspect;
use crate::bulletin::MetaData;
use crate::elevation::ElevationBoundaryOrBand;
use crate::rating::{DangerRatingValue, ValidTimePeriod};

/// Expected avalanche problem, according to the EAWS avalanche problem
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvalancheProblemType {
    Cornices,
    FavourableSituation,
    GlidingSnow,
    NewSnow,
    NoDistinctAvalancheProblem,
    PersistentWeakLayers,
    WetSnow,
    WindSlab,
}

impl AvalancheProblemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cornices => "cornices",
            Self::FavourableSituation => "favourable_situation",
            Self::GlidingSnow => "gliding_snow",
            Self::NewSnow => "new_snow",
            Self::NoDistinctAvalancheProblem => "no_distinct_avalanche_problem",
            Self::PersistentWeakLayers => "persistent_weak_layers",
            Self::WetSnow => "wet_snow",
            Self::WindSlab => "wind_slab",
        }
    }
}

impl std::fmt::Display for AvalancheProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expected frequency of lowest snowpack stability. Three stage scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvalancheFrequency {
    Few,
    Some,
    Many,
}

impl std::fmt::Display for AvalancheFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Few => write!(f, "few"),
            Self::Some => write!(f, "some"),
            Self::Many => write!(f, "many"),
        }
    }
}

/// Snowpack stability, according to the EAWS definition. Four stage scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnowpackStability {
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl std::fmt::Display for SnowpackStability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Fair => write!(f, "fair"),
            Self::Poor => write!(f, "poor"),
            Self::VeryPoor => write!(f, "very_poor"),
        }
    }
}

/// An avalanche problem with its time, aspect, and elevation constraints.
///
/// A textual detail about the affected terrain can be given in the comment
/// field. The implied danger rating value is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvalancheProblem {
    pub problem_type: AvalancheProblemType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspects: Option<Vec<Aspect>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<ElevationBoundaryOrBand>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<AvalancheFrequency>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowpack_stability: Option<SnowpackStability>,

    /// Expected avalanche size, 1 (small) to 5 (extremely large).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avalanche_size: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_rating_value: Option<DangerRatingValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time_period: Option<ValidTimePeriod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl AvalancheProblem {
    /// Create a problem with no constraints.
    pub fn new(problem_type: AvalancheProblemType) -> Self {
        Self {
            problem_type,
            aspects: None,
            elevation: None,
            frequency: None,
            snowpack_stability: None,
            avalanche_size: None,
            danger_rating_value: None,
            valid_time_period: None,
            comment: None,
            custom_data: None,
            meta_data: None,
        }
    }
}
