//! Avalanche bulletin model (CAAML v6 / EAWS bulletin collection)
//!
//! Field inventory follows the CAAMLv6 EAWS bulletin schema. Every field
//! except `publicationTime` is optional; absence means "not reported",
//! never zero. Unknown provider extensions travel opaquely in
//! `customData` and are never interpreted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::problem::AvalancheProblem;
use crate::rating::DangerRating;
use crate::timestamp;

/// A bulletin collection document, the top-level shape published by a
/// warning service for one or more regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvalancheBulletins {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bulletins: Vec<AvalancheBulletin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl AvalancheBulletins {
    /// The empty collection, the safe fallback when a payload cannot be
    /// validated.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bulletins.is_empty()
    }
}

/// An avalanche bulletin valid for a given set of regions over one
/// validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvalancheBulletin {
    /// Unique ID for the bulletin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulletin_id: Option<String>,

    /// Two-letter language code (ISO 639-1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Time and date when the bulletin was issued to the public.
    #[serde(with = "timestamp")]
    pub publication_time: DateTime<Utc>,

    /// Time and date when the next bulletin will be published.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub next_update: Option<DateTime<Utc>>,

    /// Date and time from and until this bulletin is valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time: Option<ValidTime>,

    /// Flag if the bulletin is unscheduled or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unscheduled: Option<bool>,

    /// Regions for which this bulletin is valid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub danger_ratings: Vec<DangerRating>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avalanche_problems: Vec<AvalancheProblem>,

    /// Short text to highlight an exceptionally dangerous situation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avalanche_activity: Option<Texts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowpack_structure: Option<Texts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_advisory: Option<Texts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_forecast: Option<Texts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_review: Option<Texts>,

    /// Expected tendency after the bulletin's period of validity.
    ///
    /// Providers publish this both as a single object and as an array;
    /// both spellings collapse to an array at the parse boundary.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "one_or_many_tendencies"
    )]
    pub tendency: Vec<Tendency>,

    /// Details about the issuer/AWS of the bulletin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl AvalancheBulletin {
    /// Create a bulletin with only the required field set.
    pub fn new(publication_time: DateTime<Utc>) -> Self {
        Self {
            bulletin_id: None,
            lang: None,
            publication_time,
            next_update: None,
            valid_time: None,
            unscheduled: None,
            regions: Vec::new(),
            danger_ratings: Vec::new(),
            avalanche_problems: Vec::new(),
            highlights: None,
            avalanche_activity: None,
            snowpack_structure: None,
            travel_advisory: None,
            weather_forecast: None,
            weather_review: None,
            tendency: Vec::new(),
            source: None,
            custom_data: None,
            meta_data: None,
        }
    }

    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_danger_ratings(mut self, ratings: Vec<DangerRating>) -> Self {
        self.danger_ratings = ratings;
        self
    }

    /// The provider (or person) name, if the bulletin declares a source.
    pub fn source_name(&self) -> Option<&str> {
        let source = self.source.as_ref()?;
        source
            .provider
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .or_else(|| source.person.as_ref().and_then(|p| p.name.as_deref()))
    }
}

/// Tendency payloads arrive as one object or as an array of objects.
///
/// The variant is resolved once, here, so consumers only ever see a list.
fn one_or_many_tendencies<'de, D>(deserializer: D) -> Result<Vec<Tendency>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Tendency>),
        One(Box<Tendency>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(tendencies) => tendencies,
        OneOrMany::One(tendency) => vec![*tendency],
    })
}

/// A (micro) region for which a bulletin is valid.
///
/// The region ID follows the EAWS schema: a hierarchical string code where
/// an ancestor's ID is a prefix of its descendants' IDs, e.g. `IT-32-BZ`
/// covers `IT-32-BZ-01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(rename = "regionID")]
    pub region_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl Region {
    pub fn new(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            name: None,
            custom_data: None,
            meta_data: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Texts contains a highlight and a comment string; highlights acts as a
/// headline for the longer comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Texts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Two ISO 8601 timestamps bounding a validity window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidTime {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub end_time: Option<DateTime<Utc>>,
}

/// Expected tendency of the avalanche situation after the bulletin's
/// period of validity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tendency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tendency_type: Option<TendencyType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time: Option<ValidTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TendencyType {
    Decreasing,
    Steady,
    Increasing,
}

impl std::fmt::Display for TendencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decreasing => write!(f, "decreasing"),
            Self::Steady => write!(f, "steady"),
            Self::Increasing => write!(f, "increasing"),
        }
    }
}

/// Information about the bulletin source, either as a person or with a
/// provider element for the issuing warning service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// Details on a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

/// The issuing warning service: name, website and/or contact person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<Person>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

/// Meta data for various uses, e.g. links to external files like maps or
/// thumbnails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_files: Option<Vec<ExternalFile>>,
}

/// A link to an external file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_reference_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn publication_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap()
    }

    #[test]
    fn publication_time_is_required() {
        let err = serde_json::from_str::<AvalancheBulletin>("{\"lang\":\"en\"}");
        assert!(err.is_err());
    }

    #[test]
    fn tendency_object_normalizes_to_array() {
        let with_object: AvalancheBulletin = serde_json::from_value(serde_json::json!({
            "publicationTime": "2024-01-15T16:00:00Z",
            "tendency": { "tendencyType": "increasing" }
        }))
        .unwrap();

        let with_array: AvalancheBulletin = serde_json::from_value(serde_json::json!({
            "publicationTime": "2024-01-15T16:00:00Z",
            "tendency": [{ "tendencyType": "increasing" }]
        }))
        .unwrap();

        assert_eq!(with_object.tendency, with_array.tendency);
        assert_eq!(with_object.tendency.len(), 1);
        assert_eq!(
            with_object.tendency[0].tendency_type,
            Some(TendencyType::Increasing)
        );
    }

    #[test]
    fn missing_tendency_is_empty() {
        let bulletin: AvalancheBulletin = serde_json::from_value(serde_json::json!({
            "publicationTime": "2024-01-15T16:00:00Z"
        }))
        .unwrap();
        assert!(bulletin.tendency.is_empty());
    }

    #[test]
    fn region_id_uses_schema_spelling() {
        let region: Region =
            serde_json::from_str("{\"regionID\":\"IT-32-BZ\",\"name\":\"South Tyrol\"}").unwrap();
        assert_eq!(region.region_id, "IT-32-BZ");

        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["regionID"], "IT-32-BZ");
    }

    #[test]
    fn source_name_prefers_provider() {
        let mut bulletin = AvalancheBulletin::new(publication_time());
        bulletin.source = Some(Source {
            person: Some(Person {
                name: Some("Forecaster".into()),
                ..Person::default()
            }),
            provider: Some(Provider {
                name: Some("Avalanche Warning Service".into()),
                ..Provider::default()
            }),
        });
        assert_eq!(bulletin.source_name(), Some("Avalanche Warning Service"));
    }

    #[test]
    fn custom_data_round_trips() {
        let bulletin: AvalancheBulletin = serde_json::from_value(serde_json::json!({
            "publicationTime": "2024-01-15T16:00:00Z",
            "customData": { "providerSpecific": [1, 2, 3] }
        }))
        .unwrap();

        let json = serde_json::to_value(&bulletin).unwrap();
        assert_eq!(json["customData"]["providerSpecific"], serde_json::json!([1, 2, 3]));
    }
}
