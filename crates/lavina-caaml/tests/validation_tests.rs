//! Integration tests for the validation boundary
//!
//! Exercises the full path from raw provider payloads to the canonical
//! bulletin model: lossless round-trips, total fallback behavior, and the
//! shape normalizations providers actually require.

use lavina_caaml::{try_validate, validate_payload};
use lavina_core::{AvalancheBulletins, DangerRatingValue, TendencyType};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_document() -> serde_json::Value {
    json!({
        "bulletins": [{
            "bulletinID": "AT-07-2024-01-15",
            "lang": "en",
            "publicationTime": "2024-01-15T16:00:00+00:00",
            "validTime": {
                "startTime": "2024-01-15T17:00:00+00:00",
                "endTime": "2024-01-16T17:00:00+00:00"
            },
            "unscheduled": false,
            "regions": [
                { "regionID": "AT-07-01", "name": "Allgäu Alps" },
                { "regionID": "AT-07-02" }
            ],
            "dangerRatings": [
                {
                    "mainValue": "considerable",
                    "elevation": { "lowerBound": "2200" },
                    "validTimePeriod": "all_day",
                    "aspects": ["N", "NE", "E"]
                },
                {
                    "mainValue": "moderate",
                    "elevation": { "upperBound": "2200" },
                    "validTimePeriod": "all_day"
                }
            ],
            "avalancheProblems": [{
                "problemType": "wind_slab",
                "aspects": ["N", "NE", "E", "SE"],
                "elevation": { "lowerBound": "treeline" },
                "snowpackStability": "poor",
                "frequency": "some",
                "avalancheSize": 2
            }],
            "tendency": [{ "tendencyType": "steady" }],
            "highlights": "Fresh wind slabs above the treeline.",
            "source": {
                "provider": {
                    "name": "Avalanche Warning Service Tyrol",
                    "website": "https://avalanche.report"
                }
            },
            "customData": { "pipeline": "pyAvaCore", "run": 42 }
        }],
        "customData": { "collection": true }
    })
}

#[test]
fn well_formed_document_round_trips() {
    let validated = try_validate(sample_document()).unwrap();

    let serialized = serde_json::to_value(&validated).unwrap();
    let revalidated = try_validate(serialized).unwrap();

    assert_eq!(validated, revalidated);
}

#[test]
fn round_trip_preserves_custom_data() {
    let validated = try_validate(sample_document()).unwrap();

    assert_eq!(
        validated.custom_data,
        Some(json!({ "collection": true }))
    );
    assert_eq!(
        validated.bulletins[0].custom_data,
        Some(json!({ "pipeline": "pyAvaCore", "run": 42 }))
    );
}

#[test]
fn validation_never_panics_on_malformed_input() {
    let fallback = AvalancheBulletins::empty();

    for payload in [
        "",
        "null",
        "42",
        "\"a string\"",
        "[1, 2, 3]",
        "{}",
        "{\"bulletins\": 7}",
        "{\"bulletins\": [null]}",
        "{\"bulletins\": [{\"publicationTime\": \"not a date\"}]}",
        "{\"bulletins\": [{\"publicationTime\": \"2024-01-15T16:00:00Z\", \"dangerRatings\": [{}]}]}",
        "{truncated",
    ] {
        let result = validate_payload(payload, &fallback, Some("https://bulletins.test/doc.json"));
        // every payload resolves to a well-typed value, never an error
        assert_eq!(result, fallback);
    }
}

#[test]
fn empty_object_is_a_valid_empty_collection() {
    let result = validate_payload("{}", &AvalancheBulletins::empty(), None);
    assert!(result.is_empty());
}

#[test]
fn tendency_single_object_equals_one_element_array() {
    let as_object = try_validate(json!({
        "bulletins": [{
            "publicationTime": "2024-01-15T16:00:00Z",
            "tendency": { "tendencyType": "decreasing", "comment": "Cooling." }
        }]
    }))
    .unwrap();

    let as_array = try_validate(json!({
        "bulletins": [{
            "publicationTime": "2024-01-15T16:00:00Z",
            "tendency": [{ "tendencyType": "decreasing", "comment": "Cooling." }]
        }]
    }))
    .unwrap();

    assert_eq!(as_object, as_array);
    assert_eq!(
        as_object.bulletins[0].tendency[0].tendency_type,
        Some(TendencyType::Decreasing)
    );
}

#[test]
fn zone_qualified_and_utc_timestamps_coerce_identically() {
    let zoned = try_validate(json!({
        "bulletins": [{ "publicationTime": "2024-01-15T17:00:00+01:00" }]
    }))
    .unwrap();

    let utc = try_validate(json!({
        "bulletins": [{ "publicationTime": "2024-01-15T16:00:00Z" }]
    }))
    .unwrap();

    assert_eq!(
        zoned.bulletins[0].publication_time,
        utc.bulletins[0].publication_time
    );
}

#[test]
fn legacy_spellings_validate_through_the_adapter() {
    let validated = try_validate(json!({
        "bulletins": [{
            "publicationTime": "2024-01-15T16:00:00Z",
            "wxSynopsis": { "comment": "A front crosses the Alps." },
            "avalancheProblems": [{
                "problemType": "gliding_snow",
                "terrainFeature": "grassy south-facing slopes"
            }]
        }]
    }))
    .unwrap();

    let bulletin = &validated.bulletins[0];
    assert_eq!(
        bulletin.weather_forecast.as_ref().and_then(|t| t.comment.as_deref()),
        Some("A front crosses the Alps.")
    );
    assert_eq!(
        bulletin.avalanche_problems[0].comment.as_deref(),
        Some("grassy south-facing slopes")
    );
}

#[test]
fn ratings_keep_their_vocabulary() {
    let validated = try_validate(sample_document()).unwrap();
    let ratings = &validated.bulletins[0].danger_ratings;

    assert_eq!(ratings[0].main_value, DangerRatingValue::Considerable);
    assert_eq!(ratings[1].main_value, DangerRatingValue::Moderate);
}

#[test]
fn fallback_itself_can_carry_bulletins() {
    let fallback = try_validate(sample_document()).unwrap();
    let result = validate_payload("{broken", &fallback, None);
    assert_eq!(result, fallback);
}
