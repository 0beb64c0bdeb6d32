//! Bulletin payload validation with fallback

use lavina_core::AvalancheBulletins;
use serde_json::Value;

use crate::adapter;

/// Errors produced by the typed validation step.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("payload is not valid JSON: {0}")]
    Decode(String),

    #[error("payload does not match the bulletin schema: {0}")]
    Schema(String),
}

/// Validate a decoded JSON document into the canonical bulletin collection.
///
/// Applies the version adapter before typed validation, so historic field
/// spellings are accepted.
pub fn try_validate(mut document: Value) -> Result<AvalancheBulletins, ValidationError> {
    adapter::normalize_legacy_fields(&mut document);
    serde_json::from_value(document).map_err(|e| ValidationError::Schema(e.to_string()))
}

/// Validate an untrusted payload, substituting `fallback` on any failure.
///
/// This function is total: it decodes the payload as JSON, validates it
/// against the canonical shape, and on either failure logs a diagnostic
/// (with the offending payload and source URL) and returns the fallback
/// instead. Bulletin availability degrades per region; no payload can
/// abort the callers' aggregation.
pub fn validate_payload(
    payload: &str,
    fallback: &AvalancheBulletins,
    source_url: Option<&str>,
) -> AvalancheBulletins {
    let document: Value = match serde_json::from_str(payload) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(
                url = source_url.unwrap_or("<unknown>"),
                error = %e,
                "bulletin payload is not valid JSON, using fallback"
            );
            return fallback.clone();
        }
    };

    match try_validate(document) {
        Ok(bulletins) => bulletins,
        Err(e) => {
            tracing::warn!(
                url = source_url.unwrap_or("<unknown>"),
                payload,
                error = %e,
                "bulletin payload failed schema validation, using fallback"
            );
            fallback.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_json_falls_back() {
        let fallback = AvalancheBulletins::empty();
        let result = validate_payload("{not json", &fallback, Some("https://example.test"));
        assert_eq!(result, fallback);
    }

    #[test]
    fn wrong_shape_falls_back() {
        let fallback = AvalancheBulletins::empty();
        // decodes fine, but bulletins entries are missing publicationTime
        let payload = json!({ "bulletins": [{ "lang": "en" }] }).to_string();
        let result = validate_payload(&payload, &fallback, None);
        assert_eq!(result, fallback);
    }

    #[test]
    fn valid_payload_passes_through() {
        let payload = json!({
            "bulletins": [{
                "publicationTime": "2024-01-15T16:00:00Z",
                "regions": [{ "regionID": "AT-07" }]
            }]
        })
        .to_string();

        let result = validate_payload(&payload, &AvalancheBulletins::empty(), None);
        assert_eq!(result.bulletins.len(), 1);
        assert_eq!(result.bulletins[0].regions[0].region_id, "AT-07");
    }

    #[test]
    fn schema_error_names_the_problem() {
        let err = try_validate(json!({ "bulletins": [{}] })).unwrap_err();
        assert!(matches!(err, ValidationError::Schema(_)));
    }
}
