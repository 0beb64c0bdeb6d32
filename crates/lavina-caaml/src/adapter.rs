//! Schema version adapter
//!
//! The CAAML v6 schema went through slightly divergent revisions across
//! providers: `wxSynopsis` predates `weatherForecast`, and avalanche
//! problems historically carried `terrainFeature` where later revisions
//! use `comment`. This pass collapses those spellings at the JSON level,
//! before typed validation, so the canonical model and everything behind
//! it only ever sees one set of field names.
//!
//! The adapter only renames fields. It never invents values: a bulletin
//! missing a required `mainValue` or `problemType` still fails validation.

use serde_json::Value;

/// Rewrite historic field spellings in a decoded bulletin-collection
/// document, in place.
pub fn normalize_legacy_fields(document: &mut Value) {
    let Some(bulletins) = document
        .get_mut("bulletins")
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for bulletin in bulletins {
        rename_field(bulletin, "wxSynopsis", "weatherForecast");

        if let Some(problems) = bulletin
            .get_mut("avalancheProblems")
            .and_then(Value::as_array_mut)
        {
            for problem in problems {
                rename_field(problem, "terrainFeature", "comment");
            }
        }
    }
}

/// Move `from` to `to` within a JSON object, unless `to` already exists.
fn rename_field(object: &mut Value, from: &str, to: &str) {
    let Some(map) = object.as_object_mut() else {
        return;
    };
    if map.contains_key(to) {
        return;
    }
    if let Some(value) = map.remove(from) {
        map.insert(to.to_string(), value);
    }
}
