//! Max-danger-ratings map construction
//!
//! Presentation layers color micro-region polygons from a flat map of
//! `"region-id"` or `"region-id:elevation"` keys to warn levels. This
//! module builds that map by running every requested region key through
//! the region matcher and the rating resolver.

use std::collections::BTreeMap;

use lavina_core::AvalancheBulletin;
use serde::{Deserialize, Serialize};

use crate::region::find_bulletin;
use crate::resolve::{resolve, ElevationClass};

/// One micro-region resolution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionQuery {
    /// The queried micro-region ID.
    pub region_id: String,

    /// Elevation classification of the polygon.
    pub class: ElevationClass,

    /// The polygon's nominal elevation split line, in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,
}

impl RegionQuery {
    pub fn new(region_id: impl Into<String>, class: ElevationClass) -> Self {
        Self {
            region_id: region_id.into(),
            class,
            threshold: None,
        }
    }

    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Parse a composite region key (`"IT-32-BZ-01:high"`).
    ///
    /// A key without a recognized elevation suffix queries the whole
    /// region with no elevation distinction; an unknown suffix is not an
    /// error and is treated the same way.
    pub fn parse(key: &str) -> Self {
        if let Some((region_id, suffix)) = key.rsplit_once(':') {
            if let Some(class) = ElevationClass::parse(suffix) {
                return Self::new(region_id, class);
            }
        }
        Self::new(key, ElevationClass::LowHigh)
    }

    /// The map key this query resolves under.
    pub fn key(&self) -> String {
        match self.class {
            ElevationClass::LowHigh => self.region_id.clone(),
            class => format!("{}:{}", self.region_id, class),
        }
    }
}

/// Resolve a set of region queries against a bulletin list.
///
/// Each query independently finds its covering bulletin and reduces that
/// bulletin's ratings to one warn level. Queries with no covering
/// bulletin produce no entry, so providers that failed to deliver simply
/// leave their regions uncolored.
pub fn max_danger_ratings(
    bulletins: &[AvalancheBulletin],
    queries: &[RegionQuery],
) -> BTreeMap<String, u8> {
    let mut ratings = BTreeMap::new();

    for query in queries {
        let Some(bulletin) = find_bulletin(&query.region_id, bulletins) else {
            continue;
        };
        let warn_level = resolve(&bulletin.danger_ratings, query.class, query.threshold);
        ratings.insert(query.key(), warn_level);
    }

    ratings
}
