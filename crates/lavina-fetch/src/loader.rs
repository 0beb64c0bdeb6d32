//! Concurrent per-region bulletin loading

use futures::future::join_all;
use lavina_caaml::validate_payload;
use lavina_core::AvalancheBulletins;

use crate::source::BulletinSource;

/// Load and validate the bulletins for a set of regions.
///
/// Regions are fetched concurrently, one request per region, and each
/// payload runs through the validation boundary with the empty fallback.
/// A region that fails to fetch or validate contributes no bulletins and
/// is logged; it never causes other regions' data to be discarded.
pub async fn load_bulletins(
    source: &dyn BulletinSource,
    date: &str,
    regions: &[String],
) -> AvalancheBulletins {
    let fetches = regions.iter().map(|region| async move {
        let locator = source.locate(date, region);
        match source.fetch_raw(date, region).await {
            Ok(payload) => {
                validate_payload(&payload, &AvalancheBulletins::empty(), Some(&locator))
            }
            Err(e) => {
                tracing::warn!(region = %region, error = %e, "bulletin fetch failed, region degrades");
                AvalancheBulletins::empty()
            }
        }
    });

    let mut collected = AvalancheBulletins::empty();
    for result in join_all(fetches).await {
        collected.bulletins.extend(result.bulletins);
    }
    collected
}
