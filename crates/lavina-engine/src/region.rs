//! Region matching
//!
//! EAWS region IDs are hierarchical string codes: `IT-32-BZ` is the parent
//! of `IT-32-BZ-01`, so a bulletin declared for a province covers all of
//! its districts. Matching is pure prefix containment over the IDs; no
//! polygon geometry is evaluated here.

use lavina_core::AvalancheBulletin;

/// Find the bulletin covering a queried micro-region.
///
/// A bulletin matches when any of its declared region IDs is a prefix of
/// (or equal to) the queried ID. When several bulletins match, the one
/// with the longest matching region ID wins: finer-grained regional
/// services override national or umbrella bulletins. Ties break by
/// bulletin order, which keeps the choice deterministic for a fixed
/// input list.
pub fn find_bulletin<'a>(
    region_id: &str,
    bulletins: &'a [AvalancheBulletin],
) -> Option<&'a AvalancheBulletin> {
    let mut best: Option<(&AvalancheBulletin, usize)> = None;

    for bulletin in bulletins {
        let Some(matched) = matching_region(region_id, bulletin) else {
            continue;
        };
        let specificity = matched.len();
        match best {
            Some((_, current)) if current >= specificity => {}
            _ => best = Some((bulletin, specificity)),
        }
    }

    best.map(|(bulletin, _)| bulletin)
}

/// The most specific declared region ID of `bulletin` covering the query,
/// if any.
pub fn matching_region<'a>(
    region_id: &str,
    bulletin: &'a AvalancheBulletin,
) -> Option<&'a str> {
    bulletin
        .regions
        .iter()
        .map(|r| r.region_id.as_str())
        .filter(|declared| region_id.starts_with(declared))
        .max_by_key(|declared| declared.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lavina_core::Region;

    fn bulletin_for(regions: &[&str]) -> AvalancheBulletin {
        AvalancheBulletin::new(Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap())
            .with_regions(regions.iter().map(|r| Region::new(*r)).collect())
    }

    #[test]
    fn exact_match() {
        let bulletins = vec![bulletin_for(&["AT-07"])];
        assert!(find_bulletin("AT-07", &bulletins).is_some());
    }

    #[test]
    fn ancestor_covers_district() {
        let bulletins = vec![bulletin_for(&["IT-32-BZ"])];
        assert!(find_bulletin("IT-32-BZ-01", &bulletins).is_some());
        assert!(find_bulletin("IT-32-TN-01", &bulletins).is_none());
    }

    #[test]
    fn most_specific_bulletin_wins() {
        let national = bulletin_for(&["IT"]);
        let provincial = bulletin_for(&["IT-32-BZ"]);
        let bulletins = vec![national, provincial];

        let found = find_bulletin("IT-32-BZ-01", &bulletins).unwrap();
        assert_eq!(found.regions[0].region_id, "IT-32-BZ");
    }

    #[test]
    fn specificity_is_order_independent() {
        let national = bulletin_for(&["IT"]);
        let provincial = bulletin_for(&["IT-32-BZ"]);
        let bulletins = vec![provincial, national];

        let found = find_bulletin("IT-32-BZ-01", &bulletins).unwrap();
        assert_eq!(found.regions[0].region_id, "IT-32-BZ");
    }

    #[test]
    fn first_bulletin_wins_ties() {
        let first = bulletin_for(&["AT-07", "AT-08"]);
        let second = bulletin_for(&["AT-07"]);
        let bulletins = vec![first, second];

        let found = find_bulletin("AT-07-01", &bulletins).unwrap();
        assert_eq!(found.regions.len(), 2);
    }

    #[test]
    fn picks_most_specific_declared_region() {
        let bulletin = bulletin_for(&["IT", "IT-32-BZ", "IT-32"]);
        assert_eq!(matching_region("IT-32-BZ-01", &bulletin), Some("IT-32-BZ"));
    }

    #[test]
    fn no_regions_no_match() {
        let bulletins = vec![bulletin_for(&[])];
        assert!(find_bulletin("AT-07", &bulletins).is_none());
    }
}
