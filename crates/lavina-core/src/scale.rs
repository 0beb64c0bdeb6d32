//! EAWS severity scale table
//!
//! Immutable mapping from the seven danger-rating identifiers to an ordinal
//! warn level (0-5), a display color, and the canonical hazard-scale
//! description text. Built once, shared read-only by all resolution calls.

use crate::rating::DangerRatingValue;

/// One row of the severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleEntry {
    /// The rating identifier this entry describes.
    pub id: DangerRatingValue,

    /// Ordinal severity, 0-5. Used for comparison and map fill.
    pub warn_level: u8,

    /// Display color for the rating itself.
    pub color: &'static str,

    /// Canonical EAWS hazard-scale description.
    ///
    /// Empty for the two unnumbered levels (`no_rating`, `no_snow`).
    /// <https://www.avalanches.org/standards/avalanche-danger-scale/>
    pub text: &'static str,
}

/// Fill colors by warn level (0-5) for map rendering.
pub const WARN_LEVEL_COLORS: [&str; 6] = [
    "#ffffff", "#ccff66", "#ffff00", "#ff9900", "#ff0000", "#000000",
];

static SCALE: [ScaleEntry; 7] = [
    ScaleEntry {
        id: DangerRatingValue::NoRating,
        warn_level: 0,
        color: "#cccccc",
        text: "",
    },
    ScaleEntry {
        id: DangerRatingValue::NoSnow,
        warn_level: 0,
        color: "#cccccc",
        text: "",
    },
    ScaleEntry {
        id: DangerRatingValue::Low,
        warn_level: 1,
        color: "#ccff66",
        text: "Triggering is generally possible only from high additional loads in isolated areas of very steep, extreme terrain. Only small and medium natural avalanches are possible.",
    },
    ScaleEntry {
        id: DangerRatingValue::Moderate,
        warn_level: 2,
        color: "#ffff00",
        text: "Triggering is possible, primarily from high additional loads, particularly on the indicated steep slopes. Very large natural avalanches are unlikely.",
    },
    ScaleEntry {
        id: DangerRatingValue::Considerable,
        warn_level: 3,
        color: "#ff9900",
        text: "Triggering is possible, even from low additional loads, particularly on the indicated steep slopes. In certain situations some large, and in isolated cases very large natural avalanches are possible.",
    },
    ScaleEntry {
        id: DangerRatingValue::High,
        warn_level: 4,
        color: "#ff0000",
        text: "Triggering is likely, even from low additional loads, on many steep slopes. In some cases, numerous large and often very large natural avalanches can be expected.",
    },
    ScaleEntry {
        id: DangerRatingValue::VeryHigh,
        warn_level: 5,
        color: "#000000",
        text: "Numerous very large and often extremely large natural avalanches can be expected, even in moderately steep terrain.",
    },
];

impl DangerRatingValue {
    /// Look up this rating's severity scale entry.
    pub fn scale(self) -> &'static ScaleEntry {
        let index = match self {
            Self::NoRating => 0,
            Self::NoSnow => 1,
            Self::Low => 2,
            Self::Moderate => 3,
            Self::Considerable => 4,
            Self::High => 5,
            Self::VeryHigh => 6,
        };
        &SCALE[index]
    }

    /// The rating's ordinal warn level (0-5).
    pub fn warn_level(self) -> u8 {
        self.scale().warn_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(DangerRatingValue::NoRating.warn_level(), 0);
        assert_eq!(DangerRatingValue::NoSnow.warn_level(), 0);
        assert_eq!(DangerRatingValue::Low.warn_level(), 1);
        assert_eq!(DangerRatingValue::Moderate.warn_level(), 2);
        assert_eq!(DangerRatingValue::Considerable.warn_level(), 3);
        assert_eq!(DangerRatingValue::High.warn_level(), 4);
        assert_eq!(DangerRatingValue::VeryHigh.warn_level(), 5);
    }

    #[test]
    fn entries_are_self_describing() {
        for value in DangerRatingValue::ALL {
            assert_eq!(value.scale().id, value);
        }
    }

    #[test]
    fn unnumbered_levels_have_no_text() {
        assert!(DangerRatingValue::NoRating.scale().text.is_empty());
        assert!(DangerRatingValue::NoSnow.scale().text.is_empty());
        assert!(!DangerRatingValue::Low.scale().text.is_empty());
    }

    #[test]
    fn warn_level_colors_cover_all_ordinals() {
        for value in DangerRatingValue::ALL {
            let _ = WARN_LEVEL_COLORS[value.warn_level() as usize];
        }
    }
}
