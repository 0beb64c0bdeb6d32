//! Slope aspects (compass octants)

use serde::{Deserialize, Serialize};

/// A slope aspect as an eight-part (45°) compass segment.
///
/// The allowed aspects are the four cardinal and the four intercardinal
/// directions, plus the `"n/a"` sentinel some providers emit when an
/// element is not aspect-constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    #[serde(rename = "n/a")]
    NotAvailable,
}

/// The eight octants in compass order, starting at north.
///
/// This ordering is the canonical one for circular-arc scans over aspect
/// sets; it is treated cyclically by consumers.
pub const COMPASS_ROSE: [Aspect; 8] = [
    Aspect::N,
    Aspect::NE,
    Aspect::E,
    Aspect::SE,
    Aspect::S,
    Aspect::SW,
    Aspect::W,
    Aspect::NW,
];

impl Aspect {
    /// Get the aspect as its stable string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
            Self::NotAvailable => "n/a",
        }
    }

    /// Whether this is a real compass octant rather than the `"n/a"` sentinel.
    pub fn is_octant(&self) -> bool {
        !matches!(self, Self::NotAvailable)
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
