//! Aspect-range compaction
//!
//! Professional bulletins abbreviate an affected-aspect set as one
//! contiguous arc of the compass rose: "from NW through N to SE". This
//! module isolates that arc from an unordered aspect subset and renders
//! either the literal member list or a 3-point rotation abbreviation,
//! matching the conventional notation.

use lavina_core::{Aspect, COMPASS_ROSE};

/// Rotation glyph joining the points of an arc abbreviation.
pub const ROTATION_GLYPH: &str = "↷";

/// Cardinal directions in the fixed priority used for the middle point of
/// an arc abbreviation.
const CARDINAL_PRIORITY: [Aspect; 4] = [Aspect::N, Aspect::S, Aspect::W, Aspect::E];

/// The display form of an aspect set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AspectDisplay {
    /// No displayable aspects (empty or `n/a`-only input).
    Empty,

    /// Few aspects: the literal member list, in input order.
    List(Vec<Aspect>),

    /// A wide arc: 3-point "rotate from `from` through `via` to `to`"
    /// abbreviation. `members` keeps the full input set for tooltips.
    Arc {
        from: Aspect,
        via: Aspect,
        to: Aspect,
        members: Vec<Aspect>,
    },
}

impl AspectDisplay {
    /// The full member list, comma-separated. Tooltip text for the
    /// abbreviated form; identical to the display text for the list form.
    pub fn title(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::List(members) | Self::Arc { members, .. } => join(members),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl std::fmt::Display for AspectDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::List(members) => write!(f, "{}", join(members)),
            Self::Arc { from, via, to, .. } => {
                write!(f, "{from}{ROTATION_GLYPH}{via}{ROTATION_GLYPH}{to}")
            }
        }
    }
}

fn join(members: &[Aspect]) -> String {
    members
        .iter()
        .map(Aspect::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Compact an unordered aspect subset into its display form.
///
/// The contiguous circular arc covered by the set is found by scanning a
/// doubled compass rose: skip the initial run of members, skip the
/// following run of non-members, then take the maximal member run. The
/// doubling lets an arc that wraps past NW→N be picked up whole,
/// regardless of where on the rose it starts.
///
/// An arc longer than 3 octants renders as the 3-point abbreviation
/// (first endpoint, the first cardinal member in `N,S,W,E` priority
/// order, last endpoint); anything shorter renders as the literal list.
/// A set covering the whole rose is treated as an arc starting at north.
pub fn compact(aspects: &[Aspect]) -> AspectDisplay {
    let mut members: Vec<Aspect> = Vec::new();
    for aspect in aspects.iter().copied().filter(Aspect::is_octant) {
        if !members.contains(&aspect) {
            members.push(aspect);
        }
    }
    if members.is_empty() {
        return AspectDisplay::Empty;
    }

    let is_member = |aspect: &Aspect| members.contains(aspect);

    let doubled: Vec<Aspect> = COMPASS_ROSE
        .iter()
        .chain(COMPASS_ROSE.iter())
        .copied()
        .collect();

    let rest = drop_while(&doubled, is_member);
    let rest = drop_while(rest, |aspect| !is_member(aspect));
    let arc = take_while(rest, is_member);

    // only a set covering the whole rose leaves the scan empty-handed
    let arc: &[Aspect] = if arc.is_empty() { &COMPASS_ROSE } else { arc };

    if arc.len() > 3 {
        let endpoints = (arc.first(), arc.last());
        let via = CARDINAL_PRIORITY.iter().find(|&c| is_member(c));
        if let ((Some(&from), Some(&to)), Some(&via)) = (endpoints, via) {
            return AspectDisplay::Arc {
                from,
                via,
                to,
                members,
            };
        }
    }

    AspectDisplay::List(members)
}

fn drop_while<'a>(slice: &'a [Aspect], predicate: impl Fn(&Aspect) -> bool) -> &'a [Aspect] {
    let start = slice.iter().position(|a| !predicate(a)).unwrap_or(slice.len());
    &slice[start..]
}

fn take_while<'a>(slice: &'a [Aspect], predicate: impl Fn(&Aspect) -> bool) -> &'a [Aspect] {
    let end = slice.iter().position(|a| !predicate(a)).unwrap_or(slice.len());
    &slice[..end]
}
