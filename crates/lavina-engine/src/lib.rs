//! Lavina engine - bulletin resolution logic
//!
//! This crate implements the resolution core over validated bulletins:
//! - Region matching (hierarchical region-ID containment)
//! - Danger-rating resolution per elevation class
//! - Aspect-range compaction
//! - Max-danger-ratings map construction
//!
//! Everything here is pure and total: bulletins are immutable inputs,
//! resolution never fails, and malformed edge cases resolve to the
//! "no rating" ordinal rather than erroring.

pub mod aspects;
pub mod ratings_map;
pub mod region;
pub mod resolve;

pub use aspects::{compact, AspectDisplay};
pub use ratings_map::{max_danger_ratings, RegionQuery};
pub use region::{find_bulletin, matching_region};
pub use resolve::{ratings_for_period, resolve, ElevationClass};
