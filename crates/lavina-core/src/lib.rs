//! Lavina Core
//!
//! Canonical domain model for CAAML v6 / EAWS avalanche bulletins.
//! Provider-specific shape variants are collapsed at the parse boundary
//! (see the lavina-caaml crate) so that everything downstream of this
//! model sees one stable set of types.

pub mod aspect;
pub mod bulletin;
pub mod config;
pub mod elevation;
pub mod problem;
pub mod rating;
pub mod scale;
pub mod timestamp;

pub use aspect::{Aspect, COMPASS_ROSE};
pub use bulletin::{
    AvalancheBulletin, AvalancheBulletins, ExternalFile, MetaData, Person, Provider, Region,
    Source, Tendency, TendencyType, Texts, ValidTime,
};
pub use config::{Config, ConfigError};
pub use elevation::{ElevationBound, ElevationBoundaryOrBand};
pub use problem::{AvalancheFrequency, AvalancheProblem, AvalancheProblemType, SnowpackStability};
pub use rating::{DangerRating, DangerRatingValue, ValidTimePeriod};
pub use scale::{ScaleEntry, WARN_LEVEL_COLORS};
