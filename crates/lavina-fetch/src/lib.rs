//! Bulletin fetching
//!
//! The resolution core never issues network calls; this crate is the
//! collaborator seam that supplies raw payloads to the validation
//! boundary. Each region is fetched independently, so one provider's
//! outage degrades that provider's regions and nothing else.

pub mod loader;
pub mod mock;
pub mod source;

#[cfg(feature = "http")]
pub mod http;

pub use loader::load_bulletins;
pub use mock::MockSource;
pub use source::{BulletinSource, FetchError};

#[cfg(feature = "http")]
pub use http::HttpSource;
