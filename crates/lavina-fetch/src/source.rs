//! Bulletin source trait

use std::fmt;

/// Errors that can occur when fetching a bulletin payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no bulletin published at {0}")]
    NotFound(String),

    #[error("server returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(String),
}

/// A source of raw bulletin payloads.
///
/// Implementations deliver the unparsed document for one (date, region)
/// pair; decoding and validation happen behind this boundary, in
/// lavina-caaml. The `region` is a provider-level EAWS code (`"AT-07"`),
/// not a micro-region; an empty region addresses the full collection for
/// the date.
#[async_trait::async_trait]
pub trait BulletinSource: Send + Sync {
    /// The source name, for diagnostics (e.g. "http", "mock").
    fn name(&self) -> &'static str;

    /// A human-readable locator for one payload, used in diagnostics.
    fn locate(&self, date: &str, region: &str) -> String {
        format!("{}:{}-{}", self.name(), date, region)
    }

    /// Fetch the raw payload for a date and region.
    async fn fetch_raw(&self, date: &str, region: &str) -> Result<String, FetchError>;
}

impl fmt::Debug for dyn BulletinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BulletinSource({})", self.name())
    }
}
