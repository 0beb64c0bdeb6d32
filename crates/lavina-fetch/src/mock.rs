//! Mock bulletin source for testing
//!
//! Returns predefined payloads without any network access, and can
//! simulate the failure modes real providers exhibit: a region whose
//! server is down, a missing document, or a fully unreachable source.

use std::collections::{HashMap, HashSet};

use crate::source::{BulletinSource, FetchError};

/// Mock bulletin source backed by in-memory payloads.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockSource::new()
///     .with_payload("2024-01-15", "AT-07", payload)
///     .with_failing_region("CH");
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    /// Payloads by (date, region).
    payloads: HashMap<(String, String), String>,

    /// Regions whose fetches fail with a network error.
    failing_regions: HashSet<String>,

    /// Fail every fetch, as if the source were unreachable.
    unreachable: bool,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for a (date, region) pair.
    pub fn with_payload(
        mut self,
        date: impl Into<String>,
        region: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        self.payloads
            .insert((date.into(), region.into()), payload.into());
        self
    }

    /// Simulate a provider outage for one region.
    pub fn with_failing_region(mut self, region: impl Into<String>) -> Self {
        self.failing_regions.insert(region.into());
        self
    }

    /// Simulate a fully unreachable source.
    pub fn with_connection_failure(mut self) -> Self {
        self.unreachable = true;
        self
    }
}

#[async_trait::async_trait]
impl BulletinSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_raw(&self, date: &str, region: &str) -> Result<String, FetchError> {
        if self.unreachable {
            return Err(FetchError::Network("mock source unreachable".into()));
        }
        if self.failing_regions.contains(region) {
            return Err(FetchError::Network(format!(
                "mock outage for region {region}"
            )));
        }
        self.payloads
            .get(&(date.to_string(), region.to_string()))
            .cloned()
            .ok_or_else(|| FetchError::NotFound(self.locate(date, region)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_registered_payloads() {
        let source = MockSource::new().with_payload("2024-01-15", "AT-07", "{}");

        let payload = source.fetch_raw("2024-01-15", "AT-07").await.unwrap();
        assert_eq!(payload, "{}");
    }

    #[tokio::test]
    async fn missing_documents_are_not_found() {
        let source = MockSource::new();
        let err = source.fetch_raw("2024-01-15", "AT-07").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(_)));
    }

    #[tokio::test]
    async fn failing_region_is_a_network_error() {
        let source = MockSource::new()
            .with_payload("2024-01-15", "CH", "{}")
            .with_failing_region("CH");

        let err = source.fetch_raw("2024-01-15", "CH").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn connection_failure_beats_everything() {
        let source = MockSource::new()
            .with_payload("2024-01-15", "AT-07", "{}")
            .with_connection_failure();

        assert!(source.fetch_raw("2024-01-15", "AT-07").await.is_err());
    }
}
