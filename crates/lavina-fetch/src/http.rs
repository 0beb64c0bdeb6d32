//! HTTP bulletin source

use crate::source::{BulletinSource, FetchError};

/// Fetches bulletin documents from a static bulletin server.
///
/// The server publishes one JSON document per (date, region) pair under
/// `{base}/{date}/{date}-{region}.json`; the region-less spelling
/// `{base}/{date}/{date}.json` addresses the full collection.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source against a bulletin server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, date: &str, region: &str) -> String {
        if region.is_empty() {
            format!("{}/{date}/{date}.json", self.base_url)
        } else {
            format!("{}/{date}/{date}-{region}.json", self.base_url)
        }
    }
}

#[async_trait::async_trait]
impl BulletinSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn locate(&self, date: &str, region: &str) -> String {
        self.url(date, region)
    }

    async fn fetch_raw(&self, date: &str, region: &str) -> Result<String, FetchError> {
        let url = self.url(date, region);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_scheme() {
        let source = HttpSource::new("https://bulletins.test/eaws_bulletins");
        assert_eq!(
            source.url("2024-01-15", "AT-07"),
            "https://bulletins.test/eaws_bulletins/2024-01-15/2024-01-15-AT-07.json"
        );
        assert_eq!(
            source.url("2024-01-15", ""),
            "https://bulletins.test/eaws_bulletins/2024-01-15/2024-01-15.json"
        );
    }
}
