// HTTP page fetcher — a thin reqwest wrapper.
//
// Malformed URLs (no scheme) are rejected here, before any network I/O,
// so the CLI can report them as invalid input rather than a transport
// failure. Timeout and retry policy belong to this collaborator, not to
// the pipeline; neither is applied beyond reqwest's defaults.

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use super::Fetcher;
use crate::error::{Error, Result};

/// Fetches page text over HTTP(S) with a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the crate's user agent.
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("gist/0.1 (topic-extraction)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        // A scheme-less argument never reaches the network.
        let parsed = reqwest::Url::parse(url).map_err(|e| Error::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Fetch {
                url: url.to_string(),
                reason: format!("unsupported URL scheme: {}", parsed.scheme()),
            });
        }

        debug!(url = url, "GET page");

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                reason: format!("server returned {}", response.status()),
            });
        }

        response.text().await.map_err(|e| Error::Fetch {
            url: url.to_string(),
            reason: format!("failed to read response body: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scheme_less_url_fails_before_any_io() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("example.com/toasters").await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[tokio::test]
    async fn non_http_scheme_is_rejected() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("ftp://example.com/").await.unwrap_err();
        match err {
            Error::Fetch { reason, .. } => assert!(reason.contains("scheme")),
            other => panic!("expected a fetch error, got {other:?}"),
        }
    }
}
