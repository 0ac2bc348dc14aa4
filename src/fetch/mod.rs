// Page fetching — the one blocking operation in an extraction run.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;

/// Capability for turning a URL into raw page text.
///
/// Implementations must be async because the default is an HTTP call;
/// tests inject a deterministic double instead.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw body of `url`, or fail with `Error::Fetch`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
