// Error taxonomy for the extraction pipeline.
//
// Three kinds, surfaced to the caller without implicit recovery:
// configuration problems fail before any network or text work begins,
// fetch failures belong to the URL that caused them, and a top-k request
// larger than the surviving vocabulary fails that extraction rather than
// silently returning fewer topics.

use thiserror::Error;

/// Errors produced by the extraction pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration, caught at construction time.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The fetch collaborator could not resolve or reach the URL.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Fewer distinct tokens survived the merge stages than were requested.
    #[error("{requested} topics requested but only {available} distinct tokens remain after merging")]
    InsufficientTokens { available: usize, requested: usize },
}

/// Convenience alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
