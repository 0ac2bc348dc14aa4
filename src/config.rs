use std::env;

use crate::error::{Error, Result};

/// Default number of topics selected per page.
pub const DEFAULT_TOPIC_COUNT: usize = 5;
/// Default multiplier applied to tokens that also appear in page metadata.
pub const DEFAULT_KEYWORD_SCALAR: f64 = 1.5;
/// Default similarity ratio (in [0,100]) above which two tokens merge.
pub const DEFAULT_SIMILARITY_THRESHOLD: u32 = 90;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override whatever the environment provided; validation runs once, at
/// extractor construction, before any network or text work begins.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many topics to select per page (k).
    pub topic_count: usize,
    /// Multiplier for tokens that also appear in the page title or
    /// meta description. Must be >= 1.
    pub keyword_scalar: f64,
    /// Similarity ratio above which two tokens are considered
    /// near-duplicates and merged. Must be <= 100.
    pub similarity_threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic_count: DEFAULT_TOPIC_COUNT,
            keyword_scalar: DEFAULT_KEYWORD_SCALAR,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so an empty environment is valid.
    /// A present-but-unparseable variable is a configuration error rather
    /// than a silent fallback.
    pub fn load() -> Result<Self> {
        Ok(Self {
            topic_count: parse_var("GIST_TOPIC_COUNT", DEFAULT_TOPIC_COUNT)?,
            keyword_scalar: parse_var("GIST_KEYWORD_SCALAR", DEFAULT_KEYWORD_SCALAR)?,
            similarity_threshold: parse_var(
                "GIST_SIMILARITY_THRESHOLD",
                DEFAULT_SIMILARITY_THRESHOLD,
            )?,
        })
    }

    /// Check that every setting is in its valid range.
    ///
    /// Called by `TopicExtractor::new` so a bad scalar fails the run
    /// before any fetch happens.
    pub fn validate(&self) -> Result<()> {
        if self.topic_count < 1 {
            return Err(Error::Configuration(
                "the topic count (k) must be at least 1".to_string(),
            ));
        }
        if self.keyword_scalar < 1.0 {
            return Err(Error::Configuration(format!(
                "the keyword scalar factor can't be less than 1 (got {})",
                self.keyword_scalar
            )));
        }
        if self.similarity_threshold > 100 {
            return Err(Error::Configuration(format!(
                "the similarity threshold must be in 0..=100 (got {})",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

/// Read an env var, falling back to `default` when unset and failing
/// with a configuration error when set but unparseable.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::Configuration(format!("{name} has an invalid value: {raw:?}"))),
        Err(_) => Ok(default),
    }
}
