use anyhow::Result;
use clap::Parser;
use tracing::warn;

use gist::config::Config;
use gist::error::Error;
use gist::extractor::TopicExtractor;
use gist::fetch::http::HttpFetcher;
use gist::nlp::{EditDistanceSimilarity, SuffixTagger};
use gist::output;
use gist::page::dom::DomParser;

/// Gist: topic keyword extraction for web pages.
///
/// Fetches each URL, strips markup, and reports the k most
/// representative noun keywords by weighted frequency.
#[derive(Parser)]
#[command(name = "gist", version, about)]
struct Cli {
    /// URLs to extract topics from
    urls: Vec<String>,

    /// Number of topics to select per page
    #[arg(short = 'k', long = "topics")]
    topics: Option<usize>,

    /// Score multiplier for tokens also present in page metadata (>= 1)
    #[arg(long)]
    scalar: Option<f64>,

    /// Similarity ratio above which near-duplicate tokens merge (0-100)
    #[arg(long)]
    threshold: Option<u32>,

    /// Emit one JSON object per URL instead of the k=.. line
    #[arg(long)]
    json: bool,

    /// Skip URLs that fail to fetch instead of aborting the whole batch
    #[arg(long)]
    keep_going: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gist=info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.urls.is_empty() {
        println!("Usage: gist [OPTIONS] <URL>...");
        println!("Provide at least one URL to extract topics from.");
        println!("Run `gist --help` for the full option list.");
        return Ok(());
    }

    // Env-backed defaults, overridden by CLI flags. Validation happens
    // in TopicExtractor::new, before any fetch.
    let mut config = Config::load()?;
    if let Some(k) = cli.topics {
        config.topic_count = k;
    }
    if let Some(scalar) = cli.scalar {
        config.keyword_scalar = scalar;
    }
    if let Some(threshold) = cli.threshold {
        config.similarity_threshold = threshold;
    }

    let k = config.topic_count;
    let extractor = TopicExtractor::new(
        config,
        Box::new(HttpFetcher::new()?),
        Box::new(DomParser::new()?),
        Box::new(SuffixTagger),
        Box::new(EditDistanceSimilarity),
    )?;

    for url in &cli.urls {
        match extractor.extract(url).await {
            Ok(topics) => {
                if cli.json {
                    println!("{}", output::json_line(url, k, &topics)?);
                } else {
                    output::terminal::display_topics(url, k, &topics);
                }
            }
            Err(Error::Fetch { reason, .. }) => {
                output::terminal::display_invalid_url(url);
                warn!(url, reason, "fetch failed");
                if !cli.keep_going {
                    // A bad URL aborts the remaining batch unless
                    // --keep-going was passed.
                    break;
                }
            }
            Err(e) => {
                // Insufficient tokens (or any other per-URL failure)
                // fails this URL only; the batch continues.
                output::terminal::display_failure(url, &e.to_string());
            }
        }
    }

    Ok(())
}
