// Result rendering — terminal lines and the JSON mode.

pub mod terminal;

use serde::Serialize;

use crate::pipeline::Topic;

/// One extraction result, as serialized by `--json`.
#[derive(Debug, Serialize)]
pub struct TopicsReport<'a> {
    pub url: &'a str,
    pub k: usize,
    pub topics: &'a [Topic],
}

/// The classic one-line rendering: `k=5: [garden, patio]`.
pub fn format_topics_line(k: usize, topics: &[Topic]) -> String {
    let tokens: Vec<&str> = topics.iter().map(|t| t.token.as_str()).collect();
    format!("k={}: [{}]", k, tokens.join(", "))
}

/// Serialize one result as a single JSON line.
pub fn json_line(url: &str, k: usize, topics: &[Topic]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&TopicsReport { url, k, topics })?)
}
