// Colored terminal output for extraction results.
//
// This module handles all terminal-specific formatting; main.rs
// delegates here so the library surface stays print-free.

use colored::Colorize;

use super::format_topics_line;
use crate::pipeline::Topic;

/// Print one page's topics: the URL dimmed, then the `k=..` line.
pub fn display_topics(url: &str, k: usize, topics: &[Topic]) {
    println!("{}", url.dimmed());
    println!("{}", format_topics_line(k, topics).bold());
}

/// Print a single diagnostic line for a failed URL.
pub fn display_failure(url: &str, message: &str) {
    eprintln!("{} {url}: {message}", "!!".red().bold());
}

/// Print the invalid-URL diagnostic used by the early-abort path.
pub fn display_invalid_url(url: &str) {
    eprintln!("{} {}", "Invalid URL supplied:".red().bold(), url);
}
