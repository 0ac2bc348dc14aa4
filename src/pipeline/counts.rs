// The count table and the frequency-counting stage.

use std::collections::BTreeMap;

/// Token-to-score table threaded through the pipeline stages.
///
/// Scores start as whole occurrence counts and become fractional once
/// the metadata weighter applies its scalar. Backed by a `BTreeMap` so
/// every observation of key order — the case-merge variant scan, the
/// fuzzy-merge snapshot, the heap feed — is deterministic, which is what
/// makes two identical runs produce byte-identical output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountTable {
    entries: BTreeMap<String, f64>,
}

impl CountTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score for `token`, if present.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Add `amount` to `token`'s score, inserting it at zero first if absent.
    pub fn add(&mut self, token: &str, amount: f64) {
        *self.entries.entry(token.to_string()).or_insert(0.0) += amount;
    }

    /// Multiply `token`'s score by `factor`; no-op when the token is absent.
    pub fn scale(&mut self, token: &str, factor: f64) {
        if let Some(score) = self.entries.get_mut(token) {
            *score *= factor;
        }
    }

    /// Remove `token`, returning its score.
    pub fn remove(&mut self, token: &str) -> Option<f64> {
        self.entries.remove(token)
    }

    /// Keys in sorted (deterministic) order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// (token, score) pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of all scores; conserved by both merge stages.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl FromIterator<(String, f64)> for CountTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Frequency Counter: count occurrences of each distinct cleaned token.
/// Pure aggregation — all filtering already happened in the normalizer.
pub fn count_tokens<S: AsRef<str>>(tokens: &[S]) -> CountTable {
    let mut table = CountTable::new();
    for token in tokens {
        table.add(token.as_ref(), 1.0);
    }
    table
}
