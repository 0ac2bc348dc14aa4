// Fuzzy Merger: consolidate near-duplicate spellings that survived
// normalization and case merging ("toast", "toasts", "toaster").
//
// All unordered key pairs from a fixed snapshot are compared; pairs
// above the threshold are recorded and then applied strictly in
// discovery order. A token already removed as a loser disqualifies any
// later pair naming it — as winner or loser — so grouping is
// deterministic but NOT transitive: when a token qualifies against
// several partners, discovery order decides where its count lands.
// That order sensitivity is inherited, documented behavior.
//
// Cost: O(m^2) similarity evaluations over m distinct tokens. This
// dominates the run for vocabularies beyond a few hundred tokens;
// callers with huge pages should trim the vocabulary first.

use std::collections::HashSet;

use tracing::debug;

use super::counts::CountTable;
use crate::nlp::Similarity;

/// An ordered (winner, loser) pair whose similarity cleared the threshold.
/// The longer token wins; on equal lengths the later-snapshot-indexed
/// token wins, which keeps the choice deterministic.
type SimilarityPair = (String, String);

/// Merge near-duplicate tokens in place. Total score is conserved.
pub fn fuzzy_merge(table: &mut CountTable, similarity: &dyn Similarity, threshold: u32) {
    let snapshot: Vec<String> = table.keys().cloned().collect();

    let mut pairs: Vec<SimilarityPair> = Vec::new();
    for i in 0..snapshot.len() {
        for j in (i + 1)..snapshot.len() {
            let (earlier, later) = (&snapshot[i], &snapshot[j]);
            if similarity.ratio(earlier, later) > threshold {
                let pair = if earlier.chars().count() > later.chars().count() {
                    (earlier.clone(), later.clone())
                } else {
                    (later.clone(), earlier.clone())
                };
                pairs.push(pair);
            }
        }
    }

    let mut consumed: HashSet<String> = HashSet::new();
    let mut merged = 0usize;
    for (winner, loser) in pairs {
        if consumed.contains(&winner) || consumed.contains(&loser) {
            continue;
        }
        if let Some(count) = table.remove(&loser) {
            table.add(&winner, count);
            consumed.insert(loser);
            merged += 1;
        }
    }

    if merged > 0 {
        debug!(merged, remaining = table.len(), "merged near-duplicates");
    }
}
