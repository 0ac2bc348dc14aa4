// Top-K Selector: pick the k highest-scoring tokens with a bounded
// min-heap.
//
// The heap never holds more than k entries: while under capacity every
// entry is inserted, after that an entry only displaces the current
// minimum if its score is strictly greater. Boundary ties keep whichever
// entry arrived first — implementation-defined, not a stability
// guarantee across differing input orders.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use super::counts::CountTable;
use crate::error::{Error, Result};

/// A selected topic: token plus its final pipeline score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub token: String,
    pub score: f64,
}

/// Heap entry ordered by score, then token — total ordering keeps heap
/// behavior deterministic even though boundary ties are arbitrary from
/// the caller's point of view.
#[derive(Debug)]
struct HeapEntry {
    score: f64,
    token: String,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.token.cmp(&other.token))
    }
}

/// Select the `k` highest-scoring tokens from the final count table.
///
/// Fails with `Error::InsufficientTokens` when fewer than `k` distinct
/// tokens remain — callers wanting partial results must request a
/// smaller k. The returned entries are in ascending score order, as
/// drained from the heap; `TopicExtractor::extract` reverses them so the
/// public contract is descending by score.
pub fn select_top_k(table: &CountTable, k: usize) -> Result<Vec<Topic>> {
    if table.len() < k {
        return Err(Error::InsufficientTokens {
            available: table.len(),
            requested: k,
        });
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::with_capacity(k);
    for (token, score) in table.iter() {
        if heap.len() < k {
            heap.push(Reverse(HeapEntry {
                score,
                token: token.clone(),
            }));
        } else if let Some(Reverse(min)) = heap.peek() {
            if score > min.score {
                heap.pop();
                heap.push(Reverse(HeapEntry {
                    score,
                    token: token.clone(),
                }));
            }
        }
    }

    let mut topics = Vec::with_capacity(k);
    while let Some(Reverse(entry)) = heap.pop() {
        topics.push(Topic {
            token: entry.token,
            score: entry.score,
        });
    }
    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> CountTable {
        entries
            .iter()
            .map(|(t, s)| (t.to_string(), *s))
            .collect()
    }

    #[test]
    fn returns_exactly_k_entries() {
        let counts = table(&[("a-aa", 1.0), ("b-bb", 5.0), ("c-cc", 3.0), ("d-dd", 4.0)]);
        let topics = select_top_k(&counts, 2).unwrap();
        assert_eq!(topics.len(), 2);
    }

    #[test]
    fn picks_the_highest_scores_ascending() {
        let counts = table(&[("oven", 1.0), ("patio", 5.0), ("garden", 3.0)]);
        let topics = select_top_k(&counts, 2).unwrap();
        assert_eq!(topics[0].token, "garden");
        assert_eq!(topics[0].score, 3.0);
        assert_eq!(topics[1].token, "patio");
        assert_eq!(topics[1].score, 5.0);
    }

    #[test]
    fn k_equal_to_table_size_returns_everything() {
        let counts = table(&[("oven", 1.0), ("patio", 5.0)]);
        let topics = select_top_k(&counts, 2).unwrap();
        assert_eq!(topics.len(), 2);
    }

    #[test]
    fn insufficient_tokens_is_an_error() {
        // 2 distinct tokens, k = 5
        let counts = table(&[("oven", 1.0), ("patio", 5.0)]);
        let err = select_top_k(&counts, 5).unwrap_err();
        match err {
            Error::InsufficientTokens {
                available,
                requested,
            } => {
                assert_eq!(available, 2);
                assert_eq!(requested, 5);
            }
            other => panic!("expected InsufficientTokens, got {other:?}"),
        }
    }

    #[test]
    fn fractional_scores_are_ranked_correctly() {
        let counts = table(&[("oven", 4.0), ("toaster", 7.5), ("tray", 4.5)]);
        let topics = select_top_k(&counts, 2).unwrap();
        assert_eq!(topics[0].token, "tray");
        assert_eq!(topics[1].token, "toaster");
    }

    #[test]
    fn empty_table_with_k_zero_returns_empty() {
        let topics = select_top_k(&CountTable::new(), 0).unwrap();
        assert!(topics.is_empty());
    }
}
