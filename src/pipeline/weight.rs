// Metadata Weighter: boost tokens that also appear in page metadata.
//
// The assumption is that a mention in the title or meta description
// correlates with body-text relevance but doesn't create it — so this
// stage only rescales existing keys and never inserts new ones.

use std::collections::HashSet;

use tracing::debug;

use super::counts::CountTable;

/// Normalized tokens derived from the page title and meta description.
/// Built once per run by the extractor, used only for lookup.
pub type KeywordSet = HashSet<String>;

/// Multiply the score of every table key present in `keywords` by
/// `scalar`. The scalar was validated (>= 1) at construction time.
pub fn apply_metadata_weight(table: &mut CountTable, keywords: &KeywordSet, scalar: f64) {
    let mut boosted = 0usize;
    for keyword in keywords {
        if table.get(keyword).is_some() {
            table.scale(keyword, scalar);
            boosted += 1;
        }
    }

    if boosted > 0 {
        debug!(boosted, scalar, "applied metadata weighting");
    }
}
