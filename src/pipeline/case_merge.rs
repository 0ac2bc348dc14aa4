// Case Merger: fold an all-lowercase twin into its capitalized variant.
//
// A token containing any uppercase letter is assumed to be the canonical
// spelling (a brand name, say), and a separate all-lowercase entry is
// more often the same word starting a sentence. Only the exact lowercase
// twin folds in: "TOASTER", "Toaster", and "toaster" all present do NOT
// fully unify — each uppercase variant absorbs the single "toaster"
// entry at most once. Known limitation, kept on purpose.

use tracing::debug;

use super::counts::CountTable;

/// Merge each uppercase-containing variant with its exact all-lowercase
/// twin, relocating the twin's score. Total score is conserved.
pub fn merge_case_variants(table: &mut CountTable) {
    let variants: Vec<String> = table
        .keys()
        .filter(|t| t.chars().any(char::is_uppercase))
        .cloned()
        .collect();

    let mut merged = 0usize;
    for variant in variants {
        let lower = variant.to_lowercase();
        if let Some(count) = table.remove(&lower) {
            table.add(&variant, count);
            merged += 1;
        }
    }

    if merged > 0 {
        debug!(merged, remaining = table.len(), "folded lowercase twins");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::counts::count_tokens;

    #[test]
    fn lowercase_twin_folds_into_variant() {
        // {Toaster:3, toaster:2} -> {Toaster:5}
        let mut table = count_tokens(&["Toaster", "Toaster", "Toaster", "toaster", "toaster"]);
        merge_case_variants(&mut table);
        assert_eq!(table.get("Toaster"), Some(5.0));
        assert_eq!(table.get("toaster"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn variant_without_twin_is_untouched() {
        let mut table = count_tokens(&["Amazon", "garden"]);
        merge_case_variants(&mut table);
        assert_eq!(table.get("Amazon"), Some(1.0));
        assert_eq!(table.get("garden"), Some(1.0));
    }

    #[test]
    fn multiple_cased_spellings_are_not_fully_unified() {
        let mut table = count_tokens(&["TOASTER", "Toaster", "toaster"]);
        merge_case_variants(&mut table);
        // One variant absorbed the lowercase twin; the other variant stays.
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("toaster"), None);
        assert_eq!(table.total(), 3.0);
    }

    #[test]
    fn total_score_is_conserved() {
        let mut table = count_tokens(&["Patio", "patio", "patio", "Garden", "garden", "oven"]);
        let before = table.total();
        merge_case_variants(&mut table);
        assert_eq!(table.total(), before);
    }

    #[test]
    fn all_lowercase_table_is_a_no_op() {
        let mut table = count_tokens(&["garden", "patio"]);
        let snapshot = table.clone();
        merge_case_variants(&mut table);
        assert_eq!(table, snapshot);
    }
}
