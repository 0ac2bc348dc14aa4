// String similarity capability for near-duplicate detection.

/// Capability scoring how close two tokens are, in [0,100].
pub trait Similarity: Send + Sync {
    /// Similarity ratio between `a` and `b`; 100 means identical.
    fn ratio(&self, a: &str, b: &str) -> u32;
}

/// Edit-distance ratio over the combined length of both tokens.
///
/// ratio = round(100 * (1 - levenshtein(a, b) / (|a| + |b|)))
///
/// For the insert/delete-only pairs this pipeline cares about
/// ("toaster" vs "toasters") this matches the classic sequence-matcher
/// ratio; substitution-heavy pairs score slightly higher, which is
/// harmless at the thresholds in use (around 90).
pub struct EditDistanceSimilarity;

impl Similarity for EditDistanceSimilarity {
    fn ratio(&self, a: &str, b: &str) -> u32 {
        let total = a.chars().count() + b.chars().count();
        if total == 0 {
            return 100;
        }
        let distance = strsim::levenshtein(a, b).min(total);
        let ratio = 100.0 * (total - distance) as f64 / total as f64;
        ratio.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_tokens_score_100() {
        assert_eq!(EditDistanceSimilarity.ratio("toaster", "toaster"), 100);
    }

    #[test]
    fn plural_variant_clears_the_default_threshold() {
        // 15 characters total, one edit: 100 * 14/15 rounds to 93.
        assert_eq!(EditDistanceSimilarity.ratio("toasters", "toaster"), 93);
    }

    #[test]
    fn unrelated_tokens_score_low() {
        assert!(EditDistanceSimilarity.ratio("toaster", "garden") < 50);
    }

    #[test]
    fn ratio_is_symmetric() {
        let s = EditDistanceSimilarity;
        assert_eq!(s.ratio("toast", "toaster"), s.ratio("toaster", "toast"));
    }

    #[test]
    fn empty_tokens_are_identical() {
        assert_eq!(EditDistanceSimilarity.ratio("", ""), 100);
    }
}
