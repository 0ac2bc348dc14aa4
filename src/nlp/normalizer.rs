// Token normalization — raw whitespace-split words in, keyword
// candidates out.
//
// Rules, applied in order:
//   1. strip every character that isn't alphanumeric or a hyphen
//   2. drop tokens shorter than 4 characters
//   3. drop stopwords (case-insensitive exact match)
//   4. drop tokens that don't fit [0-9]*[A-Za-z-]+[0-9]*
//   5. keep only tokens the injected tagger classifies as noun-like
//
// Order and duplicates are preserved; normalizing an empty input is not
// an error. The same normalizer runs over page metadata so the keyword
// set and the body counts share one vocabulary.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::tagger::NounTagger;

/// Common words excluded regardless of frequency. An excerpt of likely
/// len >= 4 words from the most common English words; short words fall
/// to the length rule anyway.
const STOPWORDS: &[&str] = &[
    "the", "this", "that", "with", "from", "your", "have", "more", "will", "about", "other",
    "they", "what", "which", "their", "there", "only", "when", "here", "also", "would", "were",
    "some", "these", "over", "into", "should", "them", "after", "before",
];

/// Token shape rule: optional digits, a letter/hyphen core, optional digits.
static TOKEN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*[A-Za-z-]+[0-9]*$").expect("token shape pattern is valid")
});

/// Cleans raw tokens into keyword candidates.
pub struct Normalizer {
    stopwords: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Build a normalizer with the fixed stopword list.
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Build a normalizer whose stopword list is extended with the full
    /// English list from the `stop-words` crate.
    pub fn with_full_stopwords() -> Self {
        let mut normalizer = Self::new();
        for word in stop_words::get(stop_words::LANGUAGE::English) {
            normalizer.stopwords.insert(word.to_lowercase());
        }
        normalizer
    }

    /// Normalize a sequence of raw tokens, preserving order and duplicates.
    pub fn normalize<'a, I>(&self, raw: I, tagger: &dyn NounTagger) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        raw.into_iter()
            .map(strip_special_characters)
            .filter(|t| t.chars().count() >= 4)
            .filter(|t| !self.stopwords.contains(&t.to_lowercase()))
            .filter(|t| TOKEN_SHAPE.is_match(t))
            .filter(|t| tagger.tag(t).is_noun())
            .collect()
    }
}

/// Rule 1: retain alphanumerics and hyphen, drop everything else.
fn strip_special_characters(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tagger::SuffixTagger;

    fn normalize(raw: &[&str]) -> Vec<String> {
        Normalizer::new().normalize(raw.iter().copied(), &SuffixTagger)
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(normalize(&["toaster!", "(oven)", "pat;io"]), vec![
            "toaster", "oven", "patio"
        ]);
    }

    #[test]
    fn hyphens_survive() {
        assert_eq!(normalize(&["two-slice"]), vec!["two-slice"]);
    }

    #[test]
    fn short_tokens_are_dropped() {
        assert!(normalize(&["a", "an", "dog", "the"]).is_empty());
    }

    #[test]
    fn stopwords_are_dropped_case_insensitively() {
        assert!(normalize(&["their", "There", "WHICH"]).is_empty());
    }

    #[test]
    fn tokens_without_a_letter_core_are_dropped() {
        assert!(normalize(&["1234", "12345678"]).is_empty());
        assert_eq!(normalize(&["2019toaster"]), vec!["2019toaster"]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(normalize(&["patio", "garden", "patio"]), vec![
            "patio", "garden", "patio"
        ]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = [
            "Toaster!", "the", "oven?", "12", "garden", "2-slice", "patio...",
        ];
        let normalizer = Normalizer::new();
        let once = normalizer.normalize(raw.iter().copied(), &SuffixTagger);
        let twice = normalizer.normalize(once.iter().map(String::as_str), &SuffixTagger);
        assert_eq!(once, twice);
    }

    #[test]
    fn full_stopword_list_extends_the_fixed_one() {
        let normalizer = Normalizer::with_full_stopwords();
        // "because" is not in the fixed list but is in the extended one.
        let tokens = normalizer.normalize(["because", "toaster"], &SuffixTagger);
        assert_eq!(tokens, vec!["toaster"]);
    }
}
