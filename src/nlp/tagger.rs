// Part-of-speech tagging capability.
//
// The pipeline only cares about one question: is this token noun-like?
// The trait keeps the classifier swappable — tests inject a fixed-map
// double, and a smarter model can slot in without touching the stages.

/// Coarse part-of-speech label for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosTag {
    /// Whether a token with this tag survives normalization.
    pub fn is_noun(self) -> bool {
        matches!(self, Self::Noun)
    }
}

/// Capability for classifying a token's part of speech.
pub trait NounTagger: Send + Sync {
    /// Classify a single token in isolation.
    fn tag(&self, token: &str) -> PosTag;
}

/// Suffix-rule tagger — the batteries-included default.
///
/// Tokens are nouns unless a characteristic adverb, verb, or adjective
/// suffix says otherwise. Context-free suffix rules misclassify the
/// occasional word ("assembly" reads as an adverb); that is the accepted
/// cost of a deterministic, dependency-free default. Anything needing
/// real accuracy should inject a model-backed tagger instead.
pub struct SuffixTagger;

/// A suffix only counts when the stem it leaves behind is substantial.
const MIN_STEM: usize = 3;

const ADVERB_SUFFIXES: &[&str] = &["ly"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ive", "ous", "ful", "ical", "less"];

impl NounTagger for SuffixTagger {
    fn tag(&self, token: &str) -> PosTag {
        let lower = token.to_lowercase();

        if has_suffix(&lower, ADVERB_SUFFIXES) {
            PosTag::Adverb
        } else if has_suffix(&lower, VERB_SUFFIXES) {
            PosTag::Verb
        } else if has_suffix(&lower, ADJECTIVE_SUFFIXES) {
            PosTag::Adjective
        } else {
            PosTag::Noun
        }
    }
}

fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|s| word.len() >= s.len() + MIN_STEM && word.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_nouns_pass() {
        for word in ["toaster", "garden", "patio", "furniture", "oven"] {
            assert_eq!(SuffixTagger.tag(word), PosTag::Noun, "{word}");
        }
    }

    #[test]
    fn adverbs_are_rejected() {
        assert_eq!(SuffixTagger.tag("quickly"), PosTag::Adverb);
        assert_eq!(SuffixTagger.tag("cheaply"), PosTag::Adverb);
    }

    #[test]
    fn verbs_and_adjectives_are_rejected() {
        assert_eq!(SuffixTagger.tag("modernize"), PosTag::Verb);
        assert_eq!(SuffixTagger.tag("beautify"), PosTag::Verb);
        assert_eq!(SuffixTagger.tag("spacious"), PosTag::Adjective);
        assert_eq!(SuffixTagger.tag("colorful"), PosTag::Adjective);
    }

    #[test]
    fn short_words_never_trigger_suffix_rules() {
        // "only" ends in "ly" but the stem "on" is too short.
        assert_eq!(SuffixTagger.tag("only"), PosTag::Noun);
    }

    #[test]
    fn tagging_is_case_insensitive() {
        assert_eq!(SuffixTagger.tag("QUICKLY"), PosTag::Adverb);
        assert_eq!(SuffixTagger.tag("Toaster"), PosTag::Noun);
    }
}
