// Token-level language handling: normalization, part-of-speech tagging,
// and string similarity.

pub mod normalizer;
pub mod similarity;
pub mod tagger;

pub use normalizer::Normalizer;
pub use similarity::{EditDistanceSimilarity, Similarity};
pub use tagger::{NounTagger, PosTag, SuffixTagger};
