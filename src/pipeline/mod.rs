// The count-table pipeline, one stage per file.
//
// Data flows strictly forward:
//   cleaned tokens -> counts -> case_merge -> weight -> fuzzy -> select
// Each stage consumes the previous stage's count table and produces a
// (possibly smaller) one. Everything here is synchronous and
// single-threaded; a table lives for exactly one extraction run.

pub mod case_merge;
pub mod counts;
pub mod fuzzy;
pub mod select;
pub mod weight;

pub use case_merge::merge_case_variants;
pub use counts::{count_tokens, CountTable};
pub use fuzzy::fuzzy_merge;
pub use select::{select_top_k, Topic};
pub use weight::{apply_metadata_weight, KeywordSet};
