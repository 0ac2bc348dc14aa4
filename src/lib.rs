// Gist: topic keyword extraction for web pages.
//
// This is the library root. Each module corresponds to one subsystem of
// the extraction pipeline.

pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod nlp;
pub mod output;
pub mod page;
pub mod pipeline;
