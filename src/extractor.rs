// The extraction run — wires the capabilities through the pipeline.
//
// One extractor serves many URLs, but each `extract` call builds its
// count table from scratch: no caching, no cross-URL state. A run either
// completes with exactly k topics or fails with one of the three typed
// errors.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::nlp::{NounTagger, Normalizer, Similarity};
use crate::page::MarkupParser;
use crate::pipeline::{
    apply_metadata_weight, count_tokens, fuzzy_merge, merge_case_variants, select_top_k,
    KeywordSet, Topic,
};

/// Runs the full pipeline for a URL over injected collaborators.
///
/// The collaborators (fetch, markup stripping, noun tagging, string
/// similarity) are trait objects so tests can use deterministic doubles
/// instead of live network and NLP calls.
pub struct TopicExtractor {
    config: Config,
    normalizer: Normalizer,
    fetcher: Box<dyn Fetcher>,
    parser: Box<dyn MarkupParser>,
    tagger: Box<dyn NounTagger>,
    similarity: Box<dyn Similarity>,
}

impl TopicExtractor {
    /// Build an extractor, validating the configuration up front.
    ///
    /// A scalar below 1, a threshold above 100, or k = 0 fails here with
    /// `Error::Configuration` — before any network or text work.
    pub fn new(
        config: Config,
        fetcher: Box<dyn Fetcher>,
        parser: Box<dyn MarkupParser>,
        tagger: Box<dyn NounTagger>,
        similarity: Box<dyn Similarity>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer: Normalizer::new(),
            fetcher,
            parser,
            tagger,
            similarity,
        })
    }

    /// Extract the k most representative topics from one page.
    ///
    /// Returns exactly `config.topic_count` topics, **descending by
    /// score**. (The bounded min-heap naturally drains ascending; the
    /// reversal here is the documented presentation contract.)
    pub async fn extract(&self, url: &str) -> Result<Vec<Topic>> {
        let html = self.fetcher.fetch(url).await?;
        let page = self.parser.parse(&html);

        let tokens = self
            .normalizer
            .normalize(page.body_text.split_whitespace(), self.tagger.as_ref());
        debug!(tokens = tokens.len(), url, "normalized body text");

        let mut table = count_tokens(&tokens);
        merge_case_variants(&mut table);

        let keywords = self.metadata_keywords(&page.metadata_text());
        apply_metadata_weight(&mut table, &keywords, self.config.keyword_scalar);

        fuzzy_merge(
            &mut table,
            self.similarity.as_ref(),
            self.config.similarity_threshold,
        );

        let mut topics = select_top_k(&table, self.config.topic_count)?;
        topics.reverse();

        info!(
            url,
            distinct = table.len(),
            k = self.config.topic_count,
            "extraction complete"
        );
        Ok(topics)
    }

    /// Normalize metadata text through the same rules as body text.
    /// The resulting set is only ever used for lookup.
    fn metadata_keywords(&self, metadata: &str) -> KeywordSet {
        self.normalizer
            .normalize(metadata.split_whitespace(), self.tagger.as_ref())
            .into_iter()
            .collect()
    }
}
