// BijarHandle: top-level integration point for Sorani spell checking.
//
// Owns the lexicon, the tokenizer, the suggestion strategy and the
// suggestion cache, and exposes word classification, text scanning,
// suggestions and word statistics through one interface.
//
// Design notes:
// - The lexicon is built once and shared behind an `Arc`; nothing mutates it
//   after construction.
// - The validator borrows the lexicon, so a `LexiconSpeller` is created on
//   the fly in each call.
// - The suggestion cache is the only mutable state. It locks internally and
//   may be shared between handles.
// - Word counts are computed on first request and kept.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use bijar_core::enums::Classification;
use bijar_core::token::{Finding, Token};

use crate::lexicon::{Lexicon, LexiconError, WordCounts, WordSets, generate_all_word_sets};
use crate::rules::RuleTables;
use crate::speller::{LexiconSpeller, Speller, scan};
use crate::suggestion::{SuggestParams, SuggestionCache, SuggestionStrategy, default_strategy};
use crate::tokenizer::Tokenizer;

/// Error type for BijarHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum BijarError {
    /// The lexicon could not be built.
    #[error("failed to build lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    /// The word pattern failed to compile.
    #[error("failed to build tokenizer: {0}")]
    Tokenizer(#[from] regex::Error),
}

/// Top-level handle owning every spell-checking component.
pub struct BijarHandle {
    lexicon: Arc<Lexicon>,
    tokenizer: Tokenizer,
    strategy: SuggestionStrategy,
    cache: Arc<SuggestionCache>,
    word_counts: OnceLock<WordCounts>,
}

impl BijarHandle {
    /// Build a handle from validated rule tables.
    ///
    /// Fails if the tables are empty: an empty lexicon would report every
    /// word as misspelled.
    pub fn initialize(tables: &RuleTables) -> Result<Self, BijarError> {
        let lexicon = Lexicon::build(tables)?;
        Self::from_lexicon(Arc::new(lexicon))
    }

    /// Build a handle from a JSON rule file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BijarError> {
        let tables = RuleTables::from_path(path).map_err(LexiconError::from)?;
        Self::initialize(&tables)
    }

    /// Build a handle from a JSON rule document.
    pub fn from_json_str(json: &str) -> Result<Self, BijarError> {
        let tables = RuleTables::from_json_str(json).map_err(LexiconError::from)?;
        Self::initialize(&tables)
    }

    /// Build a handle over an existing lexicon.
    pub fn from_lexicon(lexicon: Arc<Lexicon>) -> Result<Self, BijarError> {
        Ok(Self {
            lexicon,
            tokenizer: Tokenizer::new()?,
            strategy: default_strategy(),
            cache: Arc::new(SuggestionCache::default()),
            word_counts: OnceLock::new(),
        })
    }

    /// Replace the suggestion cache.
    pub fn with_cache(mut self, cache: Arc<SuggestionCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Replace the suggestion strategy.
    pub fn with_strategy(mut self, strategy: SuggestionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn cache(&self) -> &Arc<SuggestionCache> {
        &self.cache
    }

    // =========================================================================
    // Spelling
    // =========================================================================

    /// Classify one word.
    pub fn classify(&self, word: &str) -> Classification {
        LexiconSpeller::new(&self.lexicon).classify(word)
    }

    /// Split text into Sorani word tokens.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokens(text)
    }

    /// Misspelled and flagged words of `text`, in order.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let tokens = self.tokenizer.tokens(text);
        let speller = LexiconSpeller::new(&self.lexicon);
        scan(&tokens, &speller, self.lexicon.multi_word_phrases())
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Ranked corrections for `word`, best first.
    ///
    /// `limit` and `max_distance` are clamped to their bounds.
    pub fn suggest(&self, word: &str, limit: usize, max_distance: usize) -> Vec<String> {
        self.suggest_with(word, SuggestParams::new(limit, max_distance))
    }

    /// Ranked corrections for `word`, served from the cache when possible.
    pub fn suggest_with(&self, word: &str, params: SuggestParams) -> Vec<String> {
        self.cache.get_or_insert_with(word, params, || {
            self.strategy
                .suggest(&self.lexicon, word, params)
                .into_iter()
                .map(|s| s.word)
                .collect()
        })
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Every known word, by category.
    pub fn word_sets(&self) -> WordSets {
        generate_all_word_sets(&self.lexicon)
    }

    /// Sizes of the word sets, computed once.
    pub fn word_counts(&self) -> WordCounts {
        *self.word_counts.get_or_init(|| {
            let counts = self.word_sets().counts();
            tracing::info!(
                stems = counts.stems,
                derived = counts.derived,
                verbs = counts.verbs,
                particles = counts.particles,
                total = counts.total,
                "word counts computed"
            );
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_tables;

    fn handle() -> BijarHandle {
        BijarHandle::initialize(&sample_tables()).unwrap()
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BijarHandle>();
    }

    #[test]
    fn empty_rules_are_refused() {
        let empty = RuleTables::new(vec![], vec![], vec![], vec![], vec![]).unwrap();
        assert!(matches!(
            BijarHandle::initialize(&empty),
            Err(BijarError::Lexicon(LexiconError::EmptyRules))
        ));
    }

    #[test]
    fn malformed_json_is_a_lexicon_error() {
        assert!(matches!(
            BijarHandle::from_json_str("not json"),
            Err(BijarError::Lexicon(LexiconError::Rules(_)))
        ));
    }

    #[test]
    fn classify_through_handle() {
        let h = handle();
        assert_eq!(h.classify("کتێبەکان"), Classification::Correct);
        assert_eq!(h.classify("گەمژە"), Classification::Flagged);
        assert_eq!(h.classify("کتێپ"), Classification::Incorrect);
    }

    #[test]
    fn scan_merges_phrases_and_reports_typos() {
        let findings = handle().scan("ھەڵم گرت و کتێپ، گەمژە");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].word, "کتێپ");
        assert_eq!((findings[0].start, findings[0].end), (11, 15));
        assert_eq!(findings[1].word, "گەمژە");
        assert_eq!(findings[1].kind, bijar_core::enums::FindingKind::Bad);
    }

    #[test]
    fn suggest_is_cached() {
        let h = handle();
        let first = h.suggest("کتێپ", 5, 2);
        assert_eq!(first.first().map(String::as_str), Some("کتێب"));
        assert_eq!(h.cache().len(), 1);
        assert_eq!(h.suggest("کتێپ", 5, 2), first);
        assert_eq!(h.cache().len(), 1);
    }

    #[test]
    fn suggest_clamps_params() {
        let h = handle();
        h.suggest("کتێپ", 0, 99);
        assert_eq!(
            h.cache().get("کتێپ", SuggestParams::new(1, 3)).map(|v| v.len()),
            Some(1)
        );
    }

    #[test]
    fn shared_cache() {
        let cache = Arc::new(SuggestionCache::with_capacity(10));
        let a = handle().with_cache(cache.clone());
        let b = handle().with_cache(cache.clone());
        a.suggest("کتێپ", 5, 2);
        assert!(b.cache().get("کتێپ", SuggestParams::new(5, 2)).is_some());
    }

    #[test]
    fn word_counts_are_stable() {
        let h = handle();
        let counts = h.word_counts();
        assert_eq!(counts, h.word_counts());
        assert_eq!(counts.stems, 4);
        assert_eq!(counts.particles, 3);
        assert_eq!(counts.total, h.word_sets().union().len());
    }
}
