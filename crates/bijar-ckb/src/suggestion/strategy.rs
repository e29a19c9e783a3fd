// Suggestion strategy: runs a list of generators and ranks their output

use crate::lexicon::Lexicon;

use super::generators::{CompoundVerb, StemSuffix, SuggestionGenerator, WholeWord};
use super::params::SuggestParams;
use super::status::{Suggestion, SuggestionStatus};

/// An ordered list of generators whose candidates are merged into one
/// ranking.
///
/// Unlike a cost-budgeted pipeline, every generator always runs: the
/// hypotheses are independent and a later one may outrank an earlier one.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(generators: Vec<Box<dyn SuggestionGenerator>>) -> Self {
        Self { generators }
    }

    /// Run every generator against `status`.
    pub fn generate(&self, lexicon: &Lexicon, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            generator.generate(lexicon, status);
        }
    }

    /// Ranked suggestions for `word`, best first.
    pub fn suggest(&self, lexicon: &Lexicon, word: &str, params: SuggestParams) -> Vec<Suggestion> {
        let mut status = SuggestionStatus::new(word, params.max_distance());
        self.generate(lexicon, &mut status);
        status.ranked(params.limit())
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

/// Whole-word typos, stem + suffix reconstruction and compound-verb fixes.
pub fn default_strategy() -> SuggestionStrategy {
    SuggestionStrategy::new(vec![
        Box::new(WholeWord),
        Box::new(StemSuffix),
        Box::new(CompoundVerb),
    ])
}
