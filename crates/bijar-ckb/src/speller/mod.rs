// Spell checking module
//
//   - `validator`: classifies one word against the lexicon
//   - `scan`: finds misspelled and flagged words in running text

pub mod scan;
pub mod validator;

pub use scan::scan;
pub use validator::LexiconSpeller;

use bijar_core::enums::Classification;

/// Trait for spell checkers.
///
/// Classification is total: every input, including the empty string,
/// yields exactly one `Classification`.
pub trait Speller {
    fn classify(&self, word: &str) -> Classification;
}
