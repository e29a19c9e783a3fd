// Sorani Kurdish (ckb) language module for Bijar
//
// Builds a lexicon from rule tables (stems, suffixes, prefixes, verbs,
// particles) and checks words and text against it:
//   - `rules`: rule table records and JSON loading
//   - `sorani`: language constants and pronoun tables
//   - `morphology`: verb conjugation and derived-word generation
//   - `lexicon`: the immutable, indexed word data
//   - `tokenizer`: Sorani word tokens with char offsets
//   - `speller`: word classification and text scanning (feature `spell`)
//   - `suggestion`: ranked corrections and their cache (feature `suggest`)
//   - `handle`: `BijarHandle`, the all-in-one entry point (feature `handle`)

pub mod lexicon;
pub mod morphology;
pub mod rules;
pub mod sorani;
pub mod tokenizer;

#[cfg(feature = "spell")]
pub mod speller;

#[cfg(feature = "suggest")]
pub mod suggestion;

#[cfg(feature = "handle")]
pub mod handle;

#[cfg(test)]
mod test_support;

pub use lexicon::{Lexicon, LexiconError, WordCounts, WordSets, generate_all_word_sets};
pub use rules::{RuleTables, RulesError};

#[cfg(feature = "handle")]
pub use handle::{BijarError, BijarHandle};
