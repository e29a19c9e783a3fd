// Morphological generation module
//
// Expands rule tables into surface forms:
//   - `verb`: every conjugated form of a verb root and its prefixes
//   - `derived`: every stem + compatible suffix combination

mod derived;
mod verb;

pub use derived::DerivedWords;
pub use verb::VerbConjugator;

use hashbrown::HashSet;

/// Trait for surface-form generators.
///
/// A generator is built over borrowed rule data and produces the complete
/// set of forms it licenses. Output is unordered and duplicate-free.
pub trait Generator {
    fn generate(&self) -> HashSet<String>;
}

/// Split generated forms into single words and multi-word phrases (forms
/// containing a space).
pub fn partition_forms(
    forms: impl IntoIterator<Item = String>,
) -> (HashSet<String>, HashSet<String>) {
    forms.into_iter().partition(|form| !form.contains(' '))
}
