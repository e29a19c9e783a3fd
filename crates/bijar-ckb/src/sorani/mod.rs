// Sorani Kurdish language data shared across modules

pub mod constants;
pub mod pronouns;

use constants::{ELIDED_VOWEL, MERGING_VOWELS};

/// Returns `true` if `suffix` starts with one of the vowels that absorb a
/// stem-final elided vowel.
pub(crate) fn starts_with_merging_vowel(suffix: &str) -> bool {
    suffix.starts_with(MERGING_VOWELS)
}

/// Returns `true` if joining `stem` and `suffix` directly would put the
/// elided low vowel in front of a merging vowel. Such a concatenation is
/// never a valid surface form.
pub(crate) fn vowels_collide(stem: &str, suffix: &str) -> bool {
    stem.ends_with(ELIDED_VOWEL) && starts_with_merging_vowel(suffix)
}
