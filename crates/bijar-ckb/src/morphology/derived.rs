// Derived words: stem + suffix combinations licensed by sound class.

use hashbrown::HashSet;

use crate::rules::{Stem, Suffix};
use crate::sorani::vowels_collide;

use super::Generator;

/// Generates every stem + suffix concatenation the rule tables allow.
///
/// A suffix attaches when it applies to the stem's sound type, unless the
/// stem ends in the elided low vowel and the suffix starts with a merging
/// vowel.
pub struct DerivedWords<'a> {
    stems: &'a [Stem],
    suffixes: &'a [Suffix],
}

impl<'a> DerivedWords<'a> {
    pub fn new(stems: &'a [Stem], suffixes: &'a [Suffix]) -> Self {
        Self { stems, suffixes }
    }
}

impl Generator for DerivedWords<'_> {
    fn generate(&self) -> HashSet<String> {
        let mut words = HashSet::new();
        for stem in self.stems {
            for suffix in self.suffixes {
                if suffix.applies_to(&stem.sound_type)
                    && !vowels_collide(&stem.word, &suffix.text)
                {
                    words.insert(format!("{}{}", stem.word, suffix.text));
                }
            }
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems() -> Vec<Stem> {
        vec![
            Stem::new("کتێب", "consonant"),
            Stem::new("خانە", "vowel"),
        ]
    }

    fn suffixes() -> Vec<Suffix> {
        vec![
            Suffix::new("ەکان", "consonant"),
            Suffix::new("کان", "vowel"),
            Suffix::new("ان", "consonant,vowel"),
        ]
    }

    #[test]
    fn suffixes_follow_sound_class() {
        let (stems, suffixes) = (stems(), suffixes());
        let words = DerivedWords::new(&stems, &suffixes).generate();
        assert!(words.contains("کتێبەکان"));
        assert!(words.contains("کتێبان"));
        assert!(words.contains("خانەکان"));
        assert!(!words.contains("کتێبکان"));
        assert!(!words.contains("خانەەکان"));
    }

    #[test]
    fn low_vowel_does_not_meet_merging_vowel() {
        let (stems, suffixes) = (stems(), suffixes());
        let words = DerivedWords::new(&stems, &suffixes).generate();
        assert!(!words.contains("خانەان"));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn stems_themselves_are_not_included() {
        let (stems, suffixes) = (stems(), suffixes());
        let words = DerivedWords::new(&stems, &suffixes).generate();
        assert!(!words.contains("کتێب"));
    }

    #[test]
    fn empty_inputs() {
        let stems = stems();
        assert!(DerivedWords::new(&stems, &[]).generate().is_empty());
        assert!(DerivedWords::new(&[], &suffixes()).generate().is_empty());
    }
}
