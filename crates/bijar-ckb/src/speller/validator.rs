// Word validator: lexicon membership plus stem + suffix decomposition

use bijar_core::enums::Classification;

use crate::lexicon::Lexicon;
use crate::sorani::constants::ELIDED_VOWEL;
use crate::sorani::{starts_with_merging_vowel, vowels_collide};

use super::Speller;

/// Classifies words against a `Lexicon`.
///
/// Checks run in a fixed order and the first match wins:
/// 1. particles
/// 2. single-word verb forms
/// 3. bare stems (flagged if the stem is bad)
/// 4. stem + suffix, trying every suffix in table order
pub struct LexiconSpeller<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LexiconSpeller<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    fn classify_suffixed(&self, word: &str) -> Option<Classification> {
        for suffix in self.lexicon.suffixes() {
            let Some(stem_part) = word.strip_suffix(suffix.text.as_str()) else {
                continue;
            };

            let attaches = self.lexicon.stem(stem_part).filter(|stem| {
                suffix.applies_to(&stem.sound_type) && !vowels_collide(stem_part, &suffix.text)
            });
            if let Some(stem) = attaches {
                return Some(Classification::from_bad_marker(stem.is_bad));
            }

            // The stem's final low vowel merges into a vowel-initial suffix.
            if starts_with_merging_vowel(&suffix.text) {
                let restored = format!("{stem_part}{ELIDED_VOWEL}");
                if let Some(stem) = self.lexicon.stem(&restored) {
                    return Some(Classification::from_bad_marker(stem.is_bad));
                }
            }
        }
        None
    }
}

impl Speller for LexiconSpeller<'_> {
    fn classify(&self, word: &str) -> Classification {
        if self.lexicon.is_particle(word) || self.lexicon.is_single_word_form(word) {
            return Classification::Correct;
        }
        if let Some(stem) = self.lexicon.stem(word) {
            return Classification::from_bad_marker(stem.is_bad);
        }
        self.classify_suffixed(word)
            .unwrap_or(Classification::Incorrect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_tables;

    fn classify(word: &str) -> Classification {
        let lexicon = Lexicon::build(&sample_tables()).unwrap();
        LexiconSpeller::new(&lexicon).classify(word)
    }

    #[test]
    fn particles_and_verb_forms() {
        assert_eq!(classify("لە"), Classification::Correct);
        assert_eq!(classify("و"), Classification::Correct);
        assert_eq!(classify("ھەڵگرت"), Classification::Correct);
        assert_eq!(classify("دەخوات"), Classification::Correct);
    }

    #[test]
    fn bare_stems() {
        assert_eq!(classify("کتێب"), Classification::Correct);
        assert_eq!(classify("گەمژە"), Classification::Flagged);
    }

    #[test]
    fn stem_and_suffix() {
        assert_eq!(classify("کتێبەکان"), Classification::Correct);
        assert_eq!(classify("کتێبێک"), Classification::Correct);
        assert_eq!(classify("خانەکان"), Classification::Correct);
        assert_eq!(classify("خانەیەک"), Classification::Correct);
        assert_eq!(classify("گەمژەکان"), Classification::Flagged);
    }

    #[test]
    fn sound_class_mismatch_is_incorrect() {
        assert_eq!(classify("کتێبکان"), Classification::Incorrect);
        assert_eq!(classify("کتێبیەک"), Classification::Incorrect);
    }

    #[test]
    fn elided_vowel_is_restored() {
        // خانە + ان, تەماتە + ەکان with the stem-final vowel merged
        assert_eq!(classify("خانان"), Classification::Correct);
        assert_eq!(classify("تەماتەکان"), Classification::Correct);
        assert_eq!(classify("تەماتان"), Classification::Correct);
    }

    #[test]
    fn vowel_collision_is_incorrect() {
        assert_eq!(classify("خانەان"), Classification::Incorrect);
    }

    #[test]
    fn total_on_degenerate_input() {
        assert_eq!(classify(""), Classification::Incorrect);
        assert_eq!(classify("ک"), Classification::Incorrect);
        assert_eq!(classify("abc"), Classification::Incorrect);
        assert_eq!(classify("ان"), Classification::Incorrect);
    }
}
