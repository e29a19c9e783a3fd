// Suggestion generators: one per correction hypothesis.
//
//   - `WholeWord`: the word is a typo of a dictionary entry
//   - `StemSuffix`: the word is a known stem + known suffix with typos in
//     either part
//   - `CompoundVerb`: the word is a compound verb written with the wrong
//     aspect marker or without the space after its prefix cluster

use bijar_core::character::drop_last_char;
use hashbrown::HashSet;

use crate::lexicon::Lexicon;
use crate::sorani::constants::{
    COLLOQUIAL_CONTINUOUS_MARKER, CONTINUOUS_MARKER, ELIDED_VOWEL, EMPHATIC_INFIX, MIN_STEM_LEN,
};
use crate::sorani::pronouns::GROUP_1;
use crate::sorani::{starts_with_merging_vowel, vowels_collide};

use super::distance::levenshtein;
use super::status::{StructuralFix, SuggestionStatus};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for suggestion generators.
///
/// A generator proposes candidates for the word tracked by `status`. It never
/// ranks or truncates; that is left to the status.
pub trait SuggestionGenerator: Send + Sync {
    fn generate(&self, lexicon: &Lexicon, status: &mut SuggestionStatus<'_>);
}

// ---------------------------------------------------------------------------
// WholeWord
// ---------------------------------------------------------------------------

/// Dictionary entries (stems, infinitives, single-word verb forms,
/// particles) within the edit-distance budget.
pub struct WholeWord;

impl SuggestionGenerator for WholeWord {
    fn generate(&self, lexicon: &Lexicon, status: &mut SuggestionStatus<'_>) {
        for entry in lexicon.dictionary_near(status.word_len(), status.max_distance()) {
            status.add_scored(entry);
        }
    }
}

// ---------------------------------------------------------------------------
// StemSuffix
// ---------------------------------------------------------------------------

/// Reconstructs stem + suffix words.
///
/// Every split of the word into a hypothetical stem (at least
/// `MIN_STEM_LEN` characters) and a non-empty hypothetical suffix is tried
/// against every real suffix, longest first. Whatever distance the suffix
/// leaves of the budget bounds the search for a matching stem. Each
/// (stem, suffix) pair is tried at most once.
pub struct StemSuffix;

impl SuggestionGenerator for StemSuffix {
    fn generate(&self, lexicon: &Lexicon, status: &mut SuggestionStatus<'_>) {
        let chars = status.chars().to_vec();
        let max_distance = status.max_distance();
        let mut processed: HashSet<(&str, &str)> = HashSet::new();

        for split in MIN_STEM_LEN..chars.len() {
            let (hyp_stem, hyp_suffix) = chars.split_at(split);
            let hyp_stem_text: String = hyp_stem.iter().collect();

            for suffix in lexicon.suffixes_longest_first() {
                let suffix_chars: Vec<char> = suffix.text.chars().collect();
                let suffix_distance = levenshtein(hyp_suffix, &suffix_chars);
                if suffix_distance > max_distance {
                    continue;
                }
                let budget = max_distance - suffix_distance;

                for len in split.saturating_sub(budget)..=split + budget {
                    for stem in lexicon.stems_with_len(len) {
                        let key = (stem.word.as_str(), suffix.text.as_str());
                        if processed.contains(&key) {
                            continue;
                        }
                        let stem_chars: Vec<char> = stem.word.chars().collect();
                        if levenshtein(hyp_stem, &stem_chars) > budget
                            || !suffix.applies_to(&stem.sound_type)
                        {
                            continue;
                        }
                        processed.insert(key);

                        let base = if vowels_collide(&stem.word, &suffix.text) {
                            drop_last_char(&stem.word)
                        } else {
                            stem.word.as_str()
                        };
                        status.add_scored(&format!("{base}{}", suffix.text));
                    }
                }

                // A stem-final low vowel merged into a vowel-initial suffix:
                // "تەمات" + "ان" comes from "تەماتە".
                if starts_with_merging_vowel(&suffix.text) {
                    let restored = format!("{hyp_stem_text}{ELIDED_VOWEL}");
                    if let Some(stem) = lexicon.stem(&restored) {
                        if processed.insert((stem.word.as_str(), suffix.text.as_str())) {
                            status.add_scored(&format!("{hyp_stem_text}{}", suffix.text));
                        }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CompoundVerb
// ---------------------------------------------------------------------------

/// Structural fixes for compound verbs.
///
/// - A colloquial continuous marker at the start of a known verb form is
///   replaced by the standard one.
/// - A prefix + clitic cluster (optionally with the emphatic infix) fused to
///   the verb body is split off with a space, also when the body carries the
///   colloquial continuous marker.
///
/// A fix is only proposed if the result is a known form or phrase.
pub struct CompoundVerb;

impl CompoundVerb {
    fn split_fusions(
        lexicon: &Lexicon,
        word: &str,
        head: &str,
        status: &mut SuggestionStatus<'_>,
    ) {
        let Some(rest) = word.strip_prefix(head) else {
            return;
        };

        if !rest.is_empty() {
            let phrase = format!("{head} {rest}");
            if lexicon.is_multi_word_phrase(&phrase) {
                status.add_structural(&phrase, StructuralFix::PrefixFusion);
            }
        }

        if let Some(body) = rest.strip_prefix(COLLOQUIAL_CONTINUOUS_MARKER) {
            let phrase = format!("{head} {CONTINUOUS_MARKER}{body}");
            if lexicon.is_multi_word_phrase(&phrase) {
                status.add_structural(&phrase, StructuralFix::ContinuousFusion);
            }
        }
    }
}

impl SuggestionGenerator for CompoundVerb {
    fn generate(&self, lexicon: &Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();

        if let Some(rest) = word.strip_prefix(COLLOQUIAL_CONTINUOUS_MARKER) {
            let fixed = format!("{CONTINUOUS_MARKER}{rest}");
            if lexicon.is_single_word_form(&fixed) {
                status.add_structural(&fixed, StructuralFix::AspectMarker);
            }
        }

        for prefix in lexicon.prefixes() {
            for clitic in GROUP_1 {
                let plain = format!("{prefix}{clitic}");
                let emphatic = format!("{prefix}{EMPHATIC_INFIX}{clitic}");
                Self::split_fusions(lexicon, word, &plain, status);
                Self::split_fusions(lexicon, word, &emphatic, status);
            }
        }
    }
}
