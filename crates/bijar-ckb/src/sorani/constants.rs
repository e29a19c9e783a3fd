// Sorani Kurdish morphological constants.
//
// These capture the affixes and phonological rules used by the verb
// generator, the derived-word expander, the word validator and the
// suggestion generators.

/// Continuous-aspect marker prefixed to present and past-continuous forms.
pub const CONTINUOUS_MARKER: &str = "دە";

/// Colloquial spelling of the continuous-aspect marker.
pub const COLLOQUIAL_CONTINUOUS_MARKER: &str = "ئە";

/// Marker of the remote (pluperfect) past.
pub const REMOTE_PAST_MARKER: &str = "بوو";

/// Final marker of the perfect.
pub const PERFECT_MARKER: &str = "ە";

/// Epenthetic vowel between a past stem and the perfect marker.
pub const PERFECT_VOWEL: &str = "و";

/// Lengthened epenthetic vowel used after `PERFECT_LONG_VOWEL_FINALS`.
pub const PERFECT_LONG_VOWEL: &str = "وو";

/// Past-stem finals that take the lengthened perfect vowel.
pub const PERFECT_LONG_VOWEL_FINALS: [char; 2] = ['د', 'ت'];

/// Emphatic infix placed between a verb prefix and a pronoun clitic.
pub const EMPHATIC_INFIX: &str = "یش";

/// Low vowel dropped from a stem when a merging vowel follows.
pub const ELIDED_VOWEL: char = 'ە';

/// Vowels that absorb a preceding `ELIDED_VOWEL`.
pub const MERGING_VOWELS: [char; 2] = ['ا', 'ە'];

/// Shortest hypothetical stem tried when splitting a misspelled word.
pub const MIN_STEM_LEN: usize = 2;

// ---------------------------------------------------------------------------
// Present-tense third person singular (vowel harmony)
// ---------------------------------------------------------------------------

/// Present stem final that is replaced by `PRESENT_3SG_AFTER_LOW_VOWEL`.
pub const LOW_VOWEL: char = 'ە';

/// Present stem final that is replaced by `PRESENT_3SG_AFTER_ROUNDED_VOWEL`.
pub const ROUNDED_VOWEL: char = 'ۆ';

/// Present stem final that is replaced by `PRESENT_3SG_AFTER_FRONT_VOWEL`.
pub const FRONT_VOWEL: char = 'ێ';

pub const PRESENT_3SG_AFTER_LOW_VOWEL: &str = "ات";
pub const PRESENT_3SG_AFTER_ROUNDED_VOWEL: &str = "وات";
pub const PRESENT_3SG_AFTER_FRONT_VOWEL: &str = "ێت";
pub const PRESENT_3SG_DEFAULT: &str = "ێت";
