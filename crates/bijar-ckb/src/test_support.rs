// Shared rule fixture for unit tests.

use crate::rules::{Prefix, RuleTables, Stem, Suffix, Verb};

/// A small but complete rule set: four stems (one bad), seven suffixes
/// covering both sound classes and both merging vowels, two prefixes, four
/// verbs and three particles.
pub(crate) fn sample_tables() -> RuleTables {
    RuleTables::new(
        vec![
            Stem::new("کتێب", "consonant"),
            Stem::new("خانە", "vowel"),
            Stem::new("تەماتە", "vowel"),
            Stem::new("گەمژە", "vowel").bad(),
        ],
        vec![
            Suffix::new("ەکان", "consonant"),
            Suffix::new("کان", "vowel"),
            Suffix::new("ان", "consonant,vowel"),
            Suffix::new("ێک", "consonant"),
            Suffix::new("یەک", "vowel"),
            Suffix::new("ەکە", "consonant"),
            Suffix::new("کە", "vowel"),
        ],
        vec![
            Prefix { id: 1, text: "ھەڵ".into() },
            Prefix { id: 2, text: "دا".into() },
        ],
        vec![
            Verb::new("گرتن", "گرت", "گر", true).with_prefix("ھەڵ"),
            Verb::new("کەوتن", "کەوت", "کەو", false).with_prefix("دا"),
            Verb::new("کردن", "کرد", "کە", true),
            Verb::new("خواردن", "خوارد", "خۆ", true),
        ],
        vec!["لە".into(), "بۆ".into(), "و".into()],
    )
    .expect("sample rule tables are valid")
}
