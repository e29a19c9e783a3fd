// Verb conjugation: every surface form of a verb root and its prefixes.
//
// Generation runs in two phases. Phase one builds the prefix-less forms and
// collects the bases a prefix may attach to. Phase two attaches each valid
// prefix to those bases and, for transitive verbs, builds the two-word
// phrases in which a pronoun clitic rides on the prefix ("ھەڵم گرت").

use hashbrown::HashSet;

use crate::rules::Verb;
use crate::sorani::constants::{
    CONTINUOUS_MARKER, EMPHATIC_INFIX, FRONT_VOWEL, LOW_VOWEL, PERFECT_LONG_VOWEL,
    PERFECT_LONG_VOWEL_FINALS, PERFECT_MARKER, PERFECT_VOWEL, PRESENT_3SG_AFTER_FRONT_VOWEL,
    PRESENT_3SG_AFTER_LOW_VOWEL, PRESENT_3SG_AFTER_ROUNDED_VOWEL, PRESENT_3SG_DEFAULT,
    REMOTE_PAST_MARKER, ROUNDED_VOWEL,
};
use crate::sorani::pronouns::{
    ForbiddenPronounPairs, GROUP_1, GROUP_2, GROUP_3, HARMONIZED_PRESENT_ENDINGS,
};

use super::Generator;

/// Generates every conjugated form of one verb.
pub struct VerbConjugator<'a> {
    verb: &'a Verb,
    forbidden: &'a ForbiddenPronounPairs,
}

/// Intermediate results of phase one that phase two builds on.
struct BaseForms {
    /// Present forms with the continuous marker ("دەگرم").
    present: Vec<String>,
    /// Remote past base ("گرتبوو").
    remote_past: String,
    /// Perfect base ("گرتووە").
    perfect: String,
    /// Single-word bases a prefix attaches to directly.
    prefixable: Vec<String>,
}

impl<'a> VerbConjugator<'a> {
    pub fn new(verb: &'a Verb, forbidden: &'a ForbiddenPronounPairs) -> Self {
        Self { verb, forbidden }
    }

    /// Pronoun clitics of the past tenses.
    fn past_pronouns(&self) -> &'static [&'static str] {
        if self.verb.is_transitive {
            &GROUP_1
        } else {
            &GROUP_2
        }
    }

    /// Present stems inflected for every subject, without the aspect marker.
    ///
    /// The third person singular ending depends on the stem-final vowel and
    /// replaces the generic entry rather than adding to it.
    fn present_stems(&self) -> Vec<String> {
        let stem = self.verb.present_stem.as_str();
        let mut forms: Vec<String> = GROUP_3
            .iter()
            .filter(|p| !HARMONIZED_PRESENT_ENDINGS.contains(*p))
            .map(|p| format!("{stem}{p}"))
            .collect();

        let harmonized = if let Some(base) = stem.strip_suffix(LOW_VOWEL) {
            format!("{base}{PRESENT_3SG_AFTER_LOW_VOWEL}")
        } else if let Some(base) = stem.strip_suffix(ROUNDED_VOWEL) {
            format!("{base}{PRESENT_3SG_AFTER_ROUNDED_VOWEL}")
        } else if let Some(base) = stem.strip_suffix(FRONT_VOWEL) {
            format!("{base}{PRESENT_3SG_AFTER_FRONT_VOWEL}")
        } else {
            format!("{stem}{PRESENT_3SG_DEFAULT}")
        };
        forms.push(harmonized);
        forms
    }

    /// Phase one: prefix-less forms, collected into `out`.
    fn base_forms(&self, out: &mut HashSet<String>) -> BaseForms {
        let verb = self.verb;
        let past = verb.past_stem.as_str();
        let past_pronouns = self.past_pronouns();

        out.insert(verb.infinitive.clone());
        let mut prefixable = vec![past.to_string()];

        let present: Vec<String> = self
            .present_stems()
            .into_iter()
            .map(|form| format!("{CONTINUOUS_MARKER}{form}"))
            .collect();
        out.extend(present.iter().cloned());

        out.extend(past_pronouns.iter().map(|p| format!("{past}{p}")));

        let remote_past = format!("{past}{REMOTE_PAST_MARKER}");
        out.extend(past_pronouns.iter().map(|p| format!("{remote_past}{p}")));
        prefixable.push(remote_past.clone());

        let perfect_vowel = if past.ends_with(PERFECT_LONG_VOWEL_FINALS) {
            PERFECT_LONG_VOWEL
        } else {
            PERFECT_VOWEL
        };
        let perfect_stem = format!("{past}{perfect_vowel}");
        let perfect = format!("{perfect_stem}{PERFECT_MARKER}");
        out.extend(
            past_pronouns
                .iter()
                .map(|p| format!("{perfect_stem}{p}{PERFECT_MARKER}")),
        );
        prefixable.push(perfect.clone());

        if verb.is_transitive {
            prefixable.push(format!("{CONTINUOUS_MARKER}{past}"));
            out.extend(
                GROUP_1
                    .iter()
                    .map(|p| format!("{CONTINUOUS_MARKER}{p}{past}")),
            );
        }

        out.extend(prefixable.iter().cloned());

        BaseForms {
            present,
            remote_past,
            perfect,
            prefixable,
        }
    }

    /// Phase two, multi-word part: phrases whose first word is a prefix
    /// carrying the agent/object clitic.
    fn prefix_phrases(&self, prefix: &str, base: &BaseForms, out: &mut HashSet<String>) {
        let past = self.verb.past_stem.as_str();
        let marked_present_stem = format!("{CONTINUOUS_MARKER}{}", self.verb.present_stem);

        for clitic in GROUP_1 {
            let heads = [
                format!("{prefix}{clitic}"),
                format!("{prefix}{EMPHATIC_INFIX}{clitic}"),
            ];
            for head in &heads {
                // Past tenses: the clitic is the subject.
                out.insert(format!("{head} {past}"));
                out.insert(format!("{head} {}", base.perfect));
                out.insert(format!("{head} {}", base.remote_past));

                // Present tense: the clitic is the object.
                for present in &base.present {
                    let subject = present.replacen(&marked_present_stem, "", 1);
                    if !self.forbidden.forbids(clitic, &subject) {
                        out.insert(format!("{head} {present}"));
                    }
                }

                // Past tenses with an object ending: clitic is the subject.
                for object in GROUP_2 {
                    if self.forbidden.forbids(clitic, object) {
                        continue;
                    }
                    out.insert(format!("{head} {past}{object}"));
                    out.insert(format!("{head} {CONTINUOUS_MARKER}{past}{object}"));
                    out.insert(format!("{head} {}{object}", base.remote_past));
                }
            }
        }
    }
}

impl Generator for VerbConjugator<'_> {
    fn generate(&self) -> HashSet<String> {
        let mut forms = HashSet::new();
        let base = self.base_forms(&mut forms);

        for prefix in &self.verb.valid_prefixes {
            forms.extend(base.prefixable.iter().map(|f| format!("{prefix}{f}")));
            forms.insert(format!("{prefix}{}", self.verb.infinitive));

            if self.verb.is_transitive {
                self.prefix_phrases(prefix, &base, &mut forms);
            }
        }

        forms
    }
}
