// Lexicon: the immutable, indexed word data every lookup runs against.
//
// Built once from validated rule tables. Holds the stems (by word and by
// length), the suffixes (table order and longest first), the generated verb
// forms split into single words and multi-word phrases, the particles, and
// the whole-word dictionary searched for typo corrections.

use std::collections::BTreeMap;
use std::time::Instant;

use bijar_core::character::char_len;
use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use crate::morphology::{DerivedWords, Generator, VerbConjugator, partition_forms};
use crate::rules::{RuleTables, RulesError, Stem, Suffix};
use crate::sorani::pronouns::ForbiddenPronounPairs;

/// Error type for lexicon construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The rule tables hold no stems, verbs or particles. Every word would be
    /// reported as misspelled, so construction refuses to proceed.
    #[error("rule tables are empty; refusing to build an empty lexicon")]
    EmptyRules,

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Read-only word data shared by the validator and the suggestion engine.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stems: Vec<Stem>,
    stem_index: HashMap<String, usize>,
    stems_by_len: HashMap<usize, Vec<usize>>,

    /// Suffixes in table order.
    suffixes: Vec<Suffix>,
    /// Indices into `suffixes`, longest first. Equal lengths keep table order.
    suffix_order: Vec<usize>,

    /// Prefix texts in table order, deduplicated.
    prefixes: Vec<String>,
    infinitives: HashSet<String>,
    single_word_forms: HashSet<String>,
    multi_word_phrases: HashSet<String>,
    particles: HashSet<String>,

    /// Whole-word typo candidates (stems, infinitives, single-word verb
    /// forms, particles) grouped by char length, each group sorted.
    dictionary: BTreeMap<usize, Vec<String>>,
}

impl Lexicon {
    /// Expand the rule tables into a lexicon.
    pub fn build(tables: &RuleTables) -> Result<Self, LexiconError> {
        if tables.is_empty() {
            return Err(LexiconError::EmptyRules);
        }
        let started = Instant::now();

        let stems = tables.stems().to_vec();
        let stem_index: HashMap<String, usize> = stems
            .iter()
            .enumerate()
            .map(|(i, stem)| (stem.word.clone(), i))
            .collect();
        let mut stems_by_len: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, stem) in stems.iter().enumerate() {
            stems_by_len.entry(stem.char_len()).or_default().push(i);
        }

        let suffixes = tables.suffixes().to_vec();
        let mut suffix_order: Vec<usize> = (0..suffixes.len()).collect();
        suffix_order.sort_by_key(|&i| std::cmp::Reverse(suffixes[i].char_len()));

        let mut prefixes: Vec<String> = Vec::with_capacity(tables.prefixes().len());
        for prefix in tables.prefixes() {
            if !prefixes.contains(&prefix.text) {
                prefixes.push(prefix.text.clone());
            }
        }

        let forbidden = ForbiddenPronounPairs::new();
        let mut forms = HashSet::new();
        let mut infinitives = HashSet::with_capacity(tables.verbs().len());
        for verb in tables.verbs() {
            forms.extend(VerbConjugator::new(verb, &forbidden).generate());
            infinitives.insert(verb.infinitive.clone());
        }
        let (single_word_forms, multi_word_phrases) = partition_forms(forms);

        let particles: HashSet<String> = tables.particles().iter().cloned().collect();

        let mut dictionary: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let entries: HashSet<&str> = stems
            .iter()
            .map(|s| s.word.as_str())
            .chain(infinitives.iter().map(String::as_str))
            .chain(single_word_forms.iter().map(String::as_str))
            .chain(particles.iter().map(String::as_str))
            .collect();
        for entry in entries {
            dictionary
                .entry(char_len(entry))
                .or_default()
                .push(entry.to_string());
        }
        for group in dictionary.values_mut() {
            group.sort_unstable();
        }

        let lexicon = Self {
            stems,
            stem_index,
            stems_by_len,
            suffixes,
            suffix_order,
            prefixes,
            infinitives,
            single_word_forms,
            multi_word_phrases,
            particles,
            dictionary,
        };

        tracing::info!(
            stems = lexicon.stems.len(),
            suffixes = lexicon.suffixes.len(),
            verbs = tables.verbs().len(),
            single_word_forms = lexicon.single_word_forms.len(),
            multi_word_phrases = lexicon.multi_word_phrases.len(),
            particles = lexicon.particles.len(),
            dictionary = lexicon.dictionary_len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "lexicon built"
        );

        Ok(lexicon)
    }

    pub fn stem(&self, word: &str) -> Option<&Stem> {
        self.stem_index.get(word).map(|&i| &self.stems[i])
    }

    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }

    /// Stems of exactly `len` characters.
    pub fn stems_with_len(&self, len: usize) -> impl Iterator<Item = &Stem> {
        self.stems_by_len
            .get(&len)
            .into_iter()
            .flatten()
            .map(|&i| &self.stems[i])
    }

    /// Suffixes in table order.
    pub fn suffixes(&self) -> &[Suffix] {
        &self.suffixes
    }

    /// Suffixes longest first.
    pub fn suffixes_longest_first(&self) -> impl Iterator<Item = &Suffix> {
        self.suffix_order.iter().map(|&i| &self.suffixes[i])
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn infinitives(&self) -> &HashSet<String> {
        &self.infinitives
    }

    pub fn single_word_forms(&self) -> &HashSet<String> {
        &self.single_word_forms
    }

    pub fn multi_word_phrases(&self) -> &HashSet<String> {
        &self.multi_word_phrases
    }

    pub fn particles(&self) -> &HashSet<String> {
        &self.particles
    }

    pub fn is_particle(&self, word: &str) -> bool {
        self.particles.contains(word)
    }

    pub fn is_single_word_form(&self, word: &str) -> bool {
        self.single_word_forms.contains(word)
    }

    pub fn is_multi_word_phrase(&self, phrase: &str) -> bool {
        self.multi_word_phrases.contains(phrase)
    }

    /// Whole-word dictionary entries whose char length is within
    /// `max_distance` of `len`, shortest first.
    pub fn dictionary_near(&self, len: usize, max_distance: usize) -> impl Iterator<Item = &str> {
        let low = len.saturating_sub(max_distance);
        let high = len + max_distance;
        self.dictionary
            .range(low..=high)
            .flat_map(|(_, group)| group.iter().map(String::as_str))
    }

    /// Number of whole-word dictionary entries.
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.values().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Word sets
// ---------------------------------------------------------------------------

/// Every known word, by category.
///
/// Categories may overlap (a stem can also be a particle); `union` removes
/// the duplicates.
#[derive(Debug, Clone, Default)]
pub struct WordSets {
    pub stems: HashSet<String>,
    pub derived: HashSet<String>,
    /// Single-word verb forms and multi-word verb phrases.
    pub verbs: HashSet<String>,
    pub particles: HashSet<String>,
}

impl WordSets {
    pub fn union(&self) -> HashSet<&str> {
        self.stems
            .iter()
            .chain(&self.derived)
            .chain(&self.verbs)
            .chain(&self.particles)
            .map(String::as_str)
            .collect()
    }

    pub fn counts(&self) -> WordCounts {
        WordCounts {
            stems: self.stems.len(),
            derived: self.derived.len(),
            verbs: self.verbs.len(),
            particles: self.particles.len(),
            total: self.union().len(),
        }
    }
}

/// Sizes of the word sets. `total` counts the deduplicated union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordCounts {
    pub stems: usize,
    pub derived: usize,
    pub verbs: usize,
    pub particles: usize,
    pub total: usize,
}

/// Materialise every word the lexicon accepts, by category.
pub fn generate_all_word_sets(lexicon: &Lexicon) -> WordSets {
    WordSets {
        stems: lexicon.stems().iter().map(|s| s.word.clone()).collect(),
        derived: DerivedWords::new(lexicon.stems(), lexicon.suffixes()).generate(),
        verbs: lexicon
            .single_word_forms()
            .iter()
            .chain(lexicon.multi_word_phrases())
            .cloned()
            .collect(),
        particles: lexicon.particles().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_tables;

    fn lexicon() -> Lexicon {
        Lexicon::build(&sample_tables()).unwrap()
    }

    #[test]
    fn empty_tables_fail_fast() {
        let empty = RuleTables::new(vec![], vec![], vec![], vec![], vec![]).unwrap();
        assert!(matches!(
            Lexicon::build(&empty),
            Err(LexiconError::EmptyRules)
        ));
    }

    #[test]
    fn stems_are_indexed() {
        let lex = lexicon();
        assert!(lex.stem("کتێب").is_some());
        assert!(lex.stem("گەمژە").unwrap().is_bad);
        assert!(lex.stem("کتێ").is_none());
        let four: Vec<_> = lex.stems_with_len(4).map(|s| s.word.as_str()).collect();
        assert!(four.contains(&"کتێب"));
        assert!(four.contains(&"خانە"));
        assert_eq!(lex.stems_with_len(40).count(), 0);
    }

    #[test]
    fn suffixes_longest_first_is_stable() {
        let lex = lexicon();
        let ordered: Vec<&str> = lex.suffixes_longest_first().map(|s| s.text.as_str()).collect();
        let lens: Vec<usize> = ordered.iter().map(|s| char_len(s)).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]));
        // equal lengths keep table order
        let three: Vec<&str> = ordered.iter().copied().filter(|s| char_len(s) == 3).collect();
        assert_eq!(three, vec!["کان", "یەک", "ەکە"]);
        assert_eq!(lex.suffixes()[0].text, "ەکان");
    }

    #[test]
    fn verb_forms_are_partitioned() {
        let lex = lexicon();
        assert!(lex.is_single_word_form("ھەڵگرت"));
        assert!(lex.is_single_word_form("دەکات"));
        assert!(lex.is_multi_word_phrase("ھەڵم گرت"));
        assert!(!lex.is_single_word_form("ھەڵم گرت"));
        assert!(lex.infinitives().contains("کەوتن"));
        assert!(lex.multi_word_phrases().iter().all(|p| p.contains(' ')));
    }

    #[test]
    fn dictionary_is_length_bounded() {
        let lex = lexicon();
        let near: Vec<&str> = lex.dictionary_near(2, 0).collect();
        assert!(near.contains(&"لە"));
        assert!(near.iter().all(|w| char_len(w) == 2));
        assert!(lex.dictionary_near(4, 1).any(|w| w == "کتێب"));
        assert!(!lex.dictionary_near(4, 1).any(|w| w.contains(' ')));
        assert_eq!(lex.dictionary_near(0, usize::MAX / 2).count(), lex.dictionary_len());
    }

    #[test]
    fn prefixes_keep_table_order() {
        assert_eq!(lexicon().prefixes(), &["ھەڵ".to_string(), "دا".to_string()]);
    }

    #[test]
    fn word_sets_and_counts() {
        let lex = lexicon();
        let sets = generate_all_word_sets(&lex);
        assert_eq!(sets.stems.len(), 4);
        assert_eq!(sets.particles.len(), 3);
        assert!(sets.derived.contains("کتێبەکان"));
        assert!(!sets.derived.contains("خانەان"));
        assert!(sets.verbs.contains("ھەڵم گرت"));
        assert!(sets.verbs.contains("گرتن"));

        let counts = sets.counts();
        assert_eq!(
            counts.verbs,
            lex.single_word_forms().len() + lex.multi_word_phrases().len()
        );
        assert!(counts.total <= counts.stems + counts.derived + counts.verbs + counts.particles);
        assert_eq!(counts.total, sets.union().len());
    }
}
