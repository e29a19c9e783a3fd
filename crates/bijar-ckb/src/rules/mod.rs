// Rule tables: stems, suffixes, prefixes, verbs and particles
//
// The tables are supplied by an external store and loaded once. `raw`
// describes the row shapes the store exports; `RuleTables` is the
// validated, fixed-shape form the rest of the crate consumes.

mod raw;
mod sound;

pub use raw::{LinkRow, ParticleRow, PrefixRow, RawRules, StemRow, SuffixRow, VerbRow};
pub use sound::SoundClasses;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use bijar_core::character::char_len;
use hashbrown::HashSet;

/// Error type for rule loading and validation failures.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// The rule file could not be read.
    #[error("failed to read rule tables: {0}")]
    Io(#[from] std::io::Error),

    /// The rule data is not valid JSON or does not match the row shapes.
    #[error("failed to parse rule tables: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("suffix #{index} has empty text")]
    EmptySuffix { index: usize },

    #[error("stem #{index} has an empty word")]
    EmptyStem { index: usize },

    #[error("duplicate stem: {0}")]
    DuplicateStem(String),

    #[error("prefix with id {id} has empty text")]
    EmptyPrefix { id: u32 },

    #[error("duplicate prefix id: {0}")]
    DuplicatePrefixId(u32),

    #[error("verb #{index} is missing its {field}")]
    IncompleteVerb { index: usize, field: &'static str },

    #[error("duplicate verb infinitive: {0}")]
    DuplicateInfinitive(String),
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A base word that suffixes attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stem {
    pub word: String,
    /// Sound class of the stem ending, matched against `Suffix::applies_to`.
    pub sound_type: String,
    /// The stem is valid but discouraged; words built on it are flagged.
    pub is_bad: bool,
}

impl Stem {
    pub fn new(word: impl Into<String>, sound_type: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            sound_type: sound_type.into(),
            is_bad: false,
        }
    }

    pub fn bad(mut self) -> Self {
        self.is_bad = true;
        self
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.word)
    }
}

/// A nominal suffix and the stem sound classes it may follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub text: String,
    pub sound_classes: SoundClasses,
}

impl Suffix {
    pub fn new(text: impl Into<String>, applies_to_sound: &str) -> Self {
        Self {
            text: text.into(),
            sound_classes: SoundClasses::parse(applies_to_sound),
        }
    }

    /// Returns `true` if a stem of the given sound type may take this suffix.
    pub fn applies_to(&self, sound_type: &str) -> bool {
        self.sound_classes.matches(sound_type)
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}

/// A verbal prefix (preverb) such as "ھەڵ".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub id: u32,
    pub text: String,
}

/// A verb root with the stems needed to conjugate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub infinitive: String,
    pub past_stem: String,
    pub present_stem: String,
    pub is_transitive: bool,
    /// Prefixes this verb combines with, by text.
    pub valid_prefixes: BTreeSet<String>,
}

impl Verb {
    pub fn new(
        infinitive: impl Into<String>,
        past_stem: impl Into<String>,
        present_stem: impl Into<String>,
        is_transitive: bool,
    ) -> Self {
        Self {
            infinitive: infinitive.into(),
            past_stem: past_stem.into(),
            present_stem: present_stem.into(),
            is_transitive,
            valid_prefixes: BTreeSet::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.valid_prefixes.insert(prefix.into());
        self
    }
}

// ---------------------------------------------------------------------------
// RuleTables
// ---------------------------------------------------------------------------

/// Validated rule tables.
///
/// Construction checks data integrity once; everything downstream may
/// assume non-empty affixes and unique keys.
#[derive(Debug, Clone)]
pub struct RuleTables {
    stems: Vec<Stem>,
    suffixes: Vec<Suffix>,
    prefixes: Vec<Prefix>,
    verbs: Vec<Verb>,
    particles: Vec<String>,
}

impl RuleTables {
    /// Validate and assemble rule tables.
    ///
    /// Suffix order is preserved. Empty particle entries are dropped.
    pub fn new(
        stems: Vec<Stem>,
        suffixes: Vec<Suffix>,
        prefixes: Vec<Prefix>,
        verbs: Vec<Verb>,
        particles: Vec<String>,
    ) -> Result<Self, RulesError> {
        validate_stems(&stems)?;
        if let Some(index) = suffixes.iter().position(|s| s.text.is_empty()) {
            return Err(RulesError::EmptySuffix { index });
        }
        validate_prefixes(&prefixes)?;
        validate_verbs(&verbs)?;

        let particles = particles.into_iter().filter(|p| !p.is_empty()).collect();

        Ok(Self {
            stems,
            suffixes,
            prefixes,
            verbs,
            particles,
        })
    }

    /// Parse and validate rule tables from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        serde_json::from_str::<RawRules>(json)?.resolve()
    }

    /// Parse and validate rule tables from a JSON reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, RulesError> {
        serde_json::from_reader::<_, RawRules>(reader)?.resolve()
    }

    /// Load rule tables from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }

    /// Suffixes in table order.
    pub fn suffixes(&self) -> &[Suffix] {
        &self.suffixes
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn particles(&self) -> &[String] {
        &self.particles
    }

    /// Returns `true` if there is nothing to build a lexicon from.
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty() && self.verbs.is_empty() && self.particles.is_empty()
    }
}

fn validate_stems(stems: &[Stem]) -> Result<(), RulesError> {
    let mut seen = HashSet::with_capacity(stems.len());
    for (index, stem) in stems.iter().enumerate() {
        if stem.word.is_empty() {
            return Err(RulesError::EmptyStem { index });
        }
        if !seen.insert(stem.word.as_str()) {
            return Err(RulesError::DuplicateStem(stem.word.clone()));
        }
    }
    Ok(())
}

fn validate_prefixes(prefixes: &[Prefix]) -> Result<(), RulesError> {
    let mut seen = HashSet::with_capacity(prefixes.len());
    for prefix in prefixes {
        if prefix.text.is_empty() {
            return Err(RulesError::EmptyPrefix { id: prefix.id });
        }
        if !seen.insert(prefix.id) {
            return Err(RulesError::DuplicatePrefixId(prefix.id));
        }
    }
    Ok(())
}

fn validate_verbs(verbs: &[Verb]) -> Result<(), RulesError> {
    let mut seen = HashSet::with_capacity(verbs.len());
    for (index, verb) in verbs.iter().enumerate() {
        let missing = if verb.infinitive.is_empty() {
            Some("infinitive")
        } else if verb.past_stem.is_empty() {
            Some("past stem")
        } else if verb.present_stem.is_empty() {
            Some("present stem")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(RulesError::IncompleteVerb { index, field });
        }
        if !seen.insert(verb.infinitive.as_str()) {
            return Err(RulesError::DuplicateInfinitive(verb.infinitive.clone()));
        }
    }
    Ok(())
}
