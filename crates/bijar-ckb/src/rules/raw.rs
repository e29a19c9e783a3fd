// Row shapes exported by the rule store, and their resolution into
// `RuleTables`.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde::{Deserialize, Deserializer};

use super::{Prefix, RuleTables, RulesError, Stem, Suffix, Verb};

/// Raw rule tables as exported by the store, one vector per table.
///
/// Missing tables deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRules {
    #[serde(default)]
    pub prefixes: Vec<PrefixRow>,
    #[serde(default)]
    pub verbs: Vec<VerbRow>,
    #[serde(default)]
    pub verb_prefix_links: Vec<LinkRow>,
    #[serde(default)]
    pub stems: Vec<StemRow>,
    #[serde(default)]
    pub suffixes: Vec<SuffixRow>,
    #[serde(default)]
    pub particles: Vec<ParticleRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrefixRow {
    pub id: u32,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerbRow {
    pub id: u32,
    pub infinitive: String,
    pub past_stem: String,
    pub present_stem: String,
    #[serde(deserialize_with = "flag")]
    pub is_transitive: bool,
}

/// Many-to-many link between a verb and a prefix it accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRow {
    pub verb_id: u32,
    pub prefix_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StemRow {
    pub word: String,
    pub sound_type: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_bad: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuffixRow {
    pub suffix: String,
    #[serde(default)]
    pub applies_to_sound: String,
}

/// A particle row: either `{"word": "..."}` or a bare string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParticleRow {
    Word(String),
    Row { word: String },
}

impl ParticleRow {
    fn into_word(self) -> String {
        match self {
            ParticleRow::Word(word) | ParticleRow::Row { word } => word,
        }
    }
}

/// Boolean columns arrive either as JSON booleans or as 0/1 integers.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

impl RawRules {
    /// Resolve prefix links and validate the tables.
    ///
    /// Links that reference an unknown verb or prefix id are skipped with a
    /// warning; every other integrity problem is an error.
    pub fn resolve(self) -> Result<RuleTables, RulesError> {
        let valid_prefixes = self.link_prefixes()?;

        let verbs = self
            .verbs
            .into_iter()
            .zip(valid_prefixes)
            .map(|(row, valid_prefixes)| Verb {
                infinitive: row.infinitive,
                past_stem: row.past_stem,
                present_stem: row.present_stem,
                is_transitive: row.is_transitive,
                valid_prefixes,
            })
            .collect();

        let stems = self
            .stems
            .into_iter()
            .map(|row| Stem {
                word: row.word,
                sound_type: row.sound_type,
                is_bad: row.is_bad,
            })
            .collect();

        let suffixes = self
            .suffixes
            .into_iter()
            .map(|row| Suffix::new(row.suffix, &row.applies_to_sound))
            .collect();

        let prefixes = self
            .prefixes
            .into_iter()
            .map(|row| Prefix {
                id: row.id,
                text: row.prefix,
            })
            .collect();

        let particles = self
            .particles
            .into_iter()
            .map(ParticleRow::into_word)
            .collect();

        RuleTables::new(stems, suffixes, prefixes, verbs, particles)
    }

    /// Prefix texts accepted by each verb, indexed like `self.verbs`.
    fn link_prefixes(&self) -> Result<Vec<BTreeSet<String>>, RulesError> {
        let mut prefix_by_id: HashMap<u32, &str> = HashMap::with_capacity(self.prefixes.len());
        for row in &self.prefixes {
            if prefix_by_id.insert(row.id, row.prefix.as_str()).is_some() {
                return Err(RulesError::DuplicatePrefixId(row.id));
            }
        }
        let verb_ids: HashMap<u32, usize> = self
            .verbs
            .iter()
            .enumerate()
            .map(|(index, row)| (row.id, index))
            .collect();

        let mut valid_prefixes = vec![BTreeSet::new(); self.verbs.len()];
        for link in &self.verb_prefix_links {
            match (verb_ids.get(&link.verb_id), prefix_by_id.get(&link.prefix_id)) {
                (Some(&index), Some(&prefix)) => {
                    valid_prefixes[index].insert(prefix.to_string());
                }
                _ => tracing::warn!(
                    verb_id = link.verb_id,
                    prefix_id = link.prefix_id,
                    "skipping prefix link with unknown verb or prefix"
                ),
            }
        }
        Ok(valid_prefixes)
    }
}
