// Suggestion status: the word under correction, the distance budget and the
// best score seen for each candidate.

use std::cmp::Ordering;

use hashbrown::HashMap;

use super::distance::{jaro_winkler, levenshtein};

/// Penalty applied to candidates longer than the input word.
const LONGER_CANDIDATE_PENALTY: f64 = 0.9;
/// Upper end of the distance discount factor.
const DISTANCE_DISCOUNT_BASE: f64 = 1.1;

/// A rule-based structural correction. Variants are ordered by specificity:
/// a later variant outranks an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StructuralFix {
    /// Colloquial continuous marker replaced by the standard one.
    AspectMarker,
    /// Prefix + clitic cluster split from the verb.
    PrefixFusion,
    /// Prefix + clitic split from a colloquial continuous verb.
    ContinuousFusion,
}

/// Ranking score of a candidate.
///
/// Every structural fix outranks every distance-scored candidate.
#[derive(Debug, Clone, Copy)]
pub enum Score {
    Scored(f64),
    Structural(StructuralFix),
}

impl Score {
    pub fn is_structural(self) -> bool {
        matches!(self, Score::Structural(_))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Score {}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Scored(a), Score::Scored(b)) => a.total_cmp(b),
            (Score::Scored(_), Score::Structural(_)) => Ordering::Less,
            (Score::Structural(_), Score::Scored(_)) => Ordering::Greater,
            (Score::Structural(a), Score::Structural(b)) => a.cmp(b),
        }
    }
}

/// A ranked suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub score: Score,
}

/// Collects candidates for one misspelled word.
///
/// Adding a candidate twice keeps the better score.
pub struct SuggestionStatus<'a> {
    word: &'a str,
    chars: Vec<char>,
    max_distance: usize,
    candidates: HashMap<String, Score>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a str, max_distance: usize) -> Self {
        Self {
            word,
            chars: word.chars().collect(),
            max_distance,
            candidates: HashMap::new(),
        }
    }

    pub fn word(&self) -> &'a str {
        self.word
    }

    /// The word as characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn word_len(&self) -> usize {
        self.chars.len()
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Edit distance from the word to `candidate`.
    pub fn distance_to(&self, candidate: &[char]) -> usize {
        levenshtein(&self.chars, candidate)
    }

    /// Similarity score of a candidate at edit distance `distance`.
    ///
    /// Jaro-Winkler similarity, discounted by distance relative to the word
    /// length, with a penalty for candidates longer than the word.
    pub fn score(&self, candidate: &[char], distance: usize) -> f64 {
        let similarity = jaro_winkler(&self.chars, candidate);
        let discount =
            DISTANCE_DISCOUNT_BASE - distance as f64 / (self.chars.len() as f64 + 1.0);
        let mut score = similarity * discount;
        if candidate.len() > self.chars.len() {
            score *= LONGER_CANDIDATE_PENALTY;
        }
        score
    }

    /// Add a distance-scored candidate if it lies within the budget.
    ///
    /// Returns `true` if the candidate was within `max_distance`.
    pub fn add_scored(&mut self, candidate: &str) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        let distance = self.distance_to(&chars);
        if distance > self.max_distance {
            return false;
        }
        let score = self.score(&chars, distance);
        self.record(candidate, Score::Scored(score));
        true
    }

    pub fn add_structural(&mut self, candidate: &str, fix: StructuralFix) {
        self.record(candidate, Score::Structural(fix));
    }

    fn record(&mut self, candidate: &str, score: Score) {
        match self.candidates.get_mut(candidate) {
            Some(best) => {
                if score > *best {
                    *best = score;
                }
            }
            None => {
                self.candidates.insert(candidate.to_string(), score);
            }
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn score_of(&self, candidate: &str) -> Option<Score> {
        self.candidates.get(candidate).copied()
    }

    /// The best `limit` candidates, best first. Equal scores are ordered by
    /// word so the output is deterministic.
    pub fn ranked(self, limit: usize) -> Vec<Suggestion> {
        let mut all: Vec<Suggestion> = self
            .candidates
            .into_iter()
            .map(|(word, score)| Suggestion { word, score })
            .collect();
        all.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        all.truncate(limit);
        all
    }
}
