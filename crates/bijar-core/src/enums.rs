// Shared enums: word classification and scan finding kinds

use serde::Serialize;

/// Outcome of checking a single word against the lexicon.
///
/// Exactly one variant is produced for any input string, including the
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The word is valid.
    Correct,
    /// The word is valid but built on a stem marked as bad (offensive or
    /// discouraged usage).
    Flagged,
    /// The word is not in the lexicon and cannot be decomposed into a known
    /// stem and suffix.
    Incorrect,
}

impl Classification {
    /// Build a valid classification from a stem's bad marker.
    pub fn from_bad_marker(is_bad: bool) -> Self {
        if is_bad {
            Classification::Flagged
        } else {
            Classification::Correct
        }
    }
}

/// Kind of problem reported by a text scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// The word is not valid.
    Misspelled,
    /// The word is valid but flagged.
    Bad,
}

impl FindingKind {
    /// Map a classification to the finding it produces, if any.
    ///
    /// `Correct` words produce no finding.
    pub fn from_classification(classification: Classification) -> Option<Self> {
        match classification {
            Classification::Correct => None,
            Classification::Flagged => Some(FindingKind::Bad),
            Classification::Incorrect => Some(FindingKind::Misspelled),
        }
    }
}
