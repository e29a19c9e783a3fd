// Token and Finding public API types

use serde::Serialize;

use crate::character::char_len;
use crate::enums::FindingKind;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A word token produced by the tokenizer.
///
/// Offsets are character (Unicode scalar value) offsets into the scanned
/// text: `start` is inclusive and `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text content of this token.
    pub text: String,

    /// Character offset of the first character.
    pub start: usize,

    /// Character offset one past the last character.
    pub end: usize,
}

impl Token {
    /// Create a new token starting at character offset `start`.
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + char_len(&text);
        Self { text, start, end }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// A problematic word reported by a text scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub word: String,
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: FindingKind,
}

impl Finding {
    /// Create a finding covering the given token.
    pub fn from_token(token: &Token, kind: FindingKind) -> Self {
        Self {
            word: token.text.clone(),
            start: token.start,
            end: token.end,
            kind,
        }
    }
}
