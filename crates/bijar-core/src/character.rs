// Character classification and char-indexed string utilities
//
// All lengths and offsets in Bijar are measured in Unicode scalar values,
// never bytes. Sorani Kurdish letters are multi-byte in UTF-8, so the
// helpers here are used wherever a length or split point is computed.

// ---------------------------------------------------------------------------
// Sorani Kurdish alphabet
// ---------------------------------------------------------------------------

/// The letters of the Sorani Kurdish (Arabic-script) alphabet recognised by
/// the tokenizer.
pub const SORANI_LETTERS: &str = "ئابپتجچحخدرڕزژسشعغفڤقکگلڵمنوۆھهەیێ";

/// Regular expression matching one maximal run of Sorani letters.
///
/// A run is only a word if it is not glued to another word character; see
/// `WORD_CHAR_CLASS`.
pub fn word_pattern() -> String {
    format!("[{SORANI_LETTERS}]+")
}

/// Character class of word characters that may not touch a Sorani word.
///
/// Letters, numbers and underscore only. Joiners (ZWNJ, ZWJ) and combining
/// marks such as tanwin are not word characters, so a run of letters next to
/// them still forms a word.
pub const WORD_CHAR_CLASS: &str = r"[\p{L}\p{N}_]";

// ---------------------------------------------------------------------------
// Char-indexed helpers
// ---------------------------------------------------------------------------

/// Length of `s` in characters.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `s` without its last character (empty for an empty string).
pub fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
