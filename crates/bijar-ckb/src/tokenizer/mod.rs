// Tokenizer: splits text into runs of Sorani letters
//
// Only whole words made entirely of the Sorani alphabet become tokens.
// Punctuation, whitespace, joiners (ZWNJ, ZWJ) and combining marks end a
// word. A run of letters glued to a Latin letter, a digit or an underscore
// is not a word. Offsets are character offsets into the input.

use bijar_core::character::{WORD_CHAR_CLASS, word_pattern};
use bijar_core::token::Token;
use regex::Regex;

/// Word tokenizer over the Sorani alphabet.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    word_char: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&word_pattern())?,
            word_char: Regex::new(&format!("^{WORD_CHAR_CLASS}$"))?,
        })
    }

    fn is_word_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.word_char.is_match(c.encode_utf8(&mut buf))
    }

    /// Tokens of `text` in order of appearance.
    ///
    /// A run of Sorani letters touching another letter, digit or underscore
    /// is part of a larger word and yields no token.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        // Running (byte, char) position of the previous match end.
        let mut byte_pos = 0;
        let mut char_pos = 0;
        for m in self.pattern.find_iter(text) {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            if before.is_some_and(|c| self.is_word_char(c))
                || after.is_some_and(|c| self.is_word_char(c))
            {
                continue;
            }

            char_pos += text[byte_pos..m.start()].chars().count();
            let token = Token::new(m.as_str(), char_pos);
            char_pos = token.end;
            byte_pos = m.end();
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<(String, usize, usize)> {
        Tokenizer::new()
            .unwrap()
            .tokens(text)
            .into_iter()
            .map(|t| (t.text, t.start, t.end))
            .collect()
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ,. 123").is_empty());
    }

    #[test]
    fn words_with_char_offsets() {
        assert_eq!(
            tokenize("ھەڵم گرت و کتێپ"),
            vec![
                ("ھەڵم".to_string(), 0, 4),
                ("گرت".to_string(), 5, 8),
                ("و".to_string(), 9, 10),
                ("کتێپ".to_string(), 11, 15),
            ]
        );
    }

    #[test]
    fn punctuation_separates_words() {
        let tokens = tokenize("کتێب، خانە.");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].0, "کتێب");
        assert_eq!(tokens[1], ("خانە".to_string(), 6, 10));
    }

    #[test]
    fn latin_text_is_ignored() {
        assert_eq!(
            tokenize("hello کتێب world"),
            vec![("کتێب".to_string(), 6, 10)]
        );
    }

    #[test]
    fn letters_glued_to_other_word_characters_are_not_words() {
        assert!(tokenize("کتێبabc").is_empty());
        assert!(tokenize("12کتێب").is_empty());
        assert!(tokenize("_کتێب").is_empty());
        // Arabic yeh is a letter outside the alphabet: both runs are glued to it
        assert!(tokenize("کتێب\u{064A}خانە").is_empty());
    }

    #[test]
    fn zero_width_non_joiner_separates_words() {
        assert_eq!(
            tokenize("کتێپ\u{200C}خانە"),
            vec![("کتێپ".to_string(), 0, 4), ("خانە".to_string(), 5, 9)]
        );
        assert_eq!(
            tokenize("کتێب\u{200D}"),
            vec![("کتێب".to_string(), 0, 4)]
        );
    }

    #[test]
    fn combining_mark_ends_a_word() {
        // tanwin (U+064B) after the last letter
        assert_eq!(
            tokenize("کتێپ\u{064B} و"),
            vec![("کتێپ".to_string(), 0, 4), ("و".to_string(), 6, 7)]
        );
    }
}
