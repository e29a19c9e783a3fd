// Text scan: classify every token, merging two-word verb phrases

use bijar_core::enums::FindingKind;
use bijar_core::token::{Finding, Token};
use hashbrown::HashSet;

use super::Speller;

/// Report misspelled and flagged tokens, in text order.
///
/// Two adjacent tokens whose space-joined text is a known multi-word phrase
/// are accepted together and both skipped. The phrase check runs before the
/// length filter, so a one-letter first token can still start a phrase.
/// Remaining tokens of one character are never reported.
pub fn scan(tokens: &[Token], speller: &dyn Speller, phrases: &HashSet<String>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(next) = tokens.get(i + 1) {
            let phrase = format!("{} {}", token.text, next.text);
            if phrases.contains(phrase.as_str()) {
                i += 2;
                continue;
            }
        }

        if token.char_len() > 1 {
            if let Some(kind) = FindingKind::from_classification(speller.classify(&token.text)) {
                findings.push(Finding::from_token(token, kind));
            }
        }
        i += 1;
    }
    findings
}
