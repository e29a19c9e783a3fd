// Pronoun clitic groups and forbidden pronoun combinations

/// Clitics of transitive verbs: the agent in past tenses, the object in
/// present tenses.
pub const GROUP_1: [&str; 6] = ["م", "مان", "ت", "تان", "ی", "یان"];

/// Subject endings of intransitive verbs (the third person singular is
/// unmarked, hence the empty string).
pub const GROUP_2: [&str; 5] = ["م", "ین", "یت", "ن", ""];

/// Present-tense subject endings.
pub const GROUP_3: [&str; 6] = ["م", "ین", "یت", "ن", "ات", "ێت"];

/// Present endings whose surface form depends on the stem-final vowel.
/// They are produced by the vowel-harmony rule instead of plain
/// concatenation.
pub const HARMONIZED_PRESENT_ENDINGS: [&str; 2] = ["ات", "ێت"];

/// Pronoun pairs that can never co-occur in one clause (a person acting on
/// itself through two clitics, e.g. "me" with "we").
const FORBIDDEN: [(&str, &str); 6] = [
    ("م", "ین"),
    ("م", "م"),
    ("تان", "یت"),
    ("مان", "ین"),
    ("مان", "م"),
    ("ت", "یت"),
];

/// Unordered set of forbidden pronoun pairs.
///
/// Pairs are canonicalised before lookup, so `(a, b)` and `(b, a)` are the
/// same entry. Callers still pass their arguments in the role order of the
/// tense they build: `(object, subject)` for present phrases and
/// `(subject, object)` for past phrases.
#[derive(Debug, Clone)]
pub struct ForbiddenPronounPairs {
    pairs: Vec<(&'static str, &'static str)>,
}

impl ForbiddenPronounPairs {
    pub fn new() -> Self {
        let mut pairs: Vec<_> = FORBIDDEN.iter().map(|&(a, b)| canonical(a, b)).collect();
        pairs.sort_unstable();
        pairs.dedup();
        Self { pairs }
    }

    /// Returns `true` if the two clitics may not appear together.
    pub fn forbids(&self, first: &str, second: &str) -> bool {
        let (a, b) = canonical(first, second);
        self.pairs
            .binary_search_by(|&(x, y)| (x, y).cmp(&(a, b)))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for ForbiddenPronounPairs {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}
