// Sound-class tags attached to stems and suffixes

/// Characters separating tags in a suffix's `applies_to_sound` field.
const TAG_SEPARATORS: [char; 4] = [',', ';', '|', ' '];

/// The set of stem sound classes a suffix may attach to.
///
/// Parsed from a separated list such as `"vowel,consonant"`. A field that
/// holds a single compact token (no separators) keeps the containment
/// semantics of the compact encoding: a stem matches when its sound type
/// occurs inside the token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SoundClasses {
    tags: Vec<String>,
}

impl SoundClasses {
    pub fn parse(raw: &str) -> Self {
        let tags = raw
            .split(|c: char| TAG_SEPARATORS.contains(&c) || c.is_whitespace())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { tags }
    }

    /// Returns `true` if a stem of the given sound type may take the suffix.
    pub fn matches(&self, sound_type: &str) -> bool {
        if sound_type.is_empty() {
            return false;
        }
        match self.tags.as_slice() {
            [single] => single.contains(sound_type),
            tags => tags.iter().any(|t| t == sound_type),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_separated_list() {
        let classes = SoundClasses::parse("vowel, consonant");
        assert_eq!(classes.tags(), &["vowel".to_string(), "consonant".to_string()]);
        assert!(classes.matches("vowel"));
        assert!(classes.matches("consonant"));
        assert!(!classes.matches("vow"));
    }

    #[test]
    fn compact_token_uses_containment() {
        let classes = SoundClasses::parse("VC");
        assert!(classes.matches("V"));
        assert!(classes.matches("C"));
        assert!(!classes.matches("X"));
    }

    #[test]
    fn single_tag_matches_itself() {
        let classes = SoundClasses::parse("consonant");
        assert!(classes.matches("consonant"));
        assert!(!classes.matches("vowel"));
    }

    #[test]
    fn empty_field_matches_nothing() {
        let classes = SoundClasses::parse("");
        assert!(classes.is_empty());
        assert!(!classes.matches("vowel"));
        assert!(!SoundClasses::parse("vowel").matches(""));
    }
}
