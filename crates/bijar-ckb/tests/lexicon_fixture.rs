//! End-to-end tests over the JSON rule fixture in `tests/data/rules.json`.
//!
//! Run: cargo test -p bijar-ckb --test lexicon_fixture

use std::path::PathBuf;
use std::sync::Arc;

use bijar_ckb::handle::BijarHandle;
use bijar_ckb::rules::RuleTables;
use bijar_ckb::suggestion::distance::levenshtein_str;
use bijar_ckb::suggestion::{SuggestParams, SuggestionCache, default_strategy};
use bijar_core::enums::{Classification, FindingKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/rules.json")
}

fn create_handle() -> BijarHandle {
    BijarHandle::from_path(fixture_path())
        .unwrap_or_else(|e| panic!("failed to load {}: {e}", fixture_path().display()))
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn fixture_loads_with_links() {
    let tables = RuleTables::from_path(fixture_path()).unwrap();
    assert_eq!(tables.stems().len(), 4);
    assert_eq!(tables.suffixes().len(), 7);
    assert_eq!(tables.particles().len(), 3);
    let grtn = tables
        .verbs()
        .iter()
        .find(|v| v.infinitive == "گرتن")
        .unwrap();
    assert!(grtn.is_transitive);
    assert!(grtn.valid_prefixes.contains("ھەڵ"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(BijarHandle::from_path("/nonexistent/rules.json").is_err());
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn classify_words() {
    let handle = create_handle();
    let cases = [
        ("کتێب", Classification::Correct),
        ("کتێبەکان", Classification::Correct),
        ("خانەکان", Classification::Correct),
        ("خانان", Classification::Correct),
        ("تەماتەکە", Classification::Correct),
        ("ھەڵگرتووە", Classification::Correct),
        ("داکەوت", Classification::Correct),
        ("بۆ", Classification::Correct),
        ("گەمژە", Classification::Flagged),
        ("گەمژەکان", Classification::Flagged),
        ("خانەان", Classification::Incorrect),
        ("کتێبکان", Classification::Incorrect),
        ("کتێپ", Classification::Incorrect),
    ];
    for (word, expected) in cases {
        assert_eq!(handle.classify(word), expected, "classify({word})");
    }
}

#[test]
fn classify_is_total() {
    let handle = create_handle();
    for word in ["", "ک", "x", " ", "ھەڵم گرت", "١٢٣"] {
        // any variant is acceptable; the call must not panic
        let _ = handle.classify(word);
    }
    assert_eq!(handle.classify(""), Classification::Incorrect);
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

#[test]
fn scan_reports_typo_after_phrase() {
    let findings = create_handle().scan("ھەڵم گرت و کتێپ");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].word, "کتێپ");
    assert_eq!(findings[0].start, 11);
    assert_eq!(findings[0].end, 15);
    assert_eq!(findings[0].kind, FindingKind::Misspelled);
}

#[test]
fn scan_phrase_tokens_are_never_reported() {
    let handle = create_handle();
    // "ھەڵم" alone is not a word
    assert_eq!(handle.scan("ھەڵم").len(), 1);
    assert!(handle.scan("ھەڵیشم گرتبوو").is_empty());
    assert!(handle.scan("ھەڵم دەگرێت").is_empty());
}

#[test]
fn scan_splits_words_at_joiners_and_marks() {
    let handle = create_handle();
    let findings = handle.scan("کتێپ\u{200C}خانە");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].word, "کتێپ");
    assert_eq!((findings[0].start, findings[0].end), (0, 4));

    let findings = handle.scan("کتێپ\u{064B} و");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].word, "کتێپ");
}

#[test]
fn scan_flags_bad_words() {
    let findings = create_handle().scan("کتێبەکان و گەمژەکان");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Bad);
    assert_eq!((findings[0].start, findings[0].end), (11, 19));
}

#[test]
fn scan_findings_serialize() {
    let findings = create_handle().scan("کتێپ");
    let json = serde_json::to_value(&findings).unwrap();
    assert_eq!(json[0]["word"], "کتێپ");
    assert_eq!(json[0]["type"], "misspelled");
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn suggest_typo() {
    let handle = create_handle();
    assert_eq!(handle.suggest("کتێپ", 5, 2)[0], "کتێب");
}

#[test]
fn suggest_missing_suffix_vowel() {
    let handle = create_handle();
    assert!(handle.suggest("کتێبکان", 5, 2).iter().any(|w| w == "کتێبەکان"));
}

#[test]
fn suggest_prefix_fusion() {
    let handle = create_handle();
    assert_eq!(handle.suggest("ھەڵمگرت", 5, 2)[0], "ھەڵم گرت");
}

#[test]
fn suggest_colloquial_aspect_marker() {
    let handle = create_handle();
    assert_eq!(handle.suggest("ئەگرم", 5, 2)[0], "دەگرم");
    assert_eq!(handle.suggest("ھەڵمئەگرت", 5, 2)[0], "ھەڵم دەگرت");
}

#[test]
fn suggest_is_idempotent() {
    let handle = create_handle();
    for word in ["کتێپ", "خانەن", "ھەڵمگرت", "دەگرن"] {
        let first = handle.suggest(word, 5, 2);
        let second = handle.suggest(word, 5, 2);
        assert_eq!(first, second, "suggest({word})");
    }
}

#[test]
fn suggest_respects_limit_and_distance() {
    let handle = create_handle();
    let strategy = default_strategy();
    let words = ["کتێپ", "خانەن", "تەماتەن", "گرتمن", "ھەڵمگرت", "ئەکەم", "دەگرن", "دەکەن"];
    for word in words {
        for limit in [1, 3, 10] {
            for distance in 1..=3 {
                let params = SuggestParams::new(limit, distance);
                let ranked = strategy.suggest(handle.lexicon(), word, params);
                assert!(ranked.len() <= limit);
                for candidate in &ranked {
                    assert!(
                        candidate.score.is_structural()
                            || levenshtein_str(word, &candidate.word) <= distance,
                        "{word} -> {} exceeds distance {distance}",
                        candidate.word
                    );
                }

                let served = handle.suggest(word, limit, distance);
                let expected: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
                assert_eq!(served, expected, "suggest({word}, {limit}, {distance})");
            }
        }
    }
}

#[test]
fn suggest_unknown_returns_empty() {
    assert!(create_handle().suggest("ڤڤڤڤڤڤڤڤڤڤ", 5, 1).is_empty());
}

#[test]
fn suggest_params_parsing() {
    let handle = create_handle();
    let parsed = SuggestParams::parse(Some("abc"), Some("3"));
    assert_eq!(parsed, SuggestParams::default());
    assert!(handle.suggest_with("کتێپ", parsed).len() <= 5);
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

#[test]
fn cache_clears_when_full() {
    let cache = Arc::new(SuggestionCache::with_capacity(2));
    let handle = create_handle().with_cache(cache.clone());
    handle.suggest("کتێپ", 5, 2);
    handle.suggest("خانەن", 5, 2);
    assert_eq!(cache.len(), 2);
    handle.suggest("ھەڵمگرت", 5, 2);
    assert!(cache.is_empty());
    assert!(cache.get("کتێپ", SuggestParams::new(5, 2)).is_none());

    // recomputed, not served stale
    let again = handle.suggest("کتێپ", 5, 2);
    assert_eq!(again[0], "کتێب");
    assert_eq!(cache.len(), 1);
}

// ---------------------------------------------------------------------------
// Word counts
// ---------------------------------------------------------------------------

#[test]
fn word_counts() {
    let handle = create_handle();
    let counts = handle.word_counts();
    assert_eq!(counts.stems, 4);
    assert_eq!(counts.particles, 3);
    // کتێب: ەکان ان ێک ەکە; خانە/تەماتە/گەمژە: کان یەک کە
    assert_eq!(counts.derived, 4 + 3 * 3);
    assert!(counts.verbs > 0);
    assert!(counts.total <= counts.stems + counts.derived + counts.verbs + counts.particles);

    let json = serde_json::to_value(counts).unwrap();
    assert_eq!(json["stems"], 4);
    assert_eq!(json["total"], counts.total);
}

#[test]
fn handle_shared_across_threads() {
    let handle = Arc::new(create_handle());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = handle.clone();
            std::thread::spawn(move || handle.suggest("کتێپ", 5, 2))
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap()[0], "کتێب");
    }
}
