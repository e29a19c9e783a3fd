// bijar-suggest: Generate spelling suggestions for Sorani words.
//
// Reads words from the arguments or stdin (one per line) and prints ranked
// suggestions for each word that is not correct.
//
// Usage:
//   bijar-suggest [-r RULES] [OPTIONS] [WORD...]
//
// Options:
//   -r, --rules PATH      Rule file (or directory containing rules.json)
//   -n, --limit N         Maximum number of suggestions (default: 5, 1..=10)
//   -D, --distance N      Maximum edit distance (default: 2, 1..=3)
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

use bijar_ckb::handle::BijarHandle;
use bijar_ckb::suggestion::SuggestParams;
use bijar_core::enums::Classification;

fn print_help() {
    println!("bijar-suggest: Generate spelling suggestions for Sorani Kurdish words.");
    println!();
    println!("Usage: bijar-suggest [-r RULES] [OPTIONS] [WORD...]");
    println!();
    println!("If WORD arguments are given, suggests for each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -r, --rules PATH   Rule file or directory containing rules.json");
    println!("  -n, --limit N      Maximum number of suggestions (default: 5, 1..=10)");
    println!("  -D, --distance N   Maximum edit distance (default: 2, 1..=3)");
    println!("  -h, --help         Print this help");
    println!();
    println!("Out-of-range values are clamped. A non-numeric value resets both");
    println!("options to their defaults.");
}

fn suggest_word(word: &str, handle: &BijarHandle, params: SuggestParams, out: &mut impl Write) {
    if handle.classify(word) == Classification::Correct {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = handle.suggest_with(word, params);
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    bijar_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = bijar_cli::parse_rules_path(&args);

    if bijar_cli::wants_help(&args) {
        print_help();
        return;
    }

    let (limit, args) = bijar_cli::parse_option(&args, "-n", "--limit");
    let (distance, args) = bijar_cli::parse_option(&args, "-D", "--distance");
    let params = SuggestParams::parse(limit.as_deref(), distance.as_deref());
    tracing::debug!(
        limit = params.limit(),
        max_distance = params.max_distance(),
        "suggestion parameters"
    );

    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let handle = bijar_cli::load_handle(rules_path.as_deref())
        .unwrap_or_else(|e| bijar_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, params, &mut out);
        }
    } else {
        for word in words {
            suggest_word(word, &handle, params, &mut out);
        }
    }
}
