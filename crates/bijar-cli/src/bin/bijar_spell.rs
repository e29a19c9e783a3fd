// bijar-spell: Check spelling of Sorani words.
//
// Classifies words given as arguments, or read from stdin (one per line):
//   C: word    (correct)
//   B: word    (correct but flagged)
//   W: word    (wrong / misspelled)
//
// With --text, stdin is scanned as running text instead and every finding
// is printed as one JSON object per line.
//
// Usage:
//   bijar-spell [-r RULES] [OPTIONS] [WORD...]
//
// Options:
//   -r, --rules PATH   Rule file (or directory containing rules.json)
//   -s, --suggest      Also print suggestions for misspelled words
//   -t, --text         Scan stdin as text
//   -h, --help         Print help

use std::io::{self, BufRead, Read, Write};

use bijar_ckb::handle::BijarHandle;
use bijar_core::enums::Classification;

fn print_help() {
    println!("bijar-spell: Check spelling of Sorani Kurdish words.");
    println!();
    println!("Usage: bijar-spell [-r RULES] [OPTIONS] [WORD...]");
    println!();
    println!("Classifies each WORD, or each stdin line if no words are given. Prints:");
    println!("  C: word    (correct)");
    println!("  B: word    (correct but flagged)");
    println!("  W: word    (misspelled)");
    println!();
    println!("Options:");
    println!("  -r, --rules PATH   Rule file or directory containing rules.json");
    println!("                     (default: $BIJAR_RULES_PATH, ~/.bijar, cwd)");
    println!("  -s, --suggest      Also print suggestions for misspelled words");
    println!("  -t, --text         Scan stdin as running text, print findings as JSON lines");
    println!("  -h, --help         Print this help");
}

fn check_word(word: &str, handle: &BijarHandle, suggest: bool, out: &mut impl Write) {
    let tag = match handle.classify(word) {
        Classification::Correct => "C",
        Classification::Flagged => "B",
        Classification::Incorrect => "W",
    };
    let _ = writeln!(out, "{tag}: {word}");
    if suggest && tag == "W" {
        for suggestion in handle.suggest_with(word, Default::default()) {
            let _ = writeln!(out, "S: {suggestion}");
        }
    }
}

fn scan_text(handle: &BijarHandle, out: &mut impl Write) {
    let mut text = String::new();
    if let Err(e) = io::stdin().lock().read_to_string(&mut text) {
        bijar_cli::fatal(&format!("error reading stdin: {e}"));
    }
    for finding in handle.scan(&text) {
        match serde_json::to_string(&finding) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(e) => bijar_cli::fatal(&format!("failed to encode finding: {e}")),
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

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let text_mode = args.iter().any(|a| a == "-t" || a == "--text");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let handle = bijar_cli::load_handle(rules_path.as_deref())
        .unwrap_or_else(|e| bijar_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if text_mode {
        scan_text(&handle, &mut out);
    } else if words.is_empty() {
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
            check_word(word, &handle, show_suggestions, &mut out);
        }
    } else {
        for word in words {
            check_word(word, &handle, show_suggestions, &mut out);
        }
    }
}
