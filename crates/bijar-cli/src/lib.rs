// bijar-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use bijar_ckb::handle::{BijarError, BijarHandle};
use tracing_subscriber::EnvFilter;

/// Rule file name looked up in each search directory.
const RULES_FILE: &str = "rules.json";

/// Environment variable naming a rule file or a directory containing one.
pub const RULES_PATH_ENV: &str = "BIJAR_RULES_PATH";

/// Search for the rule file and create a BijarHandle.
///
/// Search order:
/// 1. `rules_path` argument (if provided)
/// 2. `BIJAR_RULES_PATH` environment variable
/// 3. `~/.bijar/rules.json`
/// 4. Current working directory (looks for `rules.json` directly)
///
/// Each entry may be the file itself or a directory holding `rules.json`.
pub fn load_handle(rules_path: Option<&str>) -> Result<BijarHandle, String> {
    let search_paths = build_search_paths(rules_path);

    for candidate in &search_paths {
        let file = if candidate.is_dir() {
            candidate.join(RULES_FILE)
        } else {
            candidate.clone()
        };
        if file.is_file() {
            tracing::debug!(path = %file.display(), "loading rule tables");
            return BijarHandle::from_path(&file)
                .map_err(|e: BijarError| format!("failed to load {}: {e}", file.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        RULES_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of files and directories to search for the rule file.
fn build_search_paths(rules_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = rules_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(RULES_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".bijar"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Extract the value of an option given as `--long=VALUE`, `--long VALUE`
/// or `-s VALUE`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins. An option
/// without a value is a fatal error.
pub fn parse_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let long_eq = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match args.get(i + 1) {
                Some(next) => {
                    value = Some(next.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--rules=PATH`, `--rules PATH` or `-r PATH` argument.
pub fn parse_rules_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "-r", "--rules")
}

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
