// Suggestion cache: bounded memo of ranked suggestions.
//
// Keyed by (word, limit, max_distance). There is no partial eviction: when
// an insert pushes the entry count over the capacity, the whole cache is
// cleared and its creation time reset.

use std::time::Instant;

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use parking_lot::Mutex;

use super::params::SuggestParams;

/// Default entry-count ceiling.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Fixed per-entry overhead used when estimating the memory a clear frees.
const ENTRY_OVERHEAD_BYTES: usize = 64;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Suggestion cache options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Maximum number of entries kept before the cache is cleared.
    pub capacity: usize,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    word: String,
    limit: usize,
    max_distance: usize,
}

impl CacheKey {
    fn new(word: &str, params: SuggestParams) -> Self {
        Self {
            word: word.to_string(),
            limit: params.limit(),
            max_distance: params.max_distance(),
        }
    }

    fn approx_bytes(&self, suggestions: &[String]) -> usize {
        ENTRY_OVERHEAD_BYTES
            + self.word.len()
            + suggestions.iter().map(String::len).sum::<usize>()
    }
}

struct CacheState {
    entries: HashMap<CacheKey, Vec<String>>,
    created_at: DateTime<Utc>,
}

impl CacheState {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            created_at: Utc::now(),
        }
    }
}

/// Thread-safe suggestion cache.
///
/// Lookups and inserts take a short lock; computing a missing entry happens
/// outside it, so two threads missing the same key may both compute it.
pub struct SuggestionCache {
    options: CacheOptions,
    state: Mutex<CacheState>,
}

impl SuggestionCache {
    pub fn new(options: CacheOptions) -> Self {
        Self {
            options,
            state: Mutex::new(CacheState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(CacheOptions { capacity })
    }

    pub fn capacity(&self) -> usize {
        self.options.capacity
    }

    pub fn get(&self, word: &str, params: SuggestParams) -> Option<Vec<String>> {
        let key = CacheKey::new(word, params);
        self.state.lock().entries.get(&key).cloned()
    }

    /// Store suggestions, clearing the whole cache if the capacity is
    /// exceeded.
    pub fn insert(&self, word: &str, params: SuggestParams, suggestions: Vec<String>) {
        let mut state = self.state.lock();
        state.entries.insert(CacheKey::new(word, params), suggestions);
        if state.entries.len() > self.options.capacity {
            Self::clear_locked(&mut state);
        }
    }

    /// Return the cached suggestions, computing and storing them on a miss.
    pub fn get_or_insert_with<F>(&self, word: &str, params: SuggestParams, compute: F) -> Vec<String>
    where
        F: FnOnce() -> Vec<String>,
    {
        if let Some(hit) = self.get(word, params) {
            return hit;
        }

        let started = Instant::now();
        let suggestions = compute();
        tracing::debug!(
            word,
            limit = params.limit(),
            max_distance = params.max_distance(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "generated suggestions"
        );

        self.insert(word, params, suggestions.clone());
        suggestions
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Drop every entry and reset the creation time.
    pub fn clear(&self) {
        Self::clear_locked(&mut self.state.lock());
    }

    /// When the cache was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.state.lock().created_at
    }

    fn clear_locked(state: &mut CacheState) {
        let entries = state.entries.len();
        let bytes: usize = state
            .entries
            .iter()
            .map(|(key, suggestions)| key.approx_bytes(suggestions))
            .sum();
        let deleted_at = Utc::now();

        tracing::info!(
            entries,
            size = %format_size(bytes),
            lifetime = %format_lifetime(deleted_at - state.created_at),
            created = %state.created_at.format(TIMESTAMP_FORMAT),
            deleted = %deleted_at.format(TIMESTAMP_FORMAT),
            "suggestion cache cleared"
        );

        state.entries.clear();
        state.created_at = deleted_at;
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

/// Human-readable size: KB below one megabyte, MB above.
fn format_size(bytes: usize) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.2} KB")
    } else {
        format!("{:.2} MB", kb / 1024.0)
    }
}

/// `H:MM:SS`.
fn format_lifetime(lifetime: chrono::TimeDelta) -> String {
    let secs = lifetime.num_seconds().max(0);
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
