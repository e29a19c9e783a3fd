// Suggestion request parameters and their bounds.

/// Default number of suggestions returned.
pub const DEFAULT_LIMIT: usize = 5;
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 10;

/// Default maximum edit distance.
pub const DEFAULT_MAX_DISTANCE: usize = 2;
pub const MIN_MAX_DISTANCE: usize = 1;
pub const MAX_MAX_DISTANCE: usize = 3;

/// Suggestion count and edit-distance budget, always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuggestParams {
    limit: usize,
    max_distance: usize,
}

impl SuggestParams {
    /// Clamp the given values into their bounds.
    pub fn new(limit: usize, max_distance: usize) -> Self {
        Self {
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
            max_distance: max_distance.clamp(MIN_MAX_DISTANCE, MAX_MAX_DISTANCE),
        }
    }

    /// Parse raw request values.
    ///
    /// A missing value takes its default. If either value is present but not
    /// an integer, both fall back to their defaults. Negative numbers clamp
    /// to the lower bound.
    pub fn parse(limit: Option<&str>, max_distance: Option<&str>) -> Self {
        match (
            parse_field(limit, DEFAULT_LIMIT),
            parse_field(max_distance, DEFAULT_MAX_DISTANCE),
        ) {
            (Some(limit), Some(max_distance)) => Self::new(limit, max_distance),
            _ => Self::default(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

fn parse_field(raw: Option<&str>, default: usize) -> Option<usize> {
    match raw {
        None => Some(default),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .map(|n| usize::try_from(n).unwrap_or(0)),
    }
}
