// Suggestion module
//
// Proposes ranked corrections for words the validator rejects.
//
// Architecture:
//   - `distance`: Levenshtein distance and Jaro-Winkler similarity over chars
//   - `generators`: one generator per hypothesis (SuggestionGenerator trait)
//   - `status`: candidate collection, scoring and ranking
//   - `strategy`: runs the generators and ranks the merged candidates
//   - `params`: request limit and distance, clamped to their bounds
//   - `cache`: bounded, thread-safe memo of ranked suggestions

pub mod cache;
pub mod distance;
pub mod generators;
pub mod params;
pub mod status;
pub mod strategy;

pub use cache::{CacheOptions, SuggestionCache};
pub use generators::{CompoundVerb, StemSuffix, SuggestionGenerator, WholeWord};
pub use params::SuggestParams;
pub use status::{Score, StructuralFix, Suggestion, SuggestionStatus};
pub use strategy::{SuggestionStrategy, default_strategy};
