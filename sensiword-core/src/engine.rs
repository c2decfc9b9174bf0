// sensiword-core/src/engine.rs
//! Defines the `DetectionEngine` trait, the public query surface that host
//! applications (the CLI, services, tests) program against.
//!
//! License: MIT OR APACHE 2.0

use crate::match_span::MatchSpan;

/// The operations a sensitive-word detector offers to its callers.
///
/// Implementations must be shareable across threads: queries take `&self`
/// and any interior mutation is the implementation's responsibility.
pub trait DetectionEngine: Send + Sync {
    /// Returns true if `text` contains at least one dictionary word.
    fn detect(&self, text: &str) -> bool;

    /// Returns the distinct dictionary words found in `text`, in first-seen order.
    fn search(&self, text: &str) -> Vec<String>;

    /// Returns every match in `text`, overlapping matches included, ordered by
    /// byte offset.
    fn find_matches(&self, text: &str) -> Vec<MatchSpan>;

    /// Returns a copy of `text` with every matched character replaced.
    ///
    /// # Arguments
    /// * `text` - The input string to redact.
    /// * `replacement` - Per-character replacement; the engine's default when `None`.
    fn filter(&self, text: &str, replacement: Option<&str>) -> String;

    /// Adds a single word to the dictionary.
    fn add_word(&self, word: &str);

    /// Lists the dictionary in its stored (folded) form. Order is unspecified.
    fn words(&self) -> Vec<String>;
}
