// sensiword-core/src/lib.rs
//! # sensiword Core Library
//!
//! `sensiword-core` detects, lists and redacts occurrences of a configured set of
//! sensitive words in arbitrary UTF-8 text. Matching tolerates "noise" characters
//! inserted inside a word (e.g. `敏*#感词`) and can optionally ignore case.
//!
//! ## Modules
//!
//! * `trie`: The code-point prefix tree holding the dictionary.
//! * `scanner`: The single-pass scan, its derived queries and span merging for redaction.
//! * `match_span`: The `MatchSpan` result type and PII-aware debug logging helpers.
//! * `detector`: The `RwLock`-guarded facade for concurrent callers.
//! * `engine`: The `DetectionEngine` trait, the public query surface.
//! * `loader`: Reading newline-delimited word lists.
//! * `config`: `DetectorConfig` loading, merging and validation.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The library's error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensiword_core::{DetectionEngine, Detector, DetectorConfig};
//!
//! let config = DetectorConfig {
//!     case_insensitive: Some(true),
//!     noise_characters: Some("#@$%^&*".to_string()),
//!     ..Default::default()
//! };
//! let detector = Detector::new(&config);
//! detector.add_words(&["敏感词a", "敏感词b"]);
//!
//! let text = "含敏感词*#B和敏&*感#词A的文本";
//! assert!(detector.detect(text));
//! assert_eq!(detector.search(text), vec!["敏感词b", "敏感词a"]);
//! assert_eq!(detector.filter(text, None), "含******和*******的文本");
//! ```
//!
//! ## Error Handling
//!
//! Queries never fail. Loading word lists and configuration files returns
//! [`SensiwordError`] or `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod detector;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod loader;
pub mod match_span;
pub mod scanner;
pub mod trie;

/// Re-exports the configuration types and functions.
pub use config::{merge_config, validate_config, DetectorConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SensiwordError;

/// Re-exports the query surface and its lock-guarded implementation.
pub use detector::Detector;
pub use engine::DetectionEngine;

/// Re-exports the dictionary and the scan primitives for callers that manage
/// their own synchronization.
pub use match_span::MatchSpan;
pub use scanner::{check, filter, merge_spans, scan, search, Matches, MergedSpan, DEFAULT_REPLACEMENT};
pub use trie::{fold_char, Trie, TrieNode};

pub use loader::{load_word_file, load_words, read_word_file, read_word_list};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_filter_string, headless_filter_with_words};
