// sensiword-core/src/detector.rs
//! The lock-guarded facade around a [`Trie`].
//!
//! Any number of readers may scan concurrently; writers take the exclusive
//! lock for the whole mutation, so no reader ever sees a half-inserted word.
//! Word lists are read before the lock is taken.
//!
//! License: MIT OR APACHE 2.0

use std::io::BufRead;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::DetectorConfig;
use crate::engine::DetectionEngine;
use crate::errors::SensiwordError;
use crate::loader::{read_word_file, read_word_list};
use crate::match_span::MatchSpan;
use crate::scanner;
use crate::trie::Trie;

#[derive(Debug, Default)]
pub struct Detector {
    trie: RwLock<Trie>,
    replacement: Option<String>,
}

impl Detector {
    /// Builds an empty detector from `config`. Word lists named in the config
    /// are not read; use [`Detector::from_config`] for that.
    pub fn new(config: &DetectorConfig) -> Self {
        debug!(
            "Creating detector (case_insensitive={}, {} noise character(s)).",
            config.is_case_insensitive(),
            config.noise().count()
        );
        Self {
            trie: RwLock::new(Trie::with_options(config.is_case_insensitive(), config.noise())),
            replacement: config.replacement.clone(),
        }
    }

    /// Builds a detector and loads every word list named in `config`.
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        let detector = Self::new(config);
        for path in &config.word_lists {
            detector
                .load_file(path)
                .with_context(|| format!("Failed to load word list {}", path.display()))?;
        }
        Ok(detector)
    }

    /// Wraps an already built trie.
    pub fn from_trie(trie: Trie) -> Self {
        Self {
            trie: RwLock::new(trie),
            replacement: None,
        }
    }

    // A panic while holding the lock cannot leave the trie half-updated in a way
    // that breaks its invariants, so a poisoned lock is simply recovered.
    fn read(&self) -> RwLockReadGuard<'_, Trie> {
        self.trie.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Trie> {
        self.trie.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads one word per line from `reader`. Returns the number of lines read.
    pub fn load<R: BufRead>(&self, reader: R) -> Result<usize, SensiwordError> {
        let words = read_word_list(reader)?;
        self.add_words(&words);
        Ok(words.len())
    }

    /// Loads a word-list file. Returns the number of lines read.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<usize, SensiwordError> {
        let words = read_word_file(path)?;
        self.add_words(&words);
        Ok(words.len())
    }

    /// Inserts several words under a single exclusive lock.
    pub fn add_words<S: AsRef<str>>(&self, words: &[S]) {
        let mut trie = self.write();
        let before = trie.len();
        for word in words {
            trie.insert(word.as_ref());
        }
        info!("Dictionary grew from {} to {} word(s).", before, trie.len());
    }

    /// Removes a word. Returns true if it was present.
    pub fn remove_word(&self, word: &str) -> bool {
        self.write().delete(word)
    }

    /// Extends the noise set.
    pub fn add_noise<I: IntoIterator<Item = char>>(&self, noise: I) {
        self.write().add_noise(noise);
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.read().contains_word(word)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.read().is_case_insensitive()
    }

    pub fn default_replacement(&self) -> &str {
        self.replacement.as_deref().unwrap_or(scanner::DEFAULT_REPLACEMENT)
    }
}

impl DetectionEngine for Detector {
    fn detect(&self, text: &str) -> bool {
        scanner::check(&self.read(), text)
    }

    fn search(&self, text: &str) -> Vec<String> {
        scanner::search(&self.read(), text)
    }

    fn find_matches(&self, text: &str) -> Vec<MatchSpan> {
        scanner::scan(&self.read(), text)
    }

    fn filter(&self, text: &str, replacement: Option<&str>) -> String {
        let replacement = replacement.unwrap_or(self.default_replacement());
        scanner::filter(&self.read(), text, Some(replacement))
    }

    fn add_word(&self, word: &str) {
        self.write().insert(word);
    }

    fn words(&self) -> Vec<String> {
        self.read().list_words()
    }
}
