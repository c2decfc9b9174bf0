//! Configuration management for `sensiword-core`.
//!
//! This module defines the detector configuration, handles YAML
//! deserialization, and provides utilities for loading, merging and
//! validating configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::SensiwordError;
use crate::scanner::DEFAULT_REPLACEMENT;

/// Settings consumed when a detector is constructed.
///
/// Scalar fields are optional so a user file only overrides what it names
/// (see [`merge_config`]).
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Fold case on insert and scan. Fixed once the trie is built.
    pub case_insensitive: Option<bool>,
    /// Characters tolerated in the middle of a candidate match.
    pub noise_characters: Option<String>,
    /// Default replacement used when filtering.
    pub replacement: Option<String>,
    /// Word-list files, one word per line.
    pub word_lists: Vec<PathBuf>,
}

impl DetectorConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// Relative `word_lists` entries are resolved against the directory
    /// containing the config file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading detector configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: DetectorConfig =
            serde_yml::from_str(&text).map_err(|e| SensiwordError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let Some(base) = path.parent() {
            config.word_lists = config
                .word_lists
                .into_iter()
                .map(|p| {
                    if p.is_relative() && !p.as_os_str().is_empty() {
                        base.join(p)
                    } else {
                        p
                    }
                })
                .collect();
        }

        validate_config(&config)?;
        info!(
            "Loaded configuration from {} ({} word list(s)).",
            path.display(),
            config.word_lists.len()
        );
        Ok(config)
    }

    /// Loads the default configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default detector configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: DetectorConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive.unwrap_or(false)
    }

    pub fn noise(&self) -> impl Iterator<Item = char> + '_ {
        self.noise_characters.as_deref().unwrap_or_default().chars()
    }

    pub fn replacement(&self) -> &str {
        self.replacement.as_deref().unwrap_or(DEFAULT_REPLACEMENT)
    }
}

/// Merges a user configuration over the defaults.
///
/// Scalars set by the user win; word lists are concatenated in order with
/// duplicates dropped.
pub fn merge_config(default_config: DetectorConfig, user_config: Option<DetectorConfig>) -> DetectorConfig {
    let Some(user_cfg) = user_config else {
        debug!("merge_config called without a user config; using defaults.");
        return default_config;
    };

    let mut merged = default_config;

    if let Some(case_insensitive) = user_cfg.case_insensitive {
        debug!("Overriding case_insensitive with user value: {}", case_insensitive);
        merged.case_insensitive = Some(case_insensitive);
    }
    if let Some(noise) = user_cfg.noise_characters {
        debug!("Overriding noise characters with {} user value(s).", noise.chars().count());
        merged.noise_characters = Some(noise);
    }
    if let Some(replacement) = user_cfg.replacement {
        debug!("Overriding replacement with user value: '{}'", replacement);
        merged.replacement = Some(replacement);
    }

    let mut seen: HashSet<PathBuf> = merged.word_lists.iter().cloned().collect();
    for list in user_cfg.word_lists {
        if seen.insert(list.clone()) {
            merged.word_lists.push(list);
        }
    }

    debug!("Final word list count after merge: {}", merged.word_lists.len());
    merged
}

/// Validates a configuration, collecting every problem before failing.
pub fn validate_config(config: &DetectorConfig) -> Result<(), SensiwordError> {
    let mut errors = Vec::new();

    if config.replacement().contains(['\n', '\r']) {
        errors.push("`replacement` must not contain line breaks.".to_string());
    }

    for list in &config.word_lists {
        if list.as_os_str().is_empty() {
            errors.push("`word_lists` contains an empty path.".to_string());
        }
    }

    let alphanumeric: String = config.noise().filter(|c| c.is_alphanumeric()).collect();
    if !alphanumeric.is_empty() {
        warn!(
            "Noise characters include alphanumerics ('{}'); words containing them may match unexpectedly.",
            alphanumeric
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SensiwordError::InvalidConfig(errors.join("\n")))
    }
}
