// sensiword-core/src/headless.rs
// File: sensiword-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the detector.

use anyhow::Result;

use crate::config::DetectorConfig;
use crate::detector::Detector;
use crate::engine::DetectionEngine;

/// Builds a detector from `config` (loading its word lists) and filters
/// `content` with the configured replacement.
pub fn headless_filter_string(config: &DetectorConfig, content: &str) -> Result<String> {
    let detector = Detector::from_config(config)?;
    Ok(detector.filter(content, None))
}

/// Like [`headless_filter_string`], but with an explicit dictionary instead of
/// the config's word lists.
pub fn headless_filter_with_words<S: AsRef<str>>(
    config: &DetectorConfig,
    words: &[S],
    content: &str,
) -> String {
    let detector = Detector::new(config);
    detector.add_words(words);
    detector.filter(content, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_headless_filter_string_loads_word_lists() -> Result<()> {
        let mut list = NamedTempFile::new()?;
        writeln!(list, "脑残")?;
        writeln!(list, "tmd")?;
        writeln!(list, "傻X")?;

        let config = DetectorConfig {
            word_lists: vec![list.path().to_path_buf()],
            ..Default::default()
        };
        let out = headless_filter_string(&config, "这篇文章真tmd傻X，脑残，tmd瞎逼带节奏~")?;
        assert_eq!(out, "这篇文章真*****，**，***瞎逼带节奏~");
        Ok(())
    }

    #[test]
    fn test_headless_filter_string_missing_list() {
        let config = DetectorConfig {
            word_lists: vec!["/no/such/list.txt".into()],
            ..Default::default()
        };
        assert!(headless_filter_string(&config, "text").is_err());
    }

    #[test]
    fn test_headless_filter_with_words() {
        let config = DetectorConfig {
            case_insensitive: Some(true),
            ..Default::default()
        };
        assert_eq!(headless_filter_with_words(&config, &["tmd"], "TMD Tmd tmd"), "*** *** ***");
    }
}
