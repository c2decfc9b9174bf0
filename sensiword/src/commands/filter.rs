//! The `filter` command: redacts sensitive words from the input.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Read, Write};

use sensiword_core::DetectionEngine;

/// Options for the filter runner.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Per-character replacement; the engine's default when `None`.
    pub replacement: Option<String>,
    /// Filter and flush one line at a time instead of reading the whole input.
    pub line_buffered: bool,
}

/// Filters everything read from `reader` into `writer`.
///
/// In whole-input mode matches may span line breaks; in line-buffered mode
/// each line is scanned on its own and flushed immediately.
pub fn run_filter<R: BufRead, W: Write>(
    engine: &dyn DetectionEngine,
    mut reader: R,
    writer: &mut W,
    opts: &FilterOptions,
) -> Result<()> {
    info!("Starting filter operation.");
    let replacement = opts.replacement.as_deref();

    if opts.line_buffered {
        let mut line = String::new();
        let mut lines = 0usize;
        loop {
            line.clear();
            if reader.read_line(&mut line).context("Failed to read input line")? == 0 {
                break;
            }
            let body = line.trim_end_matches(['\n', '\r']);
            let ending = &line[body.len()..];
            write!(writer, "{}{}", engine.filter(body, replacement), ending)?;
            writer.flush()?;
            lines += 1;
        }
        debug!("Filtered {} line(s) in line-buffered mode.", lines);
    } else {
        let mut input = String::new();
        reader.read_to_string(&mut input).context("Failed to read input")?;
        let filtered = engine.filter(&input, replacement);
        debug!(
            "Content filtered. Original length: {}, filtered length: {}",
            input.len(),
            filtered.len()
        );
        writer.write_all(filtered.as_bytes())?;
        writer.flush()?;
    }

    info!("Filter operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensiword_core::{Detector, DetectorConfig};
    use std::io::Cursor;

    fn detector() -> Detector {
        let detector = Detector::new(&DetectorConfig::default());
        detector.add_words(&["he", "she", "hers", "his"]);
        detector
    }

    #[test]
    fn test_whole_input_keeps_trailing_newline() -> Result<()> {
        let mut out = Vec::new();
        run_filter(&detector(), Cursor::new("ahishers\n"), &mut out, &FilterOptions::default())?;
        assert_eq!(String::from_utf8(out)?, "a*******\n");
        Ok(())
    }

    #[test]
    fn test_line_buffered_preserves_line_endings() -> Result<()> {
        let opts = FilterOptions {
            replacement: Some("#".to_string()),
            line_buffered: true,
        };
        let mut out = Vec::new();
        run_filter(&detector(), Cursor::new("ahishers\r\nclean\nshe"), &mut out, &opts)?;
        assert_eq!(String::from_utf8(out)?, "a#######\r\nclean\n###");
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        let mut out = Vec::new();
        run_filter(&detector(), Cursor::new(""), &mut out, &FilterOptions::default())?;
        assert!(out.is_empty());
        Ok(())
    }
}
