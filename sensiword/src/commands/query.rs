// sensiword/src/commands/query.rs
//! Read-only commands: `detect`, `search`, `match` and `words`.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use sensiword_core::{DetectionEngine, MatchSpan};

/// How `match` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFormat {
    /// One tab-separated line per match.
    Human { color: bool },
    /// A single JSON array.
    Json,
}

impl MatchFormat {
    /// Human-readable output, colored only when stdout is a terminal.
    pub fn detect_human() -> Self {
        MatchFormat::Human {
            color: io::stdout().is_terminal(),
        }
    }
}

/// Prints `true` or `false`. Returns whether anything matched.
pub fn run_detect<W: Write>(engine: &dyn DetectionEngine, text: &str, out: &mut W) -> Result<bool> {
    let hit = engine.detect(text);
    info!("Detection result: {}", hit);
    writeln!(out, "{}", hit)?;
    Ok(hit)
}

/// Prints each distinct hit word on its own line.
pub fn run_search<W: Write>(engine: &dyn DetectionEngine, text: &str, out: &mut W) -> Result<()> {
    let words = engine.search(text);
    info!("Found {} distinct sensitive word(s).", words.len());
    for word in words {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

/// Prints every match with its offsets.
pub fn run_match<W: Write>(
    engine: &dyn DetectionEngine,
    text: &str,
    format: MatchFormat,
    out: &mut W,
) -> Result<()> {
    let spans = engine.find_matches(text);
    info!("Found {} match(es).", spans.len());
    match format {
        MatchFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &spans).context("Failed to serialize matches")?;
            writeln!(out)?;
        }
        MatchFormat::Human { color } => {
            for span in &spans {
                writeln!(out, "{}", format_span(span, color))?;
            }
        }
    }
    Ok(())
}

/// Prints the dictionary, sorted.
pub fn run_words<W: Write>(engine: &dyn DetectionEngine, out: &mut W) -> Result<()> {
    let mut words = engine.words();
    words.sort();
    for word in words {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

fn format_span(span: &MatchSpan, color: bool) -> String {
    let position = format!(
        "chars {}-{}\tbytes {}..{}",
        span.char_start, span.char_end, span.byte_start, span.byte_end
    );
    if color {
        format!(
            "{}\t{}\t{}",
            position.dimmed(),
            span.hit_word.red().bold(),
            span.matched.yellow()
        )
    } else {
        format!("{}\t{}\t{}", position, span.hit_word, span.matched)
    }
}
