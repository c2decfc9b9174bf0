//! scanner.rs - Single-pass, noise-tolerant scanning of text against a [`Trie`].
//!
//! The scanner walks one active path through the trie. When a candidate fails
//! it restarts one code point after where that candidate began, so every
//! starting offset is tried exactly once and overlapping hits are all found.
//! Noise characters are skipped only while a candidate is in progress.
//!
//! Everything here is a pure function over an explicit trie value. Locking is
//! the caller's concern (see [`crate::detector::Detector`]).
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;

use crate::match_span::{log_match_span_debug, log_redaction_action_debug, MatchSpan};
use crate::trie::{Trie, TrieNode};

/// Replacement used by [`filter`] when the caller does not supply one.
pub const DEFAULT_REPLACEMENT: &str = "*";

/// Lazy iterator over the [`MatchSpan`]s of one text, in discovery order
/// (non-decreasing `byte_start`).
#[derive(Debug)]
pub struct Matches<'t> {
    trie: &'t Trie,
    text: &'t str,
    active: &'t TrieNode,
    hit: String,
    window_start: usize,
    pos: usize,
    // characters before `window_start`
    char_offset: usize,
    // characters consumed by the current candidate, noise included
    consumed: usize,
    first_rune_size: usize,
}

impl<'t> Matches<'t> {
    pub fn new(trie: &'t Trie, text: &'t str) -> Self {
        Self {
            trie,
            text,
            active: trie.root(),
            hit: String::new(),
            window_start: 0,
            pos: 0,
            char_offset: 0,
            consumed: 0,
            first_rune_size: 0,
        }
    }

    fn in_candidate(&self) -> bool {
        self.first_rune_size > 0
    }

    /// Abandons the current candidate. With a candidate in progress, scanning
    /// resumes right after its first consumed code point; otherwise the window
    /// moves past the single character at its start.
    fn restart(&mut self, size: usize) {
        let step = if self.in_candidate() {
            self.first_rune_size
        } else {
            size
        };
        self.window_start += step;
        self.char_offset += 1;
        self.pos = self.window_start;
        self.active = self.trie.root();
        self.hit.clear();
        self.consumed = 0;
        self.first_rune_size = 0;
    }
}

impl<'t> Iterator for Matches<'t> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(raw) = self.text[self.pos..].chars().next() else {
                // A candidate still open at the end of the text may hide a
                // match that starts inside it.
                if self.in_candidate() {
                    self.restart(0);
                    continue;
                }
                return None;
            };
            let size = raw.len_utf8();
            let c = self.trie.fold(raw);
            let active = self.active;

            if let Some(child) = active.children.get(&c) {
                self.hit.push(c);
                self.pos += size;
                self.consumed += 1;
                if self.first_rune_size == 0 {
                    self.first_rune_size = size;
                }
                self.active = child;

                if child.is_word_end {
                    let span = MatchSpan {
                        char_start: self.char_offset + 1,
                        char_end: self.char_offset + self.consumed,
                        byte_start: self.window_start,
                        byte_end: self.pos,
                        hit_word: self.hit.clone(),
                        matched: self.text[self.window_start..self.pos].to_string(),
                    };
                    log_match_span_debug(module_path!(), &span);
                    return Some(span);
                }
            } else if self.in_candidate() && self.trie.is_noise(c) {
                self.pos += size;
                self.consumed += 1;
            } else {
                self.restart(size);
            }
        }
    }
}

/// Returns every match in `text`, overlapping ones included.
pub fn scan(trie: &Trie, text: &str) -> Vec<MatchSpan> {
    Matches::new(trie, text).collect()
}

/// Returns true if `text` contains at least one dictionary word.
pub fn check(trie: &Trie, text: &str) -> bool {
    Matches::new(trie, text).next().is_some()
}

/// Returns the distinct words hit in `text`, in the order they were first seen.
pub fn search(trie: &Trie, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    Matches::new(trie, text)
        .filter_map(|span| {
            if seen.insert(span.hit_word.clone()) {
                Some(span.hit_word)
            } else {
                None
            }
        })
        .collect()
}

/// A maximal run of overlapping or touching spans, used as one redaction unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedSpan {
    pub char_start: usize,
    pub char_end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
}

impl MergedSpan {
    pub fn char_len(&self) -> usize {
        self.char_end + 1 - self.char_start
    }
}

impl From<&MatchSpan> for MergedSpan {
    fn from(span: &MatchSpan) -> Self {
        Self {
            char_start: span.char_start,
            char_end: span.char_end,
            byte_start: span.byte_start,
            byte_end: span.byte_end,
        }
    }
}

/// Merges spans whose byte ranges overlap or touch.
///
/// `spans` must be ordered by `byte_start`, which is how [`scan`] returns them.
pub fn merge_spans(spans: &[MatchSpan]) -> Vec<MergedSpan> {
    let mut merged: Vec<MergedSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(run) if run.byte_end >= span.byte_start => {
                run.byte_end = run.byte_end.max(span.byte_end);
                run.char_end = run.char_end.max(span.char_end);
            }
            _ => merged.push(MergedSpan::from(span)),
        }
    }
    merged
}

/// Replaces every matched character of `text` with `replacement`.
///
/// Overlapping and adjacent matches are merged first, and each merged run is
/// replaced by `replacement` repeated once per original character. Text with
/// no match is returned unchanged.
pub fn filter(trie: &Trie, text: &str, replacement: Option<&str>) -> String {
    let spans = scan(trie, text);
    if spans.is_empty() {
        return text.to_string();
    }

    let replacement = replacement.unwrap_or(DEFAULT_REPLACEMENT);
    let runs = merge_spans(&spans);
    debug!(
        "{} Merged {} span(s) into {} redaction run(s).",
        module_path!(),
        spans.len(),
        runs.len()
    );

    let mut out = String::with_capacity(text.len());
    let mut last_end = 0usize;
    for run in &runs {
        out.push_str(&text[last_end..run.byte_start]);
        let masked = replacement.repeat(run.char_len());
        log_redaction_action_debug(module_path!(), &text[run.byte_start..run.byte_end], &masked);
        out.push_str(&masked);
        last_end = run.byte_end;
    }
    out.push_str(&text[last_end..]);
    out
}
