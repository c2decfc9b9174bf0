//! Provides the match span produced by a scan, plus the PII-aware logging helpers
//! used wherever matched text would otherwise end up in debug output.

use log::debug;
use serde::{Deserialize, Serialize};

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if matched text may
    /// appear verbatim in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SENSIWORD_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One dictionary hit inside a scanned text.
///
/// Character positions are 1-based and inclusive, byte positions are 0-based
/// with an exclusive end. `matched` may be longer than `hit_word` because it
/// includes any noise characters that were skipped inside the match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub char_start: usize,
    pub char_end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
    /// The dictionary word that matched, in its stored (folded) form.
    pub hit_word: String,
    /// The literal slice of the original text covered by the match.
    pub matched: String,
}

impl MatchSpan {
    /// Number of characters of the original text covered by this span.
    pub fn char_len(&self) -> usize {
        self.char_end + 1 - self.char_start
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.byte_start..self.byte_end
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_match_span_debug(module_path: &str, span: &MatchSpan) {
    debug!(
        "{} Found MatchSpan: Word='{}', Original='{}', Chars={}..={}, Bytes={}..{}",
        module_path,
        get_loggable_content(&span.hit_word),
        get_loggable_content(&span.matched),
        span.char_start,
        span.char_end,
        span.byte_start,
        span.byte_end
    );
}

pub fn log_redaction_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    replacement: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        replacement
    );
}
