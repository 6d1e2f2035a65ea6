//! Match spans produced by running compiled rules over a document, plus the
//! debug-logging helpers used while scanning.

use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    /// Whether matched text may be logged in full at debug level.
    static ref FULL_TEXT_DEBUG_ALLOWED: bool = {
        std::env::var("SYNMARK_DEBUG_FULL_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One non-empty match of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleMatch {
    /// Index of the rule in its `CompiledRules`.
    pub rule_index: usize,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl RuleMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched bytes of `document`.
    pub fn text<'a>(&self, document: &'a [u8]) -> &'a [u8] {
        &document[self.start..self.end]
    }
}

/// Shortens `s` for log output.
pub fn preview_text(s: &str) -> String {
    const MAX_CHARS: usize = 16;
    let count = s.chars().count();
    if count <= MAX_CHARS {
        s.escape_debug().to_string()
    } else {
        let head: String = s.chars().take(MAX_CHARS).collect();
        format!("{}... [{} chars]", head.escape_debug(), count)
    }
}

fn get_loggable_content(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if *FULL_TEXT_DEBUG_ALLOWED {
        text.escape_debug().to_string()
    } else {
        preview_text(&text)
    }
}

pub fn log_rule_match_debug(module_path: &str, line_number: usize, m: &RuleMatch, document: &[u8]) {
    debug!(
        "{} Rule at line {} matched {}..{}: '{}'",
        module_path,
        line_number,
        m.start,
        m.end,
        get_loggable_content(m.text(document))
    );
}
