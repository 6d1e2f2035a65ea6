// File: synmark-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive annotation of a string.

use anyhow::Result;

use crate::config::{AnnotateOptions, RuleSource};
use crate::engine::AnnotationEngine;
use crate::engines::regex_engine::RegexEngine;

/// Compiles `rules`, annotates `content` and returns the rendered markup.
///
/// Nothing is rendered if any rule fails to compile.
///
/// # Arguments
///
/// * `rules` - The rule file contents, one rule per non-blank line.
/// * `content` - The document to annotate.
/// * `options` - Annotation options (line-break insertion).
pub fn headless_annotate_string(rules: &str, content: &str, options: AnnotateOptions) -> Result<String> {
    let source: RuleSource = rules.parse()?;
    let engine = RegexEngine::with_options(&source, options)?;
    engine.annotate(content)
}
