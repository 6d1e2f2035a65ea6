//! compiler - Turns rule-file lines into compiled rules.
//!
//! A rule line has the shape `<pattern><TAB...><style>[,<style>...]`. The
//! pattern is written in the rule dialect and goes through
//! [`translator::translate`] before being handed to the `regex` crate; the
//! style list becomes an ordered `Vec<StyleDescriptor>`.
//!
//! License: MIT OR APACHE 2.0

pub mod translator;

use lazy_static::lazy_static;
use log::debug;
use regex::bytes::{Regex as BytesRegex, RegexBuilder};
use regex::Regex;

use crate::errors::SynmarkError;
use crate::style::StyleDescriptor;

pub use translator::translate;

lazy_static! {
    /// Horizontal whitespace around a comma in the style list is not significant.
    static ref STYLE_SEPARATOR: Regex = Regex::new(r"[\t ]*,[\t ]*").unwrap();
}

/// A single rule, ready to be run against a document.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// The pattern as written in the rule file.
    pub source_pattern: String,
    /// The translated pattern, compiled to run over raw document bytes.
    pub regex: BytesRegex,
    /// Styles in declaration order.
    pub styles: Vec<StyleDescriptor>,
    /// 1-based line of the rule file this rule came from.
    pub line_number: usize,
}

/// All rules of one rule file, in file order.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a CompiledRules {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Splits a rule line into its pattern and style fields.
///
/// The pattern ends at the first tab; the style field starts after the run of
/// tabs that follows it. Both fields must be non-empty.
fn split_rule_line(line: &str) -> Option<(&str, &str)> {
    let (pattern, rest) = line.split_once('\t')?;
    let styles = rest.trim_start_matches('\t');
    if pattern.is_empty() || styles.is_empty() {
        return None;
    }
    Some((pattern, styles))
}

/// Parses a comma-separated style list.
///
/// # Errors
///
/// Returns [`SynmarkError::InvalidStyleToken`] for the first token that is not
/// a valid style, empty tokens included.
pub fn parse_styles(field: &str) -> Result<Vec<StyleDescriptor>, SynmarkError> {
    let normalized = STYLE_SEPARATOR.replace_all(field, ",");
    normalized.split(',').map(StyleDescriptor::parse_token).collect()
}

/// Compiles one rule line.
///
/// Returns `Ok(None)` for blank lines, which are not rules.
///
/// # Errors
///
/// [`SynmarkError::MalformedRuleLine`] when the line has no pattern/style
/// separator, [`SynmarkError::InvalidPatternSyntax`] when the pattern is
/// rejected, [`SynmarkError::InvalidStyleToken`] when a style is invalid. The
/// latter two are wrapped in [`SynmarkError::RuleLine`].
pub fn compile_line(line_number: usize, line: &str) -> Result<Option<CompiledRule>, SynmarkError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (pattern, style_field) =
        split_rule_line(line).ok_or_else(|| SynmarkError::MalformedRuleLine {
            line_number,
            line: line.to_string(),
        })?;

    let translated = translate(pattern).map_err(|e| e.at_line(line_number))?;
    debug!(
        target: "synmark_core::compiler",
        "Line {}: pattern '{}' translated to '{}'",
        line_number, pattern, translated
    );

    let regex = RegexBuilder::new(&translated)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| SynmarkError::invalid_pattern(pattern, e.to_string()).at_line(line_number))?;

    let styles = parse_styles(style_field).map_err(|e| e.at_line(line_number))?;
    debug!(
        target: "synmark_core::compiler",
        "Line {}: rule compiled with {} style(s).",
        line_number,
        styles.len()
    );

    Ok(Some(CompiledRule {
        source_pattern: pattern.to_string(),
        regex,
        styles,
        line_number,
    }))
}

/// Compiles every rule of a rule file, in file order.
///
/// # Errors
///
/// The first failing line aborts compilation; nothing is returned for the
/// lines before it.
pub fn compile_rules(source: &str) -> Result<CompiledRules, SynmarkError> {
    compile_lines(source.lines())
}

/// Same as [`compile_rules`] for lines that were already split.
///
/// # Errors
///
/// See [`compile_rules`].
pub fn compile_lines<'a, I>(lines: I) -> Result<CompiledRules, SynmarkError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rules = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        if let Some(rule) = compile_line(index + 1, line)? {
            rules.push(rule);
        }
    }
    debug!("Finished compiling rules. Total compiled: {}.", rules.len());
    Ok(CompiledRules { rules })
}
