// synmark-core/src/engines/regex_engine.rs
//! An `AnnotationEngine` implementation backed by `regex::bytes`.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::compiler::{CompiledRule, CompiledRules};
use crate::config::{AnnotateOptions, RuleSource};
use crate::engine::AnnotationEngine;
use crate::rule_match::{log_rule_match_debug, RuleMatch};

#[derive(Debug, Clone)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
    options: AnnotateOptions,
}

impl RegexEngine {
    pub fn new(source: &RuleSource) -> Result<Self> {
        Self::with_options(source, AnnotateOptions::default())
    }

    pub fn with_options(source: &RuleSource, options: AnnotateOptions) -> Result<Self> {
        let compiled_rules = source
            .compile()
            .context("Failed to compile rules for RegexEngine")?;
        Ok(Self::from_compiled(compiled_rules, options))
    }

    pub fn from_compiled(compiled_rules: CompiledRules, options: AnnotateOptions) -> Self {
        Self {
            compiled_rules,
            options,
        }
    }

    /// Runs one rule over the whole document.
    fn scan_rule(rule_index: usize, rule: &CompiledRule, content: &[u8]) -> Vec<RuleMatch> {
        let matches: Vec<RuleMatch> = rule
            .regex
            .find_iter(content)
            .filter(|m| !m.is_empty())
            .map(|m| RuleMatch {
                rule_index,
                start: m.start(),
                end: m.end(),
            })
            .collect();

        for m in &matches {
            log_rule_match_debug(module_path!(), rule.line_number, m, content);
        }
        debug!(
            "Rule '{}' (line {}) matched {} time(s).",
            rule.source_pattern,
            rule.line_number,
            matches.len()
        );
        matches
    }
}

impl AnnotationEngine for RegexEngine {
    fn find_matches(&self, content: &[u8]) -> Result<Vec<RuleMatch>> {
        Ok(self
            .compiled_rules
            .iter()
            .enumerate()
            .flat_map(|(index, rule)| Self::scan_rule(index, rule, content))
            .collect())
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn options(&self) -> &AnnotateOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rules: &str, br: bool) -> RegexEngine {
        let source: RuleSource = rules.parse().unwrap();
        RegexEngine::with_options(&source, AnnotateOptions::default().with_line_breaks(br)).unwrap()
    }

    #[test]
    fn single_bold_match() {
        assert_eq!(engine("b\tbold", false).annotate("abc").unwrap(), "a<b>b</b>c");
    }

    #[test]
    fn coinciding_spans_nest_by_rule_order() {
        let e = engine("ab\tbold\nab\titalic", false);
        assert_eq!(e.annotate("ab").unwrap(), "<b><i>ab</i></b>");
    }

    #[test]
    fn line_breaks_are_inserted_before_newlines() {
        assert_eq!(engine("", true).annotate("x\ny").unwrap(), "x<br />\ny");
    }

    #[test]
    fn empty_matches_are_dropped() {
        let e = engine("x*\tbold", false);
        assert!(e.find_matches(b"abc").unwrap().is_empty());
        assert_eq!(e.annotate("abc").unwrap(), "abc");
    }

    #[test]
    fn matches_are_global_and_non_overlapping() {
        let e = engine("aa\tunderline", false);
        let matches = e.find_matches(b"aaaaa").unwrap();
        assert_eq!(
            matches.iter().map(|m| (m.start, m.end)).collect::<Vec<_>>(),
            vec![(0, 2), (2, 4)]
        );
        assert_eq!(e.annotate("aaaaa").unwrap(), "<u>aa</u><u>aa</u>a");
    }

    #[test]
    fn matches_are_grouped_by_rule() {
        let e = engine("b\tbold\na\titalic", false);
        let rule_indexes: Vec<usize> = e.find_matches(b"abab").unwrap().iter().map(|m| m.rule_index).collect();
        assert_eq!(rule_indexes, vec![0, 0, 1, 1]);
    }

    #[test]
    fn non_utf8_bytes_are_scanned_around() {
        let e = engine("caf\tbold\n!%s+\titalic", false);
        let doc = b"caf\xe9 ok";
        let spans: Vec<(usize, usize, usize)> =
            e.find_matches(doc).unwrap().iter().map(|m| (m.rule_index, m.start, m.end)).collect();
        assert_eq!(spans, vec![(0, 0, 3), (1, 0, 3), (1, 5, 7)]);
        assert_eq!(e.annotate_bytes(doc).unwrap(), b"<b><i>caf</i></b>\xe9 <i>ok</i>");
    }

    #[test]
    fn compile_failure_is_reported() {
        let source: RuleSource = "a(\tbold".parse().unwrap();
        assert!(RegexEngine::new(&source).is_err());
    }
}
