// synmark-core/src/engine.rs
//! Defines the core AnnotationEngine trait.
//!
//! An engine owns a set of compiled rules and the annotation options, finds
//! rule matches in a document, and renders the annotated document. The CLI
//! and the headless helpers only talk to this trait.
//!
//! Documents are raw bytes: offsets are byte offsets and bytes that are not
//! valid UTF-8 are copied to the output unchanged.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};

use crate::compiler::CompiledRules;
use crate::config::AnnotateOptions;
use crate::overlay::Overlay;
use crate::render::render;
use crate::rule_match::RuleMatch;

/// A trait that defines the core functionality of an annotation engine.
pub trait AnnotationEngine {
    /// Finds every non-empty match of every rule.
    ///
    /// Matches are grouped by rule, in rule order, and in document order
    /// within one rule.
    fn find_matches(&self, content: &[u8]) -> Result<Vec<RuleMatch>>;

    /// Returns the compiled rules used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the engine's options.
    fn options(&self) -> &AnnotateOptions;

    /// Builds the overlay for `content`: rule tags in rule order, then
    /// line-break markers if enabled.
    fn build_overlay(&self, content: &[u8]) -> Result<Overlay<'_>> {
        let rules = self.compiled_rules();
        let matches = self.find_matches(content)?;

        let mut overlay = Overlay::new();
        for group in matches.chunk_by(|a, b| a.rule_index == b.rule_index) {
            let rule_index = group[0].rule_index;
            let rule = rules
                .rules
                .get(rule_index)
                .with_context(|| format!("Match refers to unknown rule index {rule_index}"))?;
            overlay.apply_rule_matches(rule, group.iter().copied());
        }
        if self.options().insert_line_breaks {
            overlay.insert_line_breaks(content);
        }
        Ok(overlay)
    }

    /// Annotates a byte document and returns the rendered markup.
    fn annotate_bytes(&self, content: &[u8]) -> Result<Vec<u8>> {
        let overlay = self.build_overlay(content)?;
        Ok(render(content, &overlay))
    }

    /// Annotates a UTF-8 document and returns the rendered markup.
    fn annotate(&self, content: &str) -> Result<String> {
        let rendered = self.annotate_bytes(content.as_bytes())?;
        String::from_utf8(rendered).context("Rendered markup is not valid UTF-8")
    }
}
