//! overlay.rs - Offset-keyed accumulation of opening and closing tags.
//!
//! Every rule contributes tags independently; the overlay keeps them per byte
//! offset, in registration order, so the renderer can interleave all of them
//! in one forward pass without ever reordering the document text.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;

use log::debug;

use crate::compiler::CompiledRule;
use crate::rule_match::RuleMatch;
use crate::style::{LINE_BREAK, Tag};

/// Tags registered at one offset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagSlot<'a> {
    /// Closing tags in registration order (rendered reversed).
    pub closing: Vec<Tag<'a>>,
    /// Opening tags in registration order.
    pub opening: Vec<Tag<'a>>,
}

/// The ordered offset map for one document.
#[derive(Debug, Default, Clone)]
pub struct Overlay<'a> {
    slots: BTreeMap<usize, TagSlot<'a>>,
}

impl<'a> Overlay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an opening tag at `offset`.
    pub fn register_open(&mut self, offset: usize, tag: Tag<'a>) {
        self.slots.entry(offset).or_default().opening.push(tag);
    }

    /// Appends a closing tag at `offset`.
    pub fn register_close(&mut self, offset: usize, tag: Tag<'a>) {
        self.slots.entry(offset).or_default().closing.push(tag);
    }

    /// Registers one open/close pair per style of `rule` for every match.
    ///
    /// Empty matches are skipped.
    pub fn apply_rule_matches<I>(&mut self, rule: &'a CompiledRule, matches: I)
    where
        I: IntoIterator<Item = RuleMatch>,
    {
        for m in matches.into_iter().filter(|m| !m.is_empty()) {
            for style in &rule.styles {
                self.register_open(m.start, Tag::open(style));
                self.register_close(m.end, Tag::close(style));
            }
        }
    }

    /// Registers a self-closing line-break marker at every `\n` of `document`.
    pub fn insert_line_breaks(&mut self, document: &[u8]) {
        let mut count = 0usize;
        for (offset, _) in document.iter().enumerate().filter(|(_, b)| **b == b'\n') {
            self.register_open(offset, Tag::open(&LINE_BREAK));
            count += 1;
        }
        debug!("Inserted {} line-break marker(s).", count);
    }

    /// Number of distinct offsets holding at least one tag.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, offset: usize) -> Option<&TagSlot<'a>> {
        self.slots.get(&offset)
    }

    /// Slots in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TagSlot<'a>)> + '_ {
        self.slots.iter().map(|(offset, slot)| (*offset, slot))
    }
}
