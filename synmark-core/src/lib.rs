// synmark-core/src/lib.rs
//! # synmark Core Library
//!
//! `synmark-core` annotates plain text with HTML-like style tags. A rule file
//! pairs patterns, written in a small pattern dialect, with style lists; every
//! match of a rule is wrapped in that rule's tags.
//!
//! ## Modules
//!
//! * `compiler`: Parses rule lines and translates dialect patterns to `regex` syntax.
//! * `style`: Style descriptors and their markup.
//! * `engine`: Defines the `AnnotationEngine` trait.
//! * `engines`: Concrete implementations of `AnnotationEngine`.
//! * `overlay`: The offset-keyed map of opening and closing tags.
//! * `render`: Renders a document and its overlay.
//! * `config`: Rule sources and annotation options.
//! * `headless`: One-shot convenience wrapper.
//! * `errors`: The library's error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use synmark_core::{headless_annotate_string, AnnotateOptions};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let rules = "fn\tbold\n%d+\tcolor:0000FF\n";
//!     let out = headless_annotate_string(rules, "fn f() { 1 }", AnnotateOptions::default())?;
//!     assert_eq!(out, "<b>fn</b> f() { <font color=#0000FF>1</font> }");
//!     Ok(())
//! }
//! ```
//!
//! ## Rule Dialect
//!
//! See [`compiler::translator`] for the full table. In short: `.` concatenates,
//! `|` alternates, `*` and `+` repeat, `( )` group, `!x` negates a single
//! character, and `%x` selects a character class (`%d`, `%s`, `%w`, ...).
//!
//! ## Error Handling
//!
//! Compilation failures are reported as [`SynmarkError`]; orchestration layers
//! return `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod overlay;
pub mod render;
pub mod rule_match;
pub mod style;

/// Re-exports the rule compiler entry points.
pub use compiler::{compile_line, compile_rules, translate, CompiledRule, CompiledRules};

/// Re-exports configuration types.
pub use config::{AnnotateOptions, RuleSource};

/// Re-exports the engine trait and its regex implementation.
pub use engine::AnnotationEngine;
pub use engines::regex_engine::RegexEngine;

/// Re-exports the error type and its classification.
pub use errors::{ErrorKind, SynmarkError};

/// Re-exports the one-shot helper.
pub use headless::headless_annotate_string;

pub use overlay::{Overlay, TagSlot};
pub use render::render;
pub use rule_match::RuleMatch;
pub use style::{StyleDescriptor, Tag};
