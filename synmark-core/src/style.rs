//! Style descriptors and their markup.
//!
//! A [`StyleDescriptor`] is one entry of a rule's style list (`bold`,
//! `size:3`, `color:FF0000`, ...). It knows how to parse itself from a style
//! token and how to render its opening and closing markup.

use std::fmt::Write as _;

use crate::errors::SynmarkError;

/// One visual style applied to a matched span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleDescriptor {
    Bold,
    Italic,
    Underline,
    Teletype,
    /// Font size, always within `1..=7`.
    Size(u8),
    /// Six hex digits, case preserved as written in the rule file.
    Color(String),
    /// Self-closing line-break marker inserted before each newline.
    LineBreak,
}

/// The marker shared by every line-break tag in an overlay.
pub static LINE_BREAK: StyleDescriptor = StyleDescriptor::LineBreak;

impl StyleDescriptor {
    /// Parses a single, already whitespace-trimmed style token.
    ///
    /// # Errors
    ///
    /// Returns [`SynmarkError::InvalidStyleToken`] for unknown keywords, empty
    /// tokens, sizes outside `1..=7` and colors that are not six hex digits.
    pub fn parse_token(token: &str) -> Result<Self, SynmarkError> {
        let invalid = || SynmarkError::InvalidStyleToken {
            token: token.to_string(),
        };

        match token {
            "bold" => Ok(StyleDescriptor::Bold),
            "italic" => Ok(StyleDescriptor::Italic),
            "underline" => Ok(StyleDescriptor::Underline),
            "teletype" => Ok(StyleDescriptor::Teletype),
            _ => {
                if let Some(value) = token.strip_prefix("size:") {
                    match value.as_bytes() {
                        [digit @ b'1'..=b'7'] => Ok(StyleDescriptor::Size(digit - b'0')),
                        _ => Err(invalid()),
                    }
                } else if let Some(value) = token.strip_prefix("color:") {
                    if value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
                        Ok(StyleDescriptor::Color(value.to_string()))
                    } else {
                        Err(invalid())
                    }
                } else {
                    Err(invalid())
                }
            }
        }
    }

    /// The markup element name for this style.
    pub fn tag_name(&self) -> &'static str {
        match self {
            StyleDescriptor::Bold => "b",
            StyleDescriptor::Italic => "i",
            StyleDescriptor::Underline => "u",
            StyleDescriptor::Teletype => "tt",
            StyleDescriptor::Size(_) | StyleDescriptor::Color(_) => "font",
            StyleDescriptor::LineBreak => "br",
        }
    }

    /// Appends the opening form, attributes included (`<font size=3>`, `<br />`).
    pub fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag_name());
        match self {
            StyleDescriptor::Size(n) => {
                let _ = write!(out, " size={n}");
            }
            StyleDescriptor::Color(hex) => {
                out.push_str(" color=#");
                out.push_str(hex);
            }
            StyleDescriptor::LineBreak => out.push_str(" /"),
            _ => {}
        }
        out.push('>');
    }

    /// Appends the closing form (`</b>`, `</font>`).
    pub fn write_close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(self.tag_name());
        out.push('>');
    }
}

/// A style being opened or closed at some offset of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub style: &'a StyleDescriptor,
    pub closing: bool,
}

impl<'a> Tag<'a> {
    pub fn open(style: &'a StyleDescriptor) -> Self {
        Self { style, closing: false }
    }

    pub fn close(style: &'a StyleDescriptor) -> Self {
        Self { style, closing: true }
    }

    pub fn write_to(&self, out: &mut String) {
        if self.closing {
            self.style.write_close(out);
        } else {
            self.style.write_open(out);
        }
    }
}
