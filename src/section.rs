//! Section location by brace matching.
//!
//! A section is the block that follows a keyword in the keymap source, e.g.
//! `keymap { compatible = "zmk,keymap"; base { ... }; nav { ... }; };`. Layers are
//! themselves braced blocks, so the end of the section is found with a depth
//! counter rather than by looking for the next closing brace. Offsets are byte
//! positions into the document and always land on ASCII characters, so they are
//! valid slice boundaries.

use crate::error::SectionFault;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Byte coordinates of a located section within its document.
pub struct SectionSpan {
    /// Start of the first occurrence of the keyword.
    pub keyword_start: usize,
    /// Position of the `{` that opens the section.
    pub open_brace: usize,
    /// Position of the `}` that closes it.
    pub close_brace: usize,
}

impl SectionSpan {
    #[must_use]
    /// Byte range strictly between the two braces.
    pub fn body_range(&self) -> Range<usize> {
        self.open_brace + 1..self.close_brace
    }

    #[must_use]
    /// Text strictly between the two braces.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not the document the span was located in.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_range()]
    }
}

/// Find the first `keyword` and the balanced brace block that follows it.
///
/// The scan starts at the first `{` after the keyword with a depth of one and ends
/// at the `}` that brings the depth back to zero.
///
/// # Errors
///
/// Returns the [`SectionFault`] describing which step failed: the keyword is
/// absent, no `{` follows it, or the text ends with braces still open.
pub fn locate_section(text: &str, keyword: &str) -> Result<SectionSpan, SectionFault> {
    let keyword_start = text.find(keyword).ok_or(SectionFault::MissingKeyword)?;
    let open_brace = text[keyword_start..]
        .find('{')
        .map(|offset| keyword_start + offset)
        .ok_or(SectionFault::MissingOpenBrace)?;

    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open_brace..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(SectionSpan {
                        keyword_start,
                        open_brace,
                        close_brace: open_brace + offset,
                    });
                }
            }
            _ => {}
        }
    }

    Err(SectionFault::Unbalanced)
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
