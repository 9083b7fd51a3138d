//! Extraction of `label = < ... >;` value-lists from a section body.
//!
//! This is a textual match, not a devicetree parse. The body is the shortest run of
//! text up to the first `>` that is followed by optional whitespace and `;`, so a
//! body that itself contains such a sequence is cut short there. The label is not
//! anchored either: `bindings` also matches inside `sensor-bindings`.

use regex::Regex;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One value-list occurrence, with offsets relative to the searched text.
pub struct ValueList {
    /// The whole `label = < ... >;` match.
    pub span: Range<usize>,
    /// The text between `<` and `>`.
    pub body: Range<usize>,
}

impl ValueList {
    #[must_use]
    /// Text between the angle brackets.
    pub fn body_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body.clone()]
    }
}

#[derive(Clone, Debug)]
/// Compiled matcher for value-lists with a given label.
pub struct ValueListPattern {
    regex: Regex,
}

impl ValueListPattern {
    /// Build the matcher for `label`. The label is matched literally.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern fails to compile.
    pub fn new(label: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"(?s){}\s*=\s*<(.*?)>\s*;", regex::escape(label)))?;
        Ok(Self { regex })
    }

    #[must_use]
    /// All non-overlapping value-lists in `text`, in document order.
    pub fn find_all(&self, text: &str) -> Vec<ValueList> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let body = caps.get(1)?;
                Some(ValueList {
                    span: whole.range(),
                    body: body.range(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/value_list.rs"]
mod tests;
