//! Rewriting of the physical layout reference.
//!
//! Boards that gained keys ship a new physical layout, and the keymap's `chosen`
//! node has to point at it. The substitution is anchored on the attribute name so
//! that other properties mentioning the old layout keep their value.

use regex::{Captures, Regex};
use std::borrow::Cow;

#[derive(Clone, Debug)]
/// Substitution of `attribute = &old;` with `attribute = &new;` across a document.
pub struct ReferenceRewrite {
    pattern: Regex,
    replacement: String,
}

impl ReferenceRewrite {
    /// Build the rewrite. All three names are matched literally, and the `&` before
    /// `old` is optional in the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern fails to compile.
    pub fn new(attribute: &str, old: &str, new: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"({}\s*=\s*)&?{}(\s*;)",
            regex::escape(attribute),
            regex::escape(old)
        ))?;
        Ok(Self {
            pattern,
            replacement: format!("&{new}"),
        })
    }

    #[must_use]
    /// Number of occurrences [`Self::apply`] would replace.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    #[must_use]
    /// Replace every occurrence, keeping the surrounding whitespace and semicolon.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], self.replacement, &caps[2])
        })
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
