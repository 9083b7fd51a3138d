//! Configuration to acknowledge keyboard-specific names as well as set defaults.
//!
//! Specifically, we try to find a keymap-expand.toml, and if present we load settings from
//! there. The defaults describe the Corne 36 to 40 key conversion: widen the first two rows
//! of every layer in `config/corne_choc_pro.keymap` and point the physical layout at
//! `&default_layout`.

use crate::error::ExpandError;
use facet::Facet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "keymap-expand.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from keymap-expand.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "config/corne_choc_pro.keymap".to_string())]
    /// Keymap file rewritten when no path is given on the command line.
    pub default_path: String,
    #[facet(default = "keymap".to_string())]
    /// Keyword introducing the section whose value-lists are rewritten.
    pub section_keyword: String,
    #[facet(default = "bindings".to_string())]
    /// Label of the value-lists holding one layer's bindings.
    pub list_label: String,
    #[facet(default = vec!["&trans".to_string(), "&trans".to_string()])]
    /// Tokens spliced into each eligible row, in order.
    pub insert_tokens: Vec<String>,
    #[facet(default = "midpoint".to_string())]
    /// Where the tokens go: `midpoint` or `end`.
    pub placement: String,
    #[facet(default = false)]
    /// Treat fillers just left of the midpoint as already inserted, so reruns are a no-op.
    pub accept_shifted_fillers: bool,
    #[facet(default = 2)]
    /// Number of rows that receive the tokens.
    pub row_limit: usize,
    #[facet(default = false)]
    /// Restart the row count at each value-list instead of once per section.
    pub reset_rows_per_list: bool,
    #[facet(default = "zmk,physical-layout".to_string())]
    /// Attribute whose reference is normalised.
    pub layout_attribute: String,
    #[facet(default = "foostan_corne_5col_layout".to_string())]
    /// Reference replaced wherever it is assigned to the attribute.
    pub layout_from: String,
    #[facet(default = "default_layout".to_string())]
    /// Reference written in its place.
    pub layout_to: String,
}

impl Config {
    /// The built-in settings, as if an empty file had been loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the field defaults cannot be materialised.
    pub fn defaults() -> Result<Self, ExpandError> {
        Self::parse("")
    }

    /// Parse settings from TOML text, defaulting any field that is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::Config`] if the text is not valid for this schema.
    pub fn parse(contents: &str) -> Result<Self, ExpandError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| ExpandError::Config(e.to_string()))
    }

    /// Load configuration from `path`, or from keymap-expand.toml if present.
    ///
    /// An explicit path must exist; the implicit file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be read cannot be, or fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ExpandError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Self::defaults(),
            Err(source) => Err(ExpandError::Io { path, source }),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
