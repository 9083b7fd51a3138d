//! Failure taxonomy for a keymap expansion run.
//!
//! Every variant is fatal: the run stops at the first one and nothing is written.

use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
/// Why the brace scan could not establish a section span.
pub enum SectionFault {
    /// The section keyword does not occur anywhere in the document.
    #[error("keyword not present")]
    MissingKeyword,
    /// The keyword occurs but no `{` follows it.
    #[error("no opening brace after keyword")]
    MissingOpenBrace,
    /// The text ends before the brace depth returns to zero.
    #[error("unbalanced braces")]
    Unbalanced,
}

#[derive(Debug, thiserror::Error)]
/// Errors surfaced by configuration loading and the transform pipeline.
pub enum ExpandError {
    /// The keymap path does not resolve to an existing file.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// Path given on the command line or taken from the configuration.
        path: PathBuf,
    },
    /// The keyword and brace scan failed.
    #[error("could not locate `{keyword}` section: {fault}")]
    SectionNotFound {
        /// Section keyword that was searched for.
        keyword: String,
        /// Which step of the scan gave up.
        fault: SectionFault,
    },
    /// The configuration file is unreadable or holds an unsupported value.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A search pattern built from configured names failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    /// Reading or writing a file failed for a reason other than absence.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}
