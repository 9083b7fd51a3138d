//! The transform drives one expansion run from file contents to file contents.
//!
//! The run moves through a fixed sequence of [`Stage`]s. Everything up to
//! [`Stage::RowsRewritten`] is a pure function of the input text ([`Transform::apply`]),
//! and the file is only overwritten once that has succeeded ([`Transform::run`]), so a
//! failed run never leaves a half-rewritten keymap behind.

use crate::config::Config;
use crate::error::ExpandError;
use crate::layout::ReferenceRewrite;
use crate::row::{reconstruct_line, rewrite_row, MidpointGuard, Placement, RowOutcome};
use crate::section::locate_section;
use crate::tokens::{tokenize, SENTINEL};
use crate::value_list::ValueListPattern;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Checkpoints of a run, reported in debug logs as they are reached.
pub enum Stage {
    /// The document has been read.
    Loaded,
    /// The layout reference has been rewritten across the whole document.
    ReferenceNormalized,
    /// The section's braces have been matched.
    SectionLocated,
    /// The value-lists inside the section have been found.
    ListsExtracted,
    /// Eligible rows have received their fillers.
    RowsRewritten,
    /// The result has been written back.
    Persisted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counts of what a run changed.
pub struct Report {
    /// Layout references replaced.
    pub references: usize,
    /// Value-lists found in the section.
    pub lists: usize,
    /// Rows that received fillers.
    pub rows_inserted: usize,
    /// Eligible rows that already had them.
    pub rows_already_present: usize,
}

#[derive(Debug)]
/// Rewritten document text alongside what changed.
pub struct Expansion {
    /// The full document after every pass.
    pub text: String,
    /// Counts gathered while rewriting.
    pub report: Report,
}

/// Number of rows still allowed to be rewritten, threaded through the list scan.
struct RowBudget {
    used: usize,
    limit: usize,
}

impl RowBudget {
    fn new(limit: usize) -> Self {
        Self { used: 0, limit }
    }

    fn has_room(&self) -> bool {
        self.used < self.limit
    }

    fn consume(&mut self) {
        self.used += 1;
    }

    fn reset(&mut self) {
        self.used = 0;
    }
}

#[derive(Clone, Debug)]
/// A configured expansion, ready to run over any number of documents.
pub struct Transform {
    keyword: String,
    lists: ValueListPattern,
    reference: ReferenceRewrite,
    fillers: Vec<String>,
    placement: Placement,
    guard: MidpointGuard,
    row_limit: usize,
    reset_rows_per_list: bool,
}

impl Transform {
    /// Compile the patterns and settings described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the placement is unknown or a pattern fails to compile.
    pub fn from_config(config: &Config) -> Result<Self, ExpandError> {
        Ok(Self {
            keyword: config.section_keyword.clone(),
            lists: ValueListPattern::new(&config.list_label)?,
            reference: ReferenceRewrite::new(
                &config.layout_attribute,
                &config.layout_from,
                &config.layout_to,
            )?,
            fillers: config.insert_tokens.clone(),
            placement: config.placement.parse()?,
            guard: if config.accept_shifted_fillers {
                MidpointGuard::Shifted
            } else {
                MidpointGuard::Exact
            },
            row_limit: config.row_limit,
            reset_rows_per_list: config.reset_rows_per_list,
        })
    }

    /// Rewrite `text` in memory.
    ///
    /// The layout reference is normalised over the whole document, then the section
    /// is located and the first rows of its value-lists receive the fillers. Only the
    /// list bodies change; the text around and between them is copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::SectionNotFound`] if the section cannot be delimited.
    pub fn apply(&self, text: &str) -> Result<Expansion, ExpandError> {
        let mut report = Report {
            references: self.reference.count(text),
            ..Report::default()
        };
        let normalized = self.reference.apply(text);
        tracing::debug!(stage = ?Stage::ReferenceNormalized, references = report.references);

        let span = locate_section(&normalized, &self.keyword).map_err(|fault| {
            ExpandError::SectionNotFound {
                keyword: self.keyword.clone(),
                fault,
            }
        })?;
        tracing::debug!(
            stage = ?Stage::SectionLocated,
            open = span.open_brace,
            close = span.close_brace
        );

        let inside = span.body(&normalized);
        let lists = self.lists.find_all(inside);
        report.lists = lists.len();
        tracing::debug!(stage = ?Stage::ListsExtracted, lists = lists.len());
        if lists.is_empty() {
            tracing::warn!(keyword = %self.keyword, "section holds no value-lists");
        }

        let mut budget = RowBudget::new(self.row_limit);
        let mut section = String::with_capacity(inside.len() + 64);
        let mut cursor = 0;
        for list in &lists {
            if self.reset_rows_per_list {
                budget.reset();
            }
            section.push_str(&inside[cursor..list.body.start]);
            let rewritten = self.rewrite_body(list.body_text(inside), &mut budget, &mut report);
            section.push_str(&rewritten);
            cursor = list.body.end;
        }
        section.push_str(&inside[cursor..]);
        tracing::debug!(
            stage = ?Stage::RowsRewritten,
            inserted = report.rows_inserted,
            already_present = report.rows_already_present
        );

        let body = span.body_range();
        let mut out = String::with_capacity(normalized.len() + section.len() - inside.len());
        out.push_str(&normalized[..body.start]);
        out.push_str(&section);
        out.push_str(&normalized[body.end..]);

        Ok(Expansion { text: out, report })
    }

    /// Read the keymap at `path`, rewrite it and write it back in place.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::FileNotFound`] if there is no file at `path`, any error
    /// from [`Self::apply`], or an I/O error from the read or write. The file is only
    /// written when every pass has succeeded.
    pub fn run(&self, path: &Path) -> Result<Report, ExpandError> {
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ExpandError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ExpandError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        tracing::debug!(stage = ?Stage::Loaded, path = %path.display(), bytes = text.len());

        let expansion = self.apply(&text)?;

        fs::write(path, &expansion.text).map_err(|source| ExpandError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(stage = ?Stage::Persisted, path = %path.display());

        Ok(expansion.report)
    }

    fn rewrite_body(&self, body: &str, budget: &mut RowBudget, report: &mut Report) -> String {
        let mut lines = Vec::new();
        for line in body.split('\n') {
            if !budget.has_room() || !line.contains(SENTINEL) {
                lines.push(line.to_owned());
                continue;
            }
            budget.consume();

            let mut tokens = tokenize(line);
            match rewrite_row(&mut tokens, &self.fillers, self.placement, self.guard) {
                RowOutcome::Inserted => report.rows_inserted += 1,
                RowOutcome::AlreadyPresent => report.rows_already_present += 1,
            }
            tracing::trace!(columns = tokens.len(), row = %line.trim(), "rewrote row");
            lines.push(reconstruct_line(line, &tokens));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "tests/transform.rs"]
mod tests;
