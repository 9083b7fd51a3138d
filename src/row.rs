//! Filler insertion for a single binding row.
//!
//! Widening a split layout from five to six columns per half means every affected
//! row gains one key on each side of the split. The row is treated as a sequence of
//! tokens (see [`crate::tokens`]) and the filler tokens are spliced in where the
//! halves meet, then the line is rebuilt with its original indentation.

use crate::error::ExpandError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Where in a row the filler tokens are placed.
pub enum Placement {
    /// Between the two halves, at `floor(len / 2)`.
    #[default]
    Midpoint,
    /// After the last binding of the row.
    End,
}

impl FromStr for Placement {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midpoint" | "middle" => Ok(Self::Midpoint),
            "end" => Ok(Self::End),
            other => Err(ExpandError::Config(format!(
                "unknown placement `{other}` (expected `midpoint` or `end`)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which positions count as "fillers already there" for [`Placement::Midpoint`].
pub enum MidpointGuard {
    /// Only a filler run starting exactly at [`insertion_index`].
    #[default]
    Exact,
    /// Also a run starting up to `ceil(k / 2)` slots earlier, where a previous
    /// insertion of `k` fillers leaves them once the midpoint has moved. Makes
    /// repeated runs a no-op, but skips fresh rows that happen to hold the fillers
    /// just left of the midpoint.
    Shifted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What [`rewrite_row`] did to the tokens.
pub enum RowOutcome {
    /// The fillers were spliced into the row.
    Inserted,
    /// The row already carried the fillers where they would go.
    AlreadyPresent,
}

#[must_use]
/// Index at which fillers are inserted for a row of `len` tokens.
pub fn insertion_index(len: usize) -> usize {
    len / 2
}

/// Splice `fillers` into `tokens` according to `placement`.
///
/// With [`Placement::Midpoint`] the fillers go in at [`insertion_index`], shifting the
/// right half along. A row whose fillers already start at that index is left alone;
/// `guard` decides whether earlier starting positions also count.
pub fn rewrite_row(
    tokens: &mut Vec<String>,
    fillers: &[String],
    placement: Placement,
    guard: MidpointGuard,
) -> RowOutcome {
    match placement {
        Placement::Midpoint => {
            let index = insertion_index(tokens.len());
            let earliest = match guard {
                MidpointGuard::Exact => index,
                MidpointGuard::Shifted => index.saturating_sub(fillers.len().div_ceil(2)),
            };
            let present = (earliest..=index)
                .rev()
                .any(|start| tokens.get(start..start + fillers.len()) == Some(fillers));
            if present {
                return RowOutcome::AlreadyPresent;
            }
            let right = tokens.split_off(index);
            tokens.extend(fillers.iter().cloned());
            tokens.extend(right);
        }
        Placement::End => {
            if tokens.ends_with(fillers) {
                return RowOutcome::AlreadyPresent;
            }
            tokens.extend(fillers.iter().cloned());
        }
    }
    RowOutcome::Inserted
}

#[must_use]
/// Rebuild a row from its tokens, keeping the original line's indentation.
///
/// Tokens are joined with two spaces; any other spacing of the original is lost.
/// A trailing carriage return is carried over so CRLF files stay CRLF.
pub fn reconstruct_line(original: &str, tokens: &[String]) -> String {
    let (line, ending) = match original.strip_suffix('\r') {
        Some(line) => (line, "\r"),
        None => (original, ""),
    };
    let indent = &line[..line.len() - line.trim_start().len()];
    format!("{indent}{}{ending}", tokens.join("  "))
}

#[cfg(test)]
#[path = "tests/row.rs"]
mod tests;
