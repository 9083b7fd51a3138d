//! Splitting a value-list row into its binding columns.
//!
//! Every binding in a ZMK `bindings` list starts with `&` (`&kp A`, `&mt LCTRL ESC`,
//! `&trans`), so a column is everything from one `&` up to the next `&` or the end
//! of the line. Whitespace inside a column is normalised so that tokens compare
//! equal regardless of how the source was aligned.

/// Character that begins every binding token.
pub const SENTINEL: char = '&';

#[must_use]
/// Split a line into `&`-prefixed tokens in left-to-right order.
///
/// Text before the first `&` is discarded. Each token is trimmed and has its
/// internal whitespace runs collapsed to a single space. A bare `&` with nothing
/// after it before the next marker is dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let Some(first) = trimmed.find(SENTINEL) else {
        return Vec::new();
    };

    trimmed[first + SENTINEL.len_utf8()..]
        .split(SENTINEL)
        .filter(|column| !column.trim().is_empty())
        .map(|column| {
            let token = format!("{SENTINEL}{column}");
            token.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/tokens.rs"]
mod tests;
