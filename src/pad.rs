//! Width-aware padding.
//!
//! Padding measures text by visible width, so styled and wide-character
//! content lines up with plain ASCII in the same column.

use serde::{Deserialize, Serialize};

use crate::cells::visible_width;

/// Horizontal alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Pad on the right (default).
    #[default]
    Left,
    /// Split padding; an odd remainder goes to the right.
    Center,
    /// Pad on the left.
    Right,
}

/// Build a run of `n` copies of `ch`.
#[must_use]
pub fn repeat(ch: char, n: usize) -> String {
    std::iter::repeat_n(ch, n).collect()
}

/// Pad `text` to `width` visible columns with `fill`.
///
/// Text that is already `width` columns or wider is returned unchanged; this
/// never truncates. `fill` is assumed to be one column wide.
#[must_use]
pub fn pad(text: &str, width: usize, fill: char, align: Alignment) -> String {
    let current = visible_width(text);
    if current >= width {
        return text.to_string();
    }

    let deficit = width - current;
    match align {
        Alignment::Left => format!("{text}{}", repeat(fill, deficit)),
        Alignment::Right => format!("{}{text}", repeat(fill, deficit)),
        Alignment::Center => {
            let left = deficit / 2;
            let right = deficit - left;
            format!("{}{text}{}", repeat(fill, left), repeat(fill, right))
        }
    }
}
