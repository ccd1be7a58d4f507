//! Unicode character cell width calculations.
//!
//! This module answers "how many terminal columns does this occupy?" for
//! single characters, plain strings, and strings carrying embedded escape
//! sequences. Wide characters (CJK, fullwidth forms) take 2 cells, combining
//! marks and control characters take 0, everything else takes 1.
//!
//! Widths come from the precomputed East-Asian width tables shipped with
//! `unicode-width`; ambiguous-width characters are treated as narrow.

use unicode_width::UnicodeWidthChar;

use crate::ansi::{Token, tokens};

/// Get the cell width of a single character.
///
/// Most characters are 1 cell wide, but CJK characters and some emoji
/// are 2 cells wide. Control characters and combining marks have 0 width.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Get the total cell width of a plain string.
///
/// Escape sequences are *not* recognized here; use [`visible_width`] for
/// styled text.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Get the visible width of styled text.
///
/// Sums the widths of all glyphs and ignores escape sequences. Malformed
/// sequences are measured as literal characters.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    if text.is_ascii() && !text.contains('\x1b') {
        // Printable ASCII is one cell per byte; control bytes are zero.
        return text.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    tokens(text).map(|token| token.width()).sum()
}

/// Get the visible width of the widest line in styled text.
///
/// Lines are split on `\n`; escape sequences are ignored.
#[must_use]
pub fn max_line_width(text: &str) -> usize {
    text.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Split a plain string at a cell position.
///
/// Returns (left, right) where left has the specified width (or less if
/// a wide character would exceed it).
#[must_use]
pub fn chop_cells(text: &str, max_size: usize) -> (&str, &str) {
    let mut width = 0;
    let mut byte_pos = 0;

    for (i, c) in text.char_indices() {
        let char_width = get_character_cell_size(c);
        if width + char_width > max_size {
            break;
        }
        width += char_width;
        byte_pos = i + c.len_utf8();
    }

    (&text[..byte_pos], &text[byte_pos..])
}

/// Check if a string contains any wide (2-cell) characters.
///
/// Characters inside escape sequences are never counted.
#[must_use]
pub fn has_wide_chars(text: &str) -> bool {
    tokens(text).any(|token| matches!(token, Token::Glyph { width: 2, .. }))
}
