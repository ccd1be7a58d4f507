//! Width-bounded line breaking for styled text.
//!
//! Explicit newlines always break. Within each newline-delimited segment,
//! [`word_wrap`] packs whitespace-separated words greedily, and [`wrap_hard`]
//! breaks at any character boundary. Both measure visible columns only,
//! never split an escape sequence or a wide character, and never start a
//! line with whitespace.
//!
//! Wrapped lines carry the escape sequences they were given, nothing more.
//! Pass the result through [`crate::colorize::colorize_lines`] to make every
//! line independently styled.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::ansi::{Token, tokens};

/// How lines are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Break between words (default).
    #[default]
    Word,
    /// Break at any character.
    Char,
}

/// Wrap `text` to `width` columns using `mode`.
#[must_use]
pub fn wrap(text: &str, width: usize, mode: WrapMode) -> Vec<String> {
    match mode {
        WrapMode::Word => word_wrap(width, text),
        WrapMode::Char => wrap_hard(width, text),
    }
}

/// A word and the whitespace run that preceded it.
#[derive(Debug, Default)]
struct Piece {
    gap: String,
    gap_width: usize,
    word: String,
    word_width: usize,
    has_glyph: bool,
}

/// Split a segment into words. Escape sequences stay inside the word they
/// touch; sequences that follow whitespace open the next word. Returns the
/// words and any sequences left over after the last word.
fn split_words(segment: &str) -> (Vec<Piece>, String) {
    let mut pieces = Vec::new();
    let mut current = Piece::default();

    for token in tokens(segment) {
        match token {
            Token::Code(code) => current.word.push_str(code),
            Token::Glyph { ch, width } if ch.is_whitespace() => {
                if current.has_glyph {
                    pieces.push(mem::take(&mut current));
                }
                current.gap.push(ch);
                // Zero-width separators such as tabs still cost a column.
                current.gap_width += width.max(1);
            }
            Token::Glyph { ch, width } => {
                current.word.push(ch);
                current.word_width += width;
                current.has_glyph = true;
            }
        }
    }

    if current.has_glyph {
        pieces.push(current);
        (pieces, String::new())
    } else {
        (pieces, current.word)
    }
}

/// Attach sequences that have no word of their own to the last line.
fn attach_trailing_codes(lines: &mut Vec<String>, codes: String) {
    if codes.is_empty() {
        return;
    }
    match lines.last_mut() {
        Some(last) => last.push_str(&codes),
        None => lines.push(codes),
    }
}

/// Greedy word wrap.
///
/// A word is appended to the current line while the line, the whitespace
/// that separated the word in the source, and the word together fit in
/// `width`. A word wider than `width` gets a line of its own and is never
/// split. Segments with no visible words produce no lines.
///
/// # Example
///
/// ```
/// use table_text::wrap::word_wrap;
///
/// let lines = word_wrap(10, "Hello, how are you today? I am fine, thank you!");
/// assert_eq!(lines, ["Hello, how", "are you", "today? I", "am fine,", "thank you!"]);
/// ```
#[must_use]
pub fn word_wrap(width: usize, text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let (pieces, trailing) = split_words(segment);

        let mut line = String::new();
        let mut line_width = 0;
        let mut started = false;

        for piece in pieces {
            if piece.word_width > width {
                log::debug!(
                    "word of {} columns exceeds wrap width {width}; emitting unsplit",
                    piece.word_width
                );
            }

            if !started {
                line = piece.word;
                line_width = piece.word_width;
                started = true;
                continue;
            }

            let candidate = line_width + piece.gap_width + piece.word_width;
            if candidate > width {
                lines.push(mem::replace(&mut line, piece.word));
                line_width = piece.word_width;
            } else {
                line.push_str(&piece.gap);
                line.push_str(&piece.word);
                line_width = candidate;
            }
        }

        if started {
            lines.push(line);
        }
        attach_trailing_codes(&mut lines, trailing);
    }

    lines
}

/// Character-boundary wrap.
///
/// Fills each line up to `width` columns regardless of word boundaries.
/// Escape sequences immediately before a glyph move with it to the next line.
/// A wide character that does not fit starts a new line; whitespace at the
/// start of a line is dropped.
#[must_use]
pub fn wrap_hard(width: usize, text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        let mut has_glyph = false;
        let mut pending = String::new();

        for token in tokens(segment) {
            match token {
                Token::Code(code) => pending.push_str(code),
                Token::Glyph { ch, width: cells } => {
                    // Zero-width marks stay with the glyph they follow.
                    if has_glyph && cells > 0 && line_width + cells > width {
                        lines.push(mem::take(&mut line));
                        line_width = 0;
                        has_glyph = false;
                    }
                    line.push_str(&pending);
                    pending.clear();
                    if !has_glyph && ch.is_whitespace() {
                        continue;
                    }
                    line.push(ch);
                    line_width += cells;
                    has_glyph = true;
                }
            }
        }

        if has_glyph {
            line.push_str(&pending);
            lines.push(line);
        } else {
            line.push_str(&pending);
            attach_trailing_codes(&mut lines, line);
        }
    }

    lines
}
