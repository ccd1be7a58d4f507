//! Escape-sequence scanner.
//!
//! Splits styled text into an ordered stream of [`Token`]s: zero-width
//! escape sequences ([`Token::Code`]) and visible characters
//! ([`Token::Glyph`]). The stream is lossless, so writing every token back
//! out in order reproduces the input byte for byte.
//!
//! Any Control Sequence Introducer span (`ESC [ params intermediates final`)
//! is one code token. Only SGR codes (final byte `m`) carry styling meaning;
//! that interpretation lives in [`crate::style::StyleState`]. An escape that
//! does not complete a sequence is kept as literal text.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::{SmallVec, smallvec};

use crate::cells::get_character_cell_size;

/// The escape character that starts every control sequence.
pub const ESC: char = '\x1b';

// ESC [ parameter bytes (0x30-0x3F) intermediate bytes (0x21-0x2F) final byte (0x40-0x7E).
// Space is left out of the intermediates so a broken sequence cannot swallow visible text.
static CSI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x1b\[[0-?]*[!-/]*[@-~]").expect("invalid regex"));

/// Parameter list of an SGR sequence.
pub type SgrParams = SmallVec<[u16; 8]>;

/// One unit of a tokenized styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// A complete control sequence, carried verbatim. Zero width.
    Code(&'a str),
    /// A visible character and its cell width (0, 1 or 2).
    Glyph { ch: char, width: usize },
}

impl Token<'_> {
    /// Cell width of this token.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Code(_) => 0,
            Self::Glyph { width, .. } => *width,
        }
    }

    /// Returns true for escape-sequence tokens.
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }

    /// Returns true for whitespace glyphs.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Glyph { ch, .. } if ch.is_whitespace())
    }

    /// Returns true if this is an SGR (`ESC [ ... m`) sequence.
    #[must_use]
    pub fn is_sgr(&self) -> bool {
        match self {
            Self::Code(code) => code.ends_with('m'),
            Self::Glyph { .. } => false,
        }
    }

    /// Parse the numeric parameters of an SGR sequence.
    ///
    /// Returns `None` for glyphs and for non-SGR sequences. An empty parameter
    /// list (`ESC[m`) and empty fields (`ESC[;1m`) read as `0`, as terminals
    /// treat them. Both `;` and `:` separate fields.
    #[must_use]
    pub fn sgr_params(&self) -> Option<SgrParams> {
        let Self::Code(code) = self else {
            return None;
        };
        let body = code.strip_prefix("\x1b[")?.strip_suffix('m')?;
        if body.is_empty() {
            return Some(smallvec![0]);
        }

        let mut params = SgrParams::new();
        for field in body.split([';', ':']) {
            if field.is_empty() {
                params.push(0);
                continue;
            }
            // Private-mode or oversized parameters make the whole code opaque.
            params.push(field.parse().ok()?);
        }
        Some(params)
    }

    /// Append this token's source text to a buffer.
    pub fn push_to(&self, out: &mut String) {
        match self {
            Self::Code(code) => out.push_str(code),
            Self::Glyph { ch, .. } => out.push(*ch),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => f.write_str(code),
            Self::Glyph { ch, .. } => write!(f, "{ch}"),
        }
    }
}

/// Lazy iterator over the tokens of a styled string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.rest.chars().next()?;

        if ch == ESC
            && let Some(found) = CSI_PATTERN.find(self.rest)
        {
            let (code, rest) = self.rest.split_at(found.end());
            self.rest = rest;
            return Some(Token::Code(code));
        }

        self.rest = &self.rest[ch.len_utf8()..];
        Some(Token::Glyph {
            ch,
            width: get_character_cell_size(ch),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(!self.rest.is_empty()), Some(self.rest.len()))
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Iterate over the tokens of `text` without allocating.
#[must_use]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Split `text` into escape-sequence and glyph tokens.
///
/// Joining the returned tokens reproduces `text` exactly.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    tokens(text).collect()
}

/// Rebuild a string from a token slice.
#[must_use]
pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.push_to(&mut out);
    }
    out
}

/// Remove every recognized escape sequence from `text`.
///
/// Borrows when there is nothing to strip.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains(ESC) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for token in tokens(text) {
        if let Token::Glyph { ch, .. } = token {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}
