//! Width-bounded truncation of styled text.
//!
//! Truncation counts only visible columns. Escape sequences before the cut
//! point stay where they are; everything after the cut is dropped. Styles
//! still open at the cut are closed with their specific "off" codes before
//! the ellipsis is appended, so the result never leaks styling into whatever
//! the caller prints next.

use crate::ansi::{Token, tokens};
use crate::cells::visible_width;
use crate::style::StyleState;

/// Ellipsis used when the caller does not supply one.
pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

/// Truncate `text` to `width` visible columns, ending with `ellipsis`.
///
/// Text that already fits is returned unchanged and no ellipsis is added.
/// A wide character that would straddle the limit is dropped whole. If the
/// ellipsis itself is wider than `width`, the text is cut without one.
///
/// # Example
///
/// ```
/// use table_text::truncate::truncate;
///
/// assert_eq!(truncate("goodnight moon", 8, "…"), "goodnig…");
/// assert_eq!(truncate("hello", 5, "…"), "hello");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize, ellipsis: &str) -> String {
    let current = visible_width(text);
    if current <= width {
        return text.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    if ellipsis_width > width {
        log::debug!("ellipsis {ellipsis:?} wider than {width} columns; cutting without it");
        return truncate_to_width(text, width);
    }

    log::trace!("truncating {current} columns to {width}");
    let mut out = truncate_to_width(text, width - ellipsis_width);
    out.push_str(ellipsis);
    out
}

/// Truncate with [`DEFAULT_ELLIPSIS`].
#[must_use]
pub fn truncate_default(text: &str, width: usize) -> String {
    truncate(text, width, DEFAULT_ELLIPSIS)
}

/// Cut styled text to at most `width` visible columns, without an ellipsis.
///
/// Escape sequences are kept while the kept width is below `width`. Styles
/// left open at the cut are closed.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut state = StyleState::new();

    for token in tokens(text) {
        match token {
            Token::Code(code) => {
                if used >= width {
                    break;
                }
                out.push_str(code);
                state.update(&token);
            }
            Token::Glyph { ch, width: cells } => {
                // Combining marks may follow the last glyph; stray control
                // characters may not.
                if used + cells > width || (used == width && ch.is_control()) {
                    break;
                }
                out.push(ch);
                used += cells;
            }
        }
    }

    out.push_str(&state.closing_sequence());
    out
}
