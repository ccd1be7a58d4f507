//! Re-colorizing of multi-line styled text.
//!
//! When styled text is split into lines, a style opened on one line is still
//! open on the next, but only in the stream as a whole. Table borders are
//! printed between cell lines, so each line has to stand on its own:
//! [`colorize_lines`] re-opens the running style at the start of every line
//! and closes it at the end.

use crate::style::StyleState;

/// Make every line independently styled.
///
/// The style state runs across line boundaries. Each line after the first is
/// prefixed with the sequences that re-open the state left by the previous
/// line, and any line that ends with styles still open gets the matching
/// close sequences appended. A reset clears the running state; attribute-off
/// codes clear only their attribute.
///
/// # Example
///
/// ```
/// use table_text::colorize::colorize_lines;
///
/// let lines: Vec<&str> = "\x1b[31mHello\nHi\x1b[39m".split('\n').collect();
/// assert_eq!(
///     colorize_lines(&lines),
///     ["\x1b[31mHello\x1b[39m", "\x1b[31mHi\x1b[39m"]
/// );
/// ```
#[must_use]
pub fn colorize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut state = StyleState::new();
    let mut output = Vec::with_capacity(lines.len());

    for line in lines {
        let mut colored = state.opening_sequence();
        colored.push_str(line.as_ref());

        state = StyleState::from_text(&colored);
        colored.push_str(&state.closing_sequence());
        output.push(colored);
    }

    output
}

/// Split `text` on newlines and colorize the resulting lines.
#[must_use]
pub fn colorize_text(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    colorize_lines(&lines)
}
