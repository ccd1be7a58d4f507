//! Cell content layout.
//!
//! [`fit_cell`] runs the full metrics pipeline for one table cell: optional
//! wrapping, re-colorizing so every line stands alone, truncation to the
//! content width, then alignment and padding. The returned lines are exactly
//! `width` columns wide, ready to be placed between border glyphs.

use crate::cells::max_line_width;
use crate::colorize::{colorize_lines, colorize_text};
use crate::options::{TableOptions, VerticalAlignment};
use crate::pad::{Alignment, pad, repeat};
use crate::truncate::truncate;
use crate::wrap::{WrapMode, wrap};

/// Break `content` into styled lines for a column `width` columns wide.
///
/// `width` includes the cell padding from `options.style`. When
/// `options.word_wrap` is set the content is wrapped to the inner width
/// (by word or by character per `options.wrap_on_word_boundary`); otherwise
/// only explicit newlines break lines. Every line is independently styled.
/// Always returns at least one line.
#[must_use]
pub fn cell_lines(content: &str, width: usize, options: &TableOptions) -> Vec<String> {
    let mut lines = if options.word_wrap {
        let mode = if options.wrap_on_word_boundary {
            WrapMode::Word
        } else {
            WrapMode::Char
        };
        colorize_lines(&wrap(content, inner_width(width, options), mode))
    } else {
        colorize_text(content)
    };
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Fit one cell line to exactly `width` columns.
///
/// The line is truncated with `options.truncate`, aligned within the inner
/// width and surrounded by the cell padding. When `width` is smaller than
/// the padding, the right padding shrinks first, then the left. `clipped`
/// forces the ellipsis even when the line fits, marking content cut off
/// below it.
#[must_use]
pub fn draw_line(
    line: &str,
    width: usize,
    options: &TableOptions,
    align: Alignment,
    clipped: bool,
) -> String {
    let (left, right) = paddings(width, options);
    let inner = width - left - right;
    let content = if clipped {
        truncate(&format!("{line}{}", options.truncate), inner, &options.truncate)
    } else {
        truncate(line, inner, &options.truncate)
    };
    format!(
        "{}{}{}",
        repeat(' ', left),
        pad(&content, inner, ' ', align),
        repeat(' ', right)
    )
}

/// Lay out `content` in a column `width` columns wide.
///
/// Every returned line is exactly `width` columns wide, including widths
/// narrower than the cell padding.
#[must_use]
pub fn fit_cell(content: &str, width: usize, options: &TableOptions, align: Alignment) -> Vec<String> {
    cell_lines(content, width, options)
        .iter()
        .map(|line| draw_line(line, width, options, align, false))
        .collect()
}

/// Lay out `content` in a block `width` columns wide and `height` lines tall.
///
/// Short content is placed per `valign` with blank lines around it. Content
/// with more lines than `height` is cut, and the last kept line ends with the
/// ellipsis.
#[must_use]
pub fn fit_block(
    content: &str,
    width: usize,
    height: usize,
    options: &TableOptions,
    align: Alignment,
    valign: VerticalAlignment,
) -> Vec<String> {
    let lines = cell_lines(content, width, options);

    if lines.len() > height {
        log::trace!("clipping {} lines to {height}", lines.len());
        return lines
            .iter()
            .take(height)
            .enumerate()
            .map(|(i, line)| draw_line(line, width, options, align, i + 1 == height))
            .collect();
    }

    let spare = height - lines.len();
    let (above, below) = match valign {
        VerticalAlignment::Top => (0, spare),
        VerticalAlignment::Center => (spare / 2, spare - spare / 2),
        VerticalAlignment::Bottom => (spare, 0),
    };

    let blank = repeat(' ', width);
    let mut out = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(blank.clone(), above));
    out.extend(
        lines
            .iter()
            .map(|line| draw_line(line, width, options, align, false)),
    );
    out.extend(std::iter::repeat_n(blank, below));
    out
}

/// Width a column needs to show `content` without truncation.
///
/// This is the widest line plus the cell padding.
#[must_use]
pub fn content_width(content: &str, options: &TableOptions) -> usize {
    max_line_width(content) + options.style.padding_left + options.style.padding_right
}

fn inner_width(width: usize, options: &TableOptions) -> usize {
    let (left, right) = paddings(width, options);
    width - left - right
}

// Left and right padding clamped so they never exceed `width` together.
fn paddings(width: usize, options: &TableOptions) -> (usize, usize) {
    let right = options.style.padding_right.min(width.saturating_sub(options.style.padding_left));
    let left = options.style.padding_left.min(width - right);
    (left, right)
}
