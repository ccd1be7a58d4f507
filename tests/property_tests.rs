//! Property-based tests for table_text.
//!
//! Uses proptest to check the width, truncation, wrapping and re-colorizing
//! invariants over generated styled text.

use proptest::prelude::*;

use table_text::ansi::{join_tokens, strip_ansi, tokenize};
use table_text::cells::visible_width;
use table_text::colorize::colorize_lines;
use table_text::pad::{Alignment, pad};
use table_text::style::StyleState;
use table_text::truncate::{truncate, truncate_to_width};
use table_text::wrap::{wrap_hard, word_wrap};

// ============================================================================
// Custom Strategies
// ============================================================================

/// A word of ASCII letters or CJK ideographs.
fn word() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z]{1,8}", "[\u{4e00}-\u{4e20}]{1,3}"]
}

/// An SGR open code with its matching close code.
fn sgr_pair() -> impl Strategy<Value = (u16, u16)> {
    prop_oneof![
        (31u16..=37).prop_map(|c| (c, 39)),
        (91u16..=97).prop_map(|c| (c, 39)),
        (41u16..=47).prop_map(|c| (c, 49)),
        Just((1, 22)),
        Just((4, 24)),
        Just((7, 27)),
    ]
}

/// A word, optionally wrapped in a balanced SGR pair.
fn styled_word() -> impl Strategy<Value = String> {
    (word(), prop::option::of(sgr_pair())).prop_map(|(w, style)| match style {
        Some((open, close)) => format!("\x1b[{open}m{w}\x1b[{close}m"),
        None => w,
    })
}

/// Space-separated styled words.
fn styled_text() -> impl Strategy<Value = String> {
    prop::collection::vec(styled_word(), 0..12).prop_map(|words| words.join(" "))
}

/// Arbitrary text that may include stray escapes and control characters.
fn noisy_text() -> impl Strategy<Value = String> {
    "[a-z \u{1b}\\[0-9;m\u{4e00}\u{0301}\t]{0,40}"
}

// ============================================================================
// Scanner and width
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Reassembling the tokens gives back the input exactly.
    #[test]
    fn prop_tokenize_lossless(text in noisy_text()) {
        prop_assert_eq!(join_tokens(&tokenize(&text)), text);
    }

    /// Measuring is stable across a tokenize/reassemble round.
    #[test]
    fn prop_width_stable_under_reassembly(text in noisy_text()) {
        let rebuilt = join_tokens(&tokenize(&text));
        prop_assert_eq!(visible_width(&rebuilt), visible_width(&text));
    }

    /// Styling never changes the visible width.
    #[test]
    fn prop_width_ignores_styling(plain in "[a-z\u{4e00}-\u{4e20} ]{0,20}", (open, _) in sgr_pair()) {
        let styled = format!("\x1b[{open}m\x1b[1m{plain}\x1b[0m");
        prop_assert_eq!(visible_width(&styled), visible_width(&plain));
    }

    /// Width equals the width of the text with escapes removed.
    #[test]
    fn prop_width_matches_stripped(text in styled_text()) {
        prop_assert_eq!(visible_width(&text), visible_width(&strip_ansi(&text)));
    }
}

// ============================================================================
// Padding and truncation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Padded text is as wide as the target, or unchanged when already wider.
    #[test]
    fn prop_pad_width(text in styled_text(), width in 0usize..60, align_idx in 0usize..3) {
        let align = [Alignment::Left, Alignment::Center, Alignment::Right][align_idx];
        let padded = pad(&text, width, ' ', align);
        let original = visible_width(&text);
        if original >= width {
            prop_assert_eq!(padded, text);
        } else {
            prop_assert_eq!(visible_width(&padded), width);
        }
    }

    /// Truncated text always fits.
    #[test]
    fn prop_truncate_fits(text in styled_text(), width in 0usize..40) {
        let out = truncate(&text, width, "…");
        prop_assert!(visible_width(&out) <= width);
    }

    /// Text within budget comes back unchanged.
    #[test]
    fn prop_truncate_identity_when_fits(text in styled_text()) {
        let width = visible_width(&text);
        prop_assert_eq!(truncate(&text, width, "…"), text.clone());
        prop_assert_eq!(truncate(&text, width + 5, "…"), text);
    }

    /// A cut leaves no style open and keeps a prefix of the visible text.
    #[test]
    fn prop_truncate_closes_and_keeps_prefix(text in styled_text(), width in 1usize..40) {
        prop_assume!(visible_width(&text) > width);

        let out = truncate(&text, width, "…");
        prop_assert!(out.ends_with('…'));
        prop_assert!(!StyleState::from_text(&out).is_active());

        let stripped = strip_ansi(&out);
        let kept = stripped.strip_suffix('…').unwrap_or(&stripped);
        prop_assert!(strip_ansi(&text).starts_with(kept));
    }

    /// Cutting without an ellipsis uses every column a glyph can fill.
    #[test]
    fn prop_truncate_to_width_is_tight(text in styled_text(), width in 0usize..40) {
        let out = truncate_to_width(&text, width);
        let used = visible_width(&out);
        prop_assert!(used <= width);
        // Only a wide glyph at the boundary may leave a single column unused.
        prop_assert!(used + 1 >= width.min(visible_width(&text)));
    }
}

// ============================================================================
// Wrapping and re-colorizing
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Lines fit unless they hold a single overlong word.
    #[test]
    fn prop_word_wrap_fits(text in styled_text(), width in 1usize..30) {
        for line in word_wrap(width, &text) {
            let plain = strip_ansi(&line);
            prop_assert!(!plain.starts_with(' '));
            prop_assert!(!plain.is_empty());
            if visible_width(&line) > width {
                prop_assert!(!plain.contains(' '), "{:?} overflows {}", line, width);
            }
        }
    }

    /// Wrapping keeps every word, in order.
    #[test]
    fn prop_word_wrap_keeps_words(text in styled_text(), width in 1usize..30) {
        let lines = word_wrap(width, &text);
        let joined = lines.join(" ");
        let wrapped = strip_ansi(&joined);
        let original = strip_ansi(&text);
        let wrapped_words: Vec<&str> = wrapped.split_whitespace().collect();
        let original_words: Vec<&str> = original.split_whitespace().collect();
        prop_assert_eq!(wrapped_words, original_words);
    }

    /// Character wrapping never exceeds the width once it can hold a glyph.
    #[test]
    fn prop_wrap_hard_fits(text in styled_text(), width in 2usize..30) {
        for line in wrap_hard(width, &text) {
            prop_assert!(visible_width(&line) <= width);
        }
    }

    /// Every re-colorized line stands alone and keeps its visible text.
    #[test]
    fn prop_colorize_lines_self_contained(text in styled_text(), width in 1usize..20) {
        let lines = word_wrap(width, &text);
        let colored = colorize_lines(&lines);
        prop_assert_eq!(colored.len(), lines.len());
        for (line, original) in colored.iter().zip(&lines) {
            prop_assert!(!StyleState::from_text(line).is_active());
            prop_assert_eq!(strip_ansi(line), strip_ansi(original));
        }
    }
}
