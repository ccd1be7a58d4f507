//! Border glyph sets for tables.
//!
//! A [`BorderChars`] names every glyph a table border can use, keyed the way
//! table options spell them (`top-left`, `mid-mid`, ...). Glyphs are strings
//! so a border can be switched off with `""`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cells::visible_width;

/// Which horizontal rule to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleLevel {
    /// Top of the table.
    Top,
    /// Between rows.
    Mid,
    /// Bottom of the table.
    Bottom,
}

/// Border glyph set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BorderChars {
    pub top: String,
    pub top_mid: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom: String,
    pub bottom_mid: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left: String,
    pub left_mid: String,
    pub mid: String,
    pub mid_mid: String,
    pub right: String,
    pub right_mid: String,
    pub middle: String,
}

impl BorderChars {
    /// Build a glyph set from rows of `[left, horizontal, joint, right]`.
    ///
    /// `vertical` is `[left, divider, right]` for content rows.
    fn from_rows(top: [&str; 4], mid: [&str; 4], bottom: [&str; 4], vertical: [&str; 3]) -> Self {
        Self {
            top_left: top[0].into(),
            top: top[1].into(),
            top_mid: top[2].into(),
            top_right: top[3].into(),
            left_mid: mid[0].into(),
            mid: mid[1].into(),
            mid_mid: mid[2].into(),
            right_mid: mid[3].into(),
            bottom_left: bottom[0].into(),
            bottom: bottom[1].into(),
            bottom_mid: bottom[2].into(),
            bottom_right: bottom[3].into(),
            left: vertical[0].into(),
            middle: vertical[1].into(),
            right: vertical[2].into(),
        }
    }

    /// Single-line box: ┌─┬┐
    #[must_use]
    pub fn square() -> Self {
        Self::from_rows(
            ["\u{250C}", "\u{2500}", "\u{252C}", "\u{2510}"],
            ["\u{251C}", "\u{2500}", "\u{253C}", "\u{2524}"],
            ["\u{2514}", "\u{2500}", "\u{2534}", "\u{2518}"],
            ["\u{2502}", "\u{2502}", "\u{2502}"],
        )
    }

    /// Rounded corners: ╭─┬╮
    #[must_use]
    pub fn rounded() -> Self {
        Self::from_rows(
            ["\u{256D}", "\u{2500}", "\u{252C}", "\u{256E}"],
            ["\u{251C}", "\u{2500}", "\u{253C}", "\u{2524}"],
            ["\u{2570}", "\u{2500}", "\u{2534}", "\u{256F}"],
            ["\u{2502}", "\u{2502}", "\u{2502}"],
        )
    }

    /// Double-line box: ╔═╦╗
    #[must_use]
    pub fn double() -> Self {
        Self::from_rows(
            ["\u{2554}", "\u{2550}", "\u{2566}", "\u{2557}"],
            ["\u{2560}", "\u{2550}", "\u{256C}", "\u{2563}"],
            ["\u{255A}", "\u{2550}", "\u{2569}", "\u{255D}"],
            ["\u{2551}", "\u{2551}", "\u{2551}"],
        )
    }

    /// Heavy lines: ┏━┳┓
    #[must_use]
    pub fn heavy() -> Self {
        Self::from_rows(
            ["\u{250F}", "\u{2501}", "\u{2533}", "\u{2513}"],
            ["\u{2523}", "\u{2501}", "\u{254B}", "\u{252B}"],
            ["\u{2517}", "\u{2501}", "\u{253B}", "\u{251B}"],
            ["\u{2503}", "\u{2503}", "\u{2503}"],
        )
    }

    /// ASCII-only box, safe for any terminal: +-++
    #[must_use]
    pub fn ascii() -> Self {
        Self::from_rows(["+", "-", "+", "+"], ["+", "-", "+", "+"], ["+", "-", "+", "+"], [
            "|", "|", "|",
        ])
    }

    /// No borders at all.
    #[must_use]
    pub fn none() -> Self {
        Self::from_rows(["", "", "", ""], ["", "", "", ""], ["", "", "", ""], ["", "", ""])
    }

    /// The `[left, horizontal, joint, right]` glyphs of a rule.
    #[must_use]
    pub fn rule_glyphs(&self, level: RuleLevel) -> [&str; 4] {
        match level {
            RuleLevel::Top => [&self.top_left, &self.top, &self.top_mid, &self.top_right],
            RuleLevel::Mid => [&self.left_mid, &self.mid, &self.mid_mid, &self.right_mid],
            RuleLevel::Bottom => [
                &self.bottom_left,
                &self.bottom,
                &self.bottom_mid,
                &self.bottom_right,
            ],
        }
    }

    /// Build a horizontal rule spanning columns of the given widths.
    ///
    /// Each width is the full column width including cell padding.
    #[must_use]
    pub fn rule(&self, widths: &[usize], level: RuleLevel) -> String {
        let [left, horizontal, joint, right] = self.rule_glyphs(level);
        let mut result = String::from(left);

        for (i, &width) in widths.iter().enumerate() {
            result.push_str(&horizontal.repeat(width));
            if i + 1 < widths.len() {
                result.push_str(joint);
            }
        }

        result.push_str(right);
        result
    }

    /// Widest visible glyph in the set.
    #[must_use]
    pub fn max_glyph_width(&self) -> usize {
        [
            &self.top,
            &self.top_mid,
            &self.top_left,
            &self.top_right,
            &self.bottom,
            &self.bottom_mid,
            &self.bottom_left,
            &self.bottom_right,
            &self.left,
            &self.left_mid,
            &self.mid,
            &self.mid_mid,
            &self.right,
            &self.right_mid,
            &self.middle,
        ]
        .iter()
        .map(|glyph| visible_width(glyph))
        .max()
        .unwrap_or(0)
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::square()
    }
}

impl fmt::Display for BorderChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A sample 3x3 box
        let widths = [3, 3, 3];
        let row = format!(
            "{}   {}   {}   {}",
            self.left, self.middle, self.middle, self.right
        );
        writeln!(f, "{}", self.rule(&widths, RuleLevel::Top))?;
        writeln!(f, "{row}")?;
        writeln!(f, "{}", self.rule(&widths, RuleLevel::Mid))?;
        writeln!(f, "{row}")?;
        write!(f, "{}", self.rule(&widths, RuleLevel::Bottom))
    }
}
