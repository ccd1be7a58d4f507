//! SGR style state tracking.
//!
//! This module interprets the escape sequences produced by the scanner in
//! [`crate::ansi`]. [`StyleState`] is the structured set of rendering
//! attributes that are "open" at some point in a token stream: a foreground
//! and a background [`ColorSlot`] plus a set of [`Attributes`]. It can emit
//! the minimal sequences that re-open or close exactly that state, which is
//! what truncation and line re-colorizing need.
//!
//! [`NamedStyle`] maps the style tokens used in table options (`"red"`,
//! `"bgBlue"`, `"bold"`, ...) to their SGR codes.

use std::fmt;
use std::fmt::Write as _;

use bitflags::bitflags;

use crate::ansi::{Token, tokens};

bitflags! {
    /// Text attribute flags.
    ///
    /// Each flag corresponds to an ANSI SGR (Select Graphic Rendition) code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u16 {
        /// Bold/bright text (SGR 1).
        const BOLD      = 1 << 0;
        /// Dim/faint text (SGR 2).
        const DIM       = 1 << 1;
        /// Italic text (SGR 3).
        const ITALIC    = 1 << 2;
        /// Single underline (SGR 4).
        const UNDERLINE = 1 << 3;
        /// Slow blinking text (SGR 5).
        const BLINK     = 1 << 4;
        /// Fast blinking text (SGR 6).
        const BLINK2    = 1 << 5;
        /// Reverse video (SGR 7).
        const REVERSE   = 1 << 6;
        /// Concealed/hidden text (SGR 8).
        const CONCEAL   = 1 << 7;
        /// Strikethrough text (SGR 9).
        const STRIKE    = 1 << 8;
        /// Double underline (SGR 21).
        const UNDERLINE2 = 1 << 9;
        /// Framed text (SGR 51).
        const FRAME     = 1 << 10;
        /// Encircled text (SGR 52).
        const ENCIRCLE  = 1 << 11;
        /// Overlined text (SGR 53).
        const OVERLINE  = 1 << 12;
    }
}

impl Attributes {
    /// Attribute flags with their SGR "on" and "off" codes.
    ///
    /// Several attributes share an off code (22 ends both bold and dim).
    const SGR_CODES: [(Self, u16, u16); 13] = [
        (Self::BOLD, 1, 22),
        (Self::DIM, 2, 22),
        (Self::ITALIC, 3, 23),
        (Self::UNDERLINE, 4, 24),
        (Self::BLINK, 5, 25),
        (Self::BLINK2, 6, 25),
        (Self::REVERSE, 7, 27),
        (Self::CONCEAL, 8, 28),
        (Self::STRIKE, 9, 29),
        (Self::UNDERLINE2, 21, 24),
        (Self::FRAME, 51, 54),
        (Self::ENCIRCLE, 52, 54),
        (Self::OVERLINE, 53, 55),
    ];

    /// Get the ANSI SGR "on" codes for enabled attributes.
    #[must_use]
    pub fn to_sgr_codes(&self) -> Vec<u16> {
        Self::SGR_CODES
            .iter()
            .filter(|(attr, _, _)| self.contains(*attr))
            .map(|(_, on, _)| *on)
            .collect()
    }

    /// Get the distinct SGR "off" codes that close the enabled attributes.
    #[must_use]
    pub fn to_sgr_off_codes(&self) -> Vec<u16> {
        let mut codes = Vec::new();
        for (attr, _, off) in Self::SGR_CODES {
            if self.contains(attr) && !codes.contains(&off) {
                codes.push(off);
            }
        }
        codes
    }

    /// The attribute switched on by an SGR code.
    #[must_use]
    pub fn from_sgr_on(code: u16) -> Option<Self> {
        Self::SGR_CODES
            .iter()
            .find(|(_, on, _)| *on == code)
            .map(|(attr, _, _)| *attr)
    }

    /// Every attribute switched off by an SGR code.
    #[must_use]
    pub fn from_sgr_off(code: u16) -> Option<Self> {
        let cleared = Self::SGR_CODES
            .iter()
            .filter(|(_, _, off)| *off == code)
            .fold(Self::empty(), |acc, (attr, _, _)| acc | *attr);
        (!cleared.is_empty()).then_some(cleared)
    }
}

/// The color currently selected for one layer (foreground or background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSlot {
    /// No color code seen yet.
    #[default]
    Default,
    /// One of the 16 basic colors, stored as its SGR code (30-37, 90-97 for
    /// foreground; 40-47, 100-107 for background).
    Basic(u8),
    /// 256-color palette index (`38;5;n` / `48;5;n`).
    Extended256(u8),
    /// 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`).
    Rgb(u8, u8, u8),
    /// Explicitly returned to the terminal default (39 / 49).
    Reset,
}

impl ColorSlot {
    /// Returns true if this slot holds a color that must be closed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Basic(_) | Self::Extended256(_) | Self::Rgb(..))
    }

    /// The SGR parameter string that selects this color.
    ///
    /// `extended` is 38 for foreground and 48 for background.
    fn sgr(self, extended: u16) -> Option<String> {
        match self {
            Self::Basic(code) => Some(code.to_string()),
            Self::Extended256(index) => Some(format!("{extended};5;{index}")),
            Self::Rgb(r, g, b) => Some(format!("{extended};2;{r};{g};{b}")),
            Self::Default | Self::Reset => None,
        }
    }
}

/// The set of SGR attributes open at a point in a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleState {
    /// Foreground color.
    pub foreground: ColorSlot,
    /// Background color.
    pub background: ColorSlot,
    /// Enabled attributes.
    pub attributes: Attributes,
}

impl StyleState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state left open after all of `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut state = Self::new();
        state.update_from_str(text);
        state
    }

    /// Returns true if any color or attribute is open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.foreground.is_open() || self.background.is_open() || !self.attributes.is_empty()
    }

    /// Apply every SGR code found in `text`.
    pub fn update_from_str(&mut self, text: &str) {
        for token in tokens(text) {
            self.update(&token);
        }
    }

    /// Apply one token. Glyphs and non-SGR codes leave the state unchanged.
    pub fn update(&mut self, token: &Token<'_>) {
        if let Some(params) = token.sgr_params() {
            self.apply_params(&params);
        } else if let Token::Code(code) = token {
            log::trace!("ignoring non-SGR sequence {code:?}");
        }
    }

    /// Apply a list of SGR parameters in order.
    #[allow(clippy::cast_possible_truncation)] // basic color codes are below 108
    pub fn apply_params(&mut self, params: &[u16]) {
        let mut i = 0;
        while i < params.len() {
            let code = params[i];
            match code {
                0 => *self = Self::default(),
                30..=37 | 90..=97 => self.foreground = ColorSlot::Basic(code as u8),
                39 => self.foreground = ColorSlot::Reset,
                40..=47 | 100..=107 => self.background = ColorSlot::Basic(code as u8),
                49 => self.background = ColorSlot::Reset,
                38 | 48 => {
                    let Some((slot, consumed)) = parse_extended_color(&params[i + 1..]) else {
                        log::trace!("malformed extended color in SGR {params:?}");
                        return;
                    };
                    if code == 38 {
                        self.foreground = slot;
                    } else {
                        self.background = slot;
                    }
                    i += consumed;
                }
                _ => {
                    if let Some(attr) = Attributes::from_sgr_on(code) {
                        self.attributes.insert(attr);
                    } else if let Some(cleared) = Attributes::from_sgr_off(code) {
                        self.attributes.remove(cleared);
                    } else {
                        log::trace!("ignoring SGR parameter {code}");
                    }
                }
            }
            i += 1;
        }
    }

    /// Sequences that re-establish this state from a clean terminal.
    ///
    /// Foreground first, then background, then attributes, one sequence each.
    #[must_use]
    pub fn opening_sequence(&self) -> String {
        let mut out = String::new();
        if let Some(fg) = self.foreground.sgr(38) {
            push_sgr(&mut out, &fg);
        }
        if let Some(bg) = self.background.sgr(48) {
            push_sgr(&mut out, &bg);
        }
        for code in self.attributes.to_sgr_codes() {
            push_sgr(&mut out, &code.to_string());
        }
        out
    }

    /// Sequences that close this state without a blanket reset.
    ///
    /// Attributes first, then background (49), then foreground (39).
    #[must_use]
    pub fn closing_sequence(&self) -> String {
        let mut out = String::new();
        for code in self.attributes.to_sgr_off_codes() {
            push_sgr(&mut out, &code.to_string());
        }
        if self.background.is_open() {
            out.push_str("\x1b[49m");
        }
        if self.foreground.is_open() {
            out.push_str("\x1b[39m");
        }
        out
    }
}

fn push_sgr(out: &mut String, params: &str) {
    let _ = write!(out, "\x1b[{params}m");
}

/// Parse the tail of a 38/48 code. Returns the color and how many extra
/// parameters it consumed.
fn parse_extended_color(rest: &[u16]) -> Option<(ColorSlot, usize)> {
    let byte = |i: usize| rest.get(i).and_then(|v| u8::try_from(*v).ok());
    match rest.first()? {
        5 => Some((ColorSlot::Extended256(byte(1)?), 2)),
        2 => Some((ColorSlot::Rgb(byte(1)?, byte(2)?, byte(3)?), 4)),
        _ => None,
    }
}

/// A style token usable in header/border style lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedStyle {
    /// Canonical name.
    pub name: &'static str,
    /// SGR code that opens the style.
    pub open: u16,
    /// SGR code that closes the style.
    pub close: u16,
}

const NAMED_STYLES: &[(&str, u16, u16)] = &[
    ("reset", 0, 0),
    ("bold", 1, 22),
    ("dim", 2, 22),
    ("italic", 3, 23),
    ("underline", 4, 24),
    ("inverse", 7, 27),
    ("hidden", 8, 28),
    ("strikethrough", 9, 29),
    ("black", 30, 39),
    ("red", 31, 39),
    ("green", 32, 39),
    ("yellow", 33, 39),
    ("blue", 34, 39),
    ("magenta", 35, 39),
    ("cyan", 36, 39),
    ("white", 37, 39),
    ("gray", 90, 39),
    ("grey", 90, 39),
    ("blackBright", 90, 39),
    ("redBright", 91, 39),
    ("greenBright", 92, 39),
    ("yellowBright", 93, 39),
    ("blueBright", 94, 39),
    ("magentaBright", 95, 39),
    ("cyanBright", 96, 39),
    ("whiteBright", 97, 39),
    ("bgBlack", 40, 49),
    ("bgRed", 41, 49),
    ("bgGreen", 42, 49),
    ("bgYellow", 43, 49),
    ("bgBlue", 44, 49),
    ("bgMagenta", 45, 49),
    ("bgCyan", 46, 49),
    ("bgWhite", 47, 49),
    ("bgGray", 100, 49),
    ("bgGrey", 100, 49),
    ("bgBlackBright", 100, 49),
    ("bgRedBright", 101, 49),
    ("bgGreenBright", 102, 49),
    ("bgYellowBright", 103, 49),
    ("bgBlueBright", 104, 49),
    ("bgMagentaBright", 105, 49),
    ("bgCyanBright", 106, 49),
    ("bgWhiteBright", 107, 49),
];

impl NamedStyle {
    /// Look up a style token. Matching ignores ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `StyleNameError::UnknownStyle` if no style has that name.
    pub fn parse(name: &str) -> Result<Self, StyleNameError> {
        let wanted = name.trim();
        NAMED_STYLES
            .iter()
            .find(|(known, _, _)| known.eq_ignore_ascii_case(wanted))
            .map(|&(name, open, close)| Self { name, open, close })
            .ok_or_else(|| StyleNameError::UnknownStyle(name.to_string()))
    }

    /// The opening escape sequence.
    #[must_use]
    pub fn open_code(&self) -> String {
        format!("\x1b[{}m", self.open)
    }

    /// The closing escape sequence.
    #[must_use]
    pub fn close_code(&self) -> String {
        format!("\x1b[{}m", self.close)
    }
}

impl fmt::Display for NamedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Wrap `text` in the named styles, closing them in reverse order.
///
/// An empty style list or empty text returns the text unchanged.
///
/// # Errors
///
/// Returns `StyleNameError::UnknownStyle` for the first unknown name, even
/// when `text` is empty.
pub fn apply_styles<S: AsRef<str>>(text: &str, names: &[S]) -> Result<String, StyleNameError> {
    let styles = names
        .iter()
        .map(|name| NamedStyle::parse(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if styles.is_empty() || text.is_empty() {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len() + styles.len() * 10);
    for style in &styles {
        out.push_str(&style.open_code());
    }
    out.push_str(text);
    for style in styles.iter().rev() {
        out.push_str(&style.close_code());
    }
    Ok(out)
}

/// Error type for style token lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleNameError {
    UnknownStyle(String),
}

impl fmt::Display for StyleNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyle(s) => write!(f, "Unknown style: {s}"),
        }
    }
}

impl std::error::Error for StyleNameError {}
