//! # table_text
//!
//! Text metrics and layout for terminal tables.
//!
//! Cell content may carry ANSI escape sequences and East-Asian wide
//! characters. This crate measures such text in terminal columns and fits it
//! to a column: padding, truncation with an ellipsis, word wrapping, and
//! re-colorizing so that every output line carries its own styling.
//!
//! ## Quick Start
//!
//! ```rust
//! use table_text::prelude::*;
//!
//! let text = "\x1b[31mhello\x1b[39m world";
//! assert_eq!(visible_width(text), 11);
//! assert_eq!(truncate(text, 8, "…"), "\x1b[31mhello\x1b[39m w…");
//! assert_eq!(pad("ab", 6, ' ', Alignment::Center), "  ab  ");
//! ```
//!
//! ## Core Concepts
//!
//! - **Width**: columns a string occupies, ignoring escape sequences
//! - **Token**: one escape sequence or one visible character
//! - **Style state**: colors and attributes open at a point in the text
//! - **Options**: table configuration merged over defaults
//!
//! Diagnostics go through the `log` crate; [`logging::CellLogger`] is a
//! ready-made backend.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ansi;
pub mod cell;
pub mod cells;
pub mod chars;
pub mod colorize;
pub mod logging;
pub mod options;
pub mod pad;
pub mod style;
pub mod truncate;
pub mod wrap;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::ansi::{Token, strip_ansi, tokenize, tokens};
    pub use crate::cell::{cell_lines, content_width, draw_line, fit_block, fit_cell};
    pub use crate::cells::{cell_len, max_line_width, visible_width};
    pub use crate::chars::{BorderChars, RuleLevel};
    pub use crate::colorize::{colorize_lines, colorize_text};
    pub use crate::options::{
        OptionsError, StyleOptions, TableOptions, VerticalAlignment, merge_options,
    };
    pub use crate::pad::{Alignment, pad, repeat};
    pub use crate::style::{Attributes, NamedStyle, StyleState, apply_styles};
    pub use crate::truncate::{DEFAULT_ELLIPSIS, truncate, truncate_to_width};
    pub use crate::wrap::{WrapMode, word_wrap, wrap, wrap_hard};
}

// Re-export key types at crate root
pub use cells::{max_line_width, visible_width};
pub use chars::BorderChars;
pub use colorize::colorize_lines;
pub use options::{OptionsError, TableOptions, merge_options};
pub use pad::{Alignment, pad, repeat};
pub use style::{Attributes, StyleState};
pub use truncate::truncate;
pub use wrap::word_wrap;
