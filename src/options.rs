//! Table options and the option merger.
//!
//! Options arrive as loosely-shaped JSON (`serde_json::Value`) using the
//! conventional option names (`colWidths`, `style.padding-left`, ...). They
//! are deep-merged over a defaults tree and then deserialized into the typed
//! [`TableOptions`]. Mappings merge key by key; sequences and scalars are
//! replaced wholesale, so `{"style": {"head": []}}` clears the header style
//! instead of blending with the default `["red"]`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chars::BorderChars;
use crate::pad::Alignment;
use crate::style::{StyleNameError, apply_styles};
use crate::truncate::DEFAULT_ELLIPSIS;

/// Vertical alignment of cell content within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Content at the top (default).
    #[default]
    Top,
    /// Content centered.
    Center,
    /// Content at the bottom.
    Bottom,
}

/// Styling and spacing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleOptions {
    /// Spaces before cell content.
    pub padding_left: usize,
    /// Spaces after cell content.
    pub padding_right: usize,
    /// Style tokens for header cells. Empty means unstyled.
    pub head: Vec<String>,
    /// Style tokens for border glyphs. Empty means unstyled.
    pub border: Vec<String>,
    /// Omit separators between body rows.
    pub compact: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            padding_left: 1,
            padding_right: 1,
            head: vec!["red".to_string()],
            border: vec!["grey".to_string()],
            compact: false,
        }
    }
}

/// Fully resolved table options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Border glyphs.
    pub chars: BorderChars,
    /// Ellipsis appended when a cell is truncated.
    pub truncate: String,
    /// Fixed column widths, padding included. `None` means "fit content".
    pub col_widths: Vec<Option<usize>>,
    /// Fixed row heights in lines. `None` means "fit content".
    pub row_heights: Vec<Option<usize>>,
    /// Horizontal alignment per column.
    pub col_aligns: Vec<Alignment>,
    /// Vertical alignment per row.
    pub row_aligns: Vec<VerticalAlignment>,
    /// Styling and spacing.
    pub style: StyleOptions,
    /// Header cells.
    pub head: Vec<String>,
    /// Wrap overflowing cell content instead of truncating it.
    pub word_wrap: bool,
    /// When wrapping, break between words rather than anywhere.
    pub wrap_on_word_boundary: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            chars: BorderChars::default(),
            truncate: DEFAULT_ELLIPSIS.to_string(),
            col_widths: Vec::new(),
            row_heights: Vec::new(),
            col_aligns: Vec::new(),
            row_aligns: Vec::new(),
            style: StyleOptions::default(),
            head: Vec::new(),
            word_wrap: false,
            wrap_on_word_boundary: true,
        }
    }
}

impl TableOptions {
    /// Merge `overrides` over the default options.
    ///
    /// # Errors
    ///
    /// Fails as [`merge_options`] does.
    pub fn from_overrides(overrides: &Value) -> Result<Self, OptionsError> {
        merge_options(&Self::default(), overrides)
    }

    /// Parse JSON text and merge it over the default options.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Parse` if `json` is not valid JSON, otherwise
    /// fails as [`merge_options`] does.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let overrides: Value =
            serde_json::from_str(json).map_err(|e| OptionsError::Parse(e.to_string()))?;
        Self::from_overrides(&overrides)
    }

    /// Check that every header and border style token is known.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Style` for the first unknown token.
    pub fn validate(&self) -> Result<(), OptionsError> {
        apply_styles("", &self.style.head)?;
        apply_styles("", &self.style.border)?;
        Ok(())
    }

    /// Fixed width of column `index`, if one was configured.
    #[must_use]
    pub fn col_width(&self, index: usize) -> Option<usize> {
        self.col_widths.get(index).copied().flatten()
    }

    /// Horizontal alignment of column `index`.
    #[must_use]
    pub fn col_align(&self, index: usize) -> Alignment {
        self.col_aligns.get(index).copied().unwrap_or_default()
    }

    /// Vertical alignment of row `index`.
    #[must_use]
    pub fn row_align(&self, index: usize) -> VerticalAlignment {
        self.row_aligns.get(index).copied().unwrap_or_default()
    }

    /// Style header text with `style.head`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Style` if `style.head` names an unknown token.
    pub fn style_head(&self, text: &str) -> Result<String, OptionsError> {
        Ok(apply_styles(text, &self.style.head)?)
    }

    /// Style border text with `style.border`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Style` if `style.border` names an unknown token.
    pub fn style_border(&self, text: &str) -> Result<String, OptionsError> {
        Ok(apply_styles(text, &self.style.border)?)
    }
}

/// Merge JSON `overrides` over `defaults` and resolve typed options.
///
/// Mappings merge recursively. Sequences and scalars in `overrides` replace
/// the default value wholesale; `null` leaves the default in place. The
/// merged tree must deserialize into [`TableOptions`] and name only known
/// style tokens.
///
/// # Errors
///
/// Returns `OptionsError`:
/// - `NotAnObject` if `overrides` is neither a mapping nor `null`
/// - `InvalidShape` if a merged value has the wrong type for its key
/// - `Style` if `style.head` or `style.border` names an unknown token
pub fn merge_options(defaults: &TableOptions, overrides: &Value) -> Result<TableOptions, OptionsError> {
    if !overrides.is_object() && !overrides.is_null() {
        return Err(OptionsError::NotAnObject(json_type_name(overrides)));
    }

    let mut merged =
        serde_json::to_value(defaults).map_err(|e| OptionsError::InvalidShape(e.to_string()))?;
    merge_value(&mut merged, overrides);

    let options: TableOptions = serde_json::from_value(merged).map_err(|e| {
        log::debug!("rejected table options: {e}");
        OptionsError::InvalidShape(e.to_string())
    })?;
    options.validate()?;
    Ok(options)
}

/// Deep-merge `overrides` into `base` in place.
pub fn merge_value(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(over_map)) => merge_maps(base_map, over_map),
        (_, Value::Null) => {}
        (slot, value) => *slot = value.clone(),
    }
}

fn merge_maps(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        match base.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None if value.is_null() => {}
            None => {
                log::trace!("option {key:?} has no default");
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Error type for option merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The overrides root was not a mapping.
    NotAnObject(&'static str),
    /// The options text was not valid JSON.
    Parse(String),
    /// A value had the wrong shape for its key.
    InvalidShape(String),
    /// A style list named an unknown style token.
    Style(StyleNameError),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject(kind) => write!(f, "Options must be an object, got {kind}"),
            Self::Parse(s) => write!(f, "Invalid options JSON: {s}"),
            Self::InvalidShape(s) => write!(f, "Invalid option value: {s}"),
            Self::Style(e) => write!(f, "Style error: {e}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Style(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StyleNameError> for OptionsError {
    fn from(err: StyleNameError) -> Self {
        Self::Style(err)
    }
}
