//! Logged assertion helpers.
//!
//! These wrap standard assertions with tracing logs, so failures in CI come
//! with the values that were compared.

#![allow(dead_code)]

use std::fmt::Debug;

use table_text::style::StyleState;
use table_text::visible_width;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that a result is Ok and return the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => {
            tracing::trace!(context = context, value = ?value, "result is Ok");
            value
        }
        Err(err) => {
            tracing::error!(context = context, error = ?err, "assertion failed: expected Ok");
            panic!("{context}: expected Ok, got Err({err:?})");
        }
    }
}

/// Assert that a result is Err and return the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    match result {
        Err(err) => {
            tracing::trace!(context = context, error = ?err, "result is Err");
            err
        }
        Ok(value) => {
            tracing::error!(context = context, value = ?value, "assertion failed: expected Err");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Assert the visible width of styled text.
#[track_caller]
pub fn assert_width_logged(context: &str, text: &str, expected: usize) {
    let actual = visible_width(text);
    tracing::debug!(context = context, text = ?text, expected, actual, "asserting width");
    assert_eq!(actual, expected, "{context}: width of {text:?}");
}

/// Assert that no style is left open at the end of `text`.
#[track_caller]
pub fn assert_styles_closed(context: &str, text: &str) {
    let state = StyleState::from_text(text);
    if state.is_active() {
        tracing::error!(context = context, text = ?text, state = ?state, "style left open");
    }
    assert!(!state.is_active(), "{context}: {text:?} leaves {state:?} open");
}
