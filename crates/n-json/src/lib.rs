// SPDX-License-Identifier: MIT
//
// n-json — format, minify and validate JSON text.
//
// Blank input is its own state, neither valid nor invalid: the functions
// here return `Ok(None)` / `Validity::Empty` for it so a front-end can show
// an empty pane instead of an error. Object keys keep the order they were
// written in.

pub mod error;

pub use error::JsonError;

use serde_json::Value;
use tracing::debug;

/// Outcome of [`validate_json`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Nothing but whitespace.
    Empty,
    Valid,
    /// Not JSON; carries the `Invalid JSON: ...` message.
    Invalid(String),
}

impl Validity {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Pretty-print `input` with two-space indentation.
///
/// # Errors
///
/// Returns [`JsonError`] when `input` is not a single JSON document.
pub fn format_json(input: &str) -> Result<Option<String>, JsonError> {
    let Some(value) = parse(input)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::to_string_pretty(&value)?))
}

/// Re-serialize `input` with no insignificant whitespace.
///
/// # Errors
///
/// Returns [`JsonError`] when `input` is not a single JSON document.
pub fn minify_json(input: &str) -> Result<Option<String>, JsonError> {
    let Some(value) = parse(input)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::to_string(&value)?))
}

/// Classify `input` without producing output.
#[must_use]
pub fn validate_json(input: &str) -> Validity {
    match parse(input) {
        Ok(None) => Validity::Empty,
        Ok(Some(_)) => Validity::Valid,
        Err(e) => Validity::Invalid(e.to_string()),
    }
}

fn parse(input: &str) -> Result<Option<Value>, JsonError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str(input) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            debug!(line = e.line(), column = e.column(), "rejected JSON input");
            Err(e.into())
        }
    }
}
