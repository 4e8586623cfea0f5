// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Input that failed to parse as JSON.
///
/// Displays as `Invalid JSON: <parser message>`, the text shown under the
/// input box.
#[derive(Debug, Error)]
#[error("Invalid JSON: {source}")]
pub struct JsonError {
    #[from]
    source: serde_json::Error,
}

impl JsonError {
    /// 1-based line of the first offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// 1-based column of the first offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// The parser's message without the `Invalid JSON:` prefix.
    #[must_use]
    pub fn message(&self) -> String {
        self.source.to_string()
    }

    /// Whether the input ended before the document was complete, as opposed
    /// to containing a bad token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }
}
