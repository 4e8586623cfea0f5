//! Errors from parsing rule and format names.
//!
//! Palette generation and formatting themselves never fail; only turning a
//! user-typed name into one of the closed enums can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "unknown harmony rule `{0}` (expected complementary, triadic, analogous, tetradic or monochromatic)"
    )]
    UnknownHarmony(String),

    #[error("unknown color format `{0}` (expected hex, rgb, rgba, hsl, hsla or oklch)")]
    UnknownColorFormat(String),

    #[error("unknown export format `{0}` (expected css, scss or json)")]
    UnknownExportFormat(String),
}
