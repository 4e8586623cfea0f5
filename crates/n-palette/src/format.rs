//! Single-color text formats.
//!
//! [`format_color`] renders one palette entry the way it is shown on a card or
//! written into an export. The alpha variants always carry full opacity; the
//! engine has no notion of transparency.

use std::fmt;
use std::str::FromStr;

use n_color::{Rgb, hex_to_rgb, normalize_hex};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How a color is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#3498DB`
    Hex,
    /// `rgb(52, 152, 219)`
    Rgb,
    /// `rgba(52, 152, 219, 1)`
    Rgba,
    /// `hsl(204, 70%, 53%)`
    Hsl,
    /// `hsla(204, 70%, 53%, 1)`
    Hsla,
    /// `oklch(0.6462 0.1328 242.08)`
    #[default]
    Oklch,
}

impl ColorFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Oklch => "oklch",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Hsl => "HSL",
            Self::Hsla => "HSLA",
            Self::Oklch => "OKLCH",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgb, Self::Rgba, Self::Hsl, Self::Hsla, Self::Oklch]
    }

    /// Render an already-parsed color.
    #[must_use]
    pub fn render(self, rgb: Rgb) -> String {
        match self {
            Self::Hex => rgb.to_canonical_hex(),
            Self::Rgb => rgb.to_string(),
            Self::Rgba => format!("rgba({}, {}, {}, 1)", rgb.r, rgb.g, rgb.b),
            Self::Hsl => rgb.to_hsl().to_string(),
            Self::Hsla => {
                let hsl = rgb.to_hsl();
                format!("hsla({}, {}%, {}%, 1)", hsl.h, hsl.s, hsl.l)
            }
            Self::Oklch => rgb.to_oklch().to_string(),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnknownColorFormat(s.to_string()))
    }
}

/// Render `hex` in `format`.
///
/// Input that is not a valid hex color comes back unchanged, so a half-typed
/// value stays visible instead of turning into an error.
#[must_use]
pub fn format_color(hex: &str, format: ColorFormat) -> String {
    match hex_to_rgb(hex) {
        Some(_) if format == ColorFormat::Hex => normalize_hex(hex).to_ascii_uppercase(),
        Some(rgb) => format.render(rgb),
        None => hex.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
