// SPDX-License-Identifier: MIT
//
// Hex strings and 8-bit sRGB triples.
//
// Hex is the interchange format of the whole toolkit: it is what the user
// types, what palette entries carry, and what exports print. Accepted input
// is 3 or 6 hex digits with an optional leading `#`, in any case. The
// 3-digit form is shorthand where every digit doubles (`abc` → `aabbcc`).

use std::fmt;

use crate::hsl::{Hsl, rgb_to_hsl};
use crate::oklch::{Oklch, rgb_to_oklch};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
///
/// Every validated color in the engine is an `Rgb`; HSL and OKLCH are
/// derived from it on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color. Returns `None` if [`is_valid_hex`] rejects it.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        hex_to_rgb(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`, the canonical form used in palettes and output.
    #[must_use]
    pub fn to_canonical_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        rgb_to_oklch(self)
    }

    /// Channels scaled to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    /// CSS functional notation: `rgb(52, 152, 219)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Whether `s` is a hex color: exactly 3 or 6 hex digits after an optional
/// leading `#`.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip `#`, expand 3-digit shorthand, and re-add `#`.
///
/// Case is preserved. This does not validate; check [`is_valid_hex`] first.
#[must_use]
pub fn normalize_hex(s: &str) -> String {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.chars().count() == 3 {
        for ch in digits.chars() {
            out.push(ch);
            out.push(ch);
        }
    } else {
        out.push_str(digits);
    }
    out
}

/// Parse a hex color into 8-bit channels, or `None` if it is not valid.
#[must_use]
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    if !is_valid_hex(s) {
        return None;
    }
    let normalized = normalize_hex(s);
    let bytes = &normalized.as_bytes()[1..];
    Some(Rgb::new(
        parse_hex_byte(&bytes[0..2])?,
        parse_hex_byte(&bytes[2..4])?,
        parse_hex_byte(&bytes[4..6])?,
    ))
}

/// Format 8-bit channels as lowercase, zero-padded `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some((hi << 4) | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
