// SPDX-License-Identifier: MIT
//
// WCAG 2.x contrast scoring.
//
// Relative luminance uses the WCAG linearization with its historical 0.03928
// knee, not the 0.04045 knee of the OKLCH pipeline. No 8-bit channel value
// falls between the two knees, but each stage keeps the constant its own
// standard defines.
//
// Tiers (lower bounds inclusive):
//
//   AAA  ≥ 7.0    Excellent
//   AA   ≥ 4.5    Good
//   A    ≥ 3.0    Fair
//   Fail  < 3.0   Poor

use std::fmt;

use crate::rgb::{Rgb, hex_to_rgb};

/// Linearize one 8-bit channel for WCAG luminance.
#[inline]
fn wcag_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r_lin = wcag_linear(rgb.r);
    let g_lin = wcag_linear(rgb.g);
    let b_lin = wcag_linear(rgb.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Contrast ratio between two parsed colors, in [1.0, 21.0].
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
///
/// If either color is not valid hex the ratio is 1.0, the minimum, which
/// rates as [`Rating::Fail`].
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (hex_to_rgb(a), hex_to_rgb(b)) {
        (Some(a), Some(b)) => contrast_ratio_rgb(a, b),
        _ => 1.0,
    }
}

/// Contrast ratio and its rating for two hex colors.
#[must_use]
pub fn contrast(a: &str, b: &str) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(a, b))
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// WCAG conformance tier for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    /// Below 3:1.
    Fail,
    /// 3:1 and up.
    A,
    /// 4.5:1 and up.
    Aa,
    /// 7:1 and up.
    Aaa,
}

impl Rating {
    /// Classify a ratio. Each tier includes its lower bound.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// Short level label: `AAA`, `AA`, `A`, `Fail`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "Fail",
        }
    }

    /// One-word verdict shown next to the level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Aaa => "Excellent",
            Self::Aa => "Good",
            Self::A => "Fair",
            Self::Fail => "Poor",
        }
    }

    /// Smallest ratio that earns this tier.
    #[must_use]
    pub const fn min_ratio(self) -> f64 {
        match self {
            Self::Aaa => 7.0,
            Self::Aa => 4.5,
            Self::A => 3.0,
            Self::Fail => 1.0,
        }
    }

    /// All tiers, best first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Aaa, Self::Aa, Self::A, Self::Fail]
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── ContrastResult ──────────────────────────────────────────────────────────

/// A contrast ratio together with its WCAG tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    pub ratio: f64,
    pub rating: Rating,
}

impl ContrastResult {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self { ratio, rating: Rating::from_ratio(ratio) }
    }
}

impl fmt::Display for ContrastResult {
    /// `AAA (21.0:1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}:1)", self.rating, self.ratio)
    }
}

// ─── Accessibility ───────────────────────────────────────────────────────────

/// How a color scores as a background for white and for black text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accessibility {
    pub vs_white: ContrastResult,
    pub vs_black: ContrastResult,
}

impl Accessibility {
    /// Score a hex color. Invalid input scores the minimum on both sides.
    #[must_use]
    pub fn of(hex: &str) -> Self {
        Self {
            vs_white: contrast(hex, "#FFFFFF"),
            vs_black: contrast(hex, "#000000"),
        }
    }

    /// Whichever of white or black reads better on this color. Ties go to
    /// white.
    #[must_use]
    pub fn best_text(&self) -> Rgb {
        if self.vs_white.ratio >= self.vs_black.ratio {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
