// SPDX-License-Identifier: MIT
//
// HSL — the space harmony rules rotate in.
//
// Values are integer-rounded the way CSS authors write them (`hsl(204, 70%,
// 53%)`), so an RGB → HSL → RGB round trip is lossy by a few channel steps.
// Harmony generation only ever rotates hue or pins lightness, which keeps
// the derived colors stable under that rounding.

use std::fmt;

use crate::rgb::Rgb;

/// An HSL color with integer hue in degrees and integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    /// Hue angle, 0..360.
    pub h: u16,
    /// Saturation percentage, 0..=100.
    pub s: u8,
    /// Lightness percentage, 0..=100.
    pub l: u8,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Rotate the hue by `degrees` (wraps around 360°, never negative).
    #[must_use]
    pub fn with_hue_offset(self, degrees: i32) -> Self {
        let h = (i32::from(self.h) + degrees).rem_euclid(360);
        Self { h: h as u16, ..self }
    }

    /// Replace the lightness, holding hue and saturation.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: u8) -> Self {
        Self { l, ..self }
    }

    /// Whether the color has no hue (saturation zero).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.s == 0
    }
}

impl fmt::Display for Hsl {
    /// CSS functional notation: `hsl(204, 70%, 53%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Convert 8-bit sRGB to integer HSL.
///
/// Achromatic colors (all channels equal) get hue and saturation 0. When two
/// channels tie for the maximum, red wins over green and green over blue.
#[must_use]
// Exact comparison: `max` is one of the three channel values.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        // A hue that rounds up to 360 is the same angle as 0.
        h: (h * 360.0).round() as u16 % 360,
        s: to_percent(s),
        l: to_percent(l),
    }
}

/// Convert integer HSL back to 8-bit sRGB, rounding each channel.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if hsl.is_achromatic() {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// One channel of the piecewise HSL reconstruction. `t` is the hue position
/// for that channel in turns, wrapped into 0..=1 first.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

#[inline]
fn to_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── RGB → HSL ────────────────────────────────────────────────────────

    #[test]
    fn known_blue() {
        assert_eq!(rgb_to_hsl(Rgb::new(52, 152, 219)), Hsl::new(204, 70, 53));
    }

    #[test]
    fn primaries() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn achromatic_has_no_hue() {
        assert_eq!(rgb_to_hsl(Rgb::BLACK), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0, 0, 50));
    }

    #[test]
    fn hue_at_max_ties() {
        // Two channels share the max: yellow sits at 60°, cyan at 180°,
        // magenta at 300°.
        assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 0)).h, 60);
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 255)).h, 180);
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 255)).h, 300);
    }

    #[test]
    fn hue_near_full_turn_wraps_to_zero() {
        // Hue 359.8° rounds to 360, which is reported as 0.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert!(hsl.h < 360);
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test]
    fn complement_of_red_is_cyan() {
        assert_eq!(hsl_to_rgb(Hsl::new(180, 100, 50)), Rgb::new(0, 255, 255));
    }

    #[test]
    fn gray_reconstruction() {
        assert_eq!(hsl_to_rgb(Hsl::new(0, 0, 50)), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(Hsl::new(200, 0, 100)), Rgb::WHITE);
    }

    #[test]
    fn dark_red() {
        assert_eq!(hsl_to_rgb(Hsl::new(0, 100, 20)), Rgb::new(102, 0, 0));
    }

    #[test]
    fn exact_roundtrip_for_primaries() {
        for rgb in [Rgb::new(255, 0, 0), Rgb::new(0, 255, 255), Rgb::BLACK, Rgb::WHITE] {
            assert_eq!(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    #[test]
    fn hue_offset_wraps_both_ways() {
        let hsl = Hsl::new(350, 50, 50);
        assert_eq!(hsl.with_hue_offset(30).h, 20);
        assert_eq!(Hsl::new(10, 50, 50).with_hue_offset(-30).h, 340);
        assert_eq!(hsl.with_hue_offset(720).h, 350);
    }

    #[test]
    fn with_lightness_holds_hue_and_saturation() {
        let hsl = Hsl::new(204, 70, 53).with_lightness(80);
        assert_eq!(hsl, Hsl::new(204, 70, 80));
    }

    #[test]
    fn display_is_css_hsl() {
        assert_eq!(Hsl::new(204, 70, 53).to_string(), "hsl(204, 70%, 53%)");
    }
}
