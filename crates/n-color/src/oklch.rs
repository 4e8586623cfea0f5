// SPDX-License-Identifier: MIT
//
// OKLCH — perceptual lightness, chroma and hue for display and export.
//
// Conversion pipeline (Björn Ottosson's Oklab, via CIE XYZ):
//
//   sRGB ──gamma decode──► linear sRGB ──M_xyz──► XYZ ──M1──► LMS
//        ──cbrt──► LMS' ──M2──► OKLab (L, a, b) ──polar──► OKLCH (L, C, H)
//
// Results are rounded the way they are printed: L and C to 4 decimals,
// H to 2. The engine only ever converts *into* OKLCH; palettes are derived
// in HSL and OKLCH is an output representation.

use std::fmt;

use crate::rgb::Rgb;

/// A color in OKLCH, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,
    /// Chroma: 0.0 (gray) upward; sRGB tops out near 0.32.
    pub c: f64,
    /// Hue angle in degrees, 0..360.
    pub h: f64,
}

impl fmt::Display for Oklch {
    /// CSS notation with shortest decimal fields: `oklch(0.6276 0.2577 29.23)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

/// Convert 8-bit sRGB to rounded OKLCH.
#[must_use]
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let (r, g, b) = rgb.to_unit();
    let (x, y, z) = linear_srgb_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (l, a, b_ok) = xyz_to_oklab(x, y, z);
    let (c, h) = oklab_to_polar(a, b_ok);

    let h = round_to(h, 2);
    Oklch {
        l: round_to(l, 4),
        c: round_to(c, 4),
        // A hue that rounds up to 360 is the same angle as 0.
        h: if h >= 360.0 { 0.0 } else { h },
    }
}

// ─── Pipeline stages ─────────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// This is the IEC 61966-2-1 transfer function with its 0.04045 knee. The
/// WCAG luminance in [`crate::contrast`] uses its own 0.03928 knee; the two
/// are deliberately kept apart.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear sRGB → CIE XYZ (D65).
#[inline]
fn linear_srgb_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let x = 0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g));
    let y = 0.072_175_0f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g));
    let z = 0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192_0 * g));
    (x, y, z)
}

/// CIE XYZ → OKLab through the LMS cone response.
#[inline]
fn xyz_to_oklab(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    // XYZ → LMS, then the cube-root nonlinearity.
    let l_ = 0.128_859_713_7f64.mul_add(-z, 0.818_933_010_1f64.mul_add(x, 0.361_866_742_4 * y)).cbrt();
    let m_ = 0.036_145_638_7f64.mul_add(z, 0.032_984_543_6f64.mul_add(x, 0.929_311_871_5 * y)).cbrt();
    let s_ = 0.633_851_707_0f64.mul_add(z, 0.048_200_301_8f64.mul_add(x, 0.264_366_269_1 * y)).cbrt();

    // LMS' → OKLab.
    let l = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b = 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));
    (l, a, b)
}

/// OKLab a, b → chroma and hue in degrees, hue normalized to 0..360.
#[inline]
fn oklab_to_polar(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = b.atan2(a).to_degrees();
    (c, if h < 0.0 { h + 360.0 } else { h })
}

/// Round to `places` decimals. Adding 0.0 folds a negative zero into +0.
#[inline]
fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale + 0.0
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn black_is_zero() {
        let ok = rgb_to_oklch(Rgb::BLACK);
        assert!(approx_eq(ok.l, 0.0, 1e-9), "L: {}", ok.l);
        assert!(approx_eq(ok.c, 0.0, 1e-9), "C: {}", ok.c);
    }

    #[test]
    fn white_is_full_lightness() {
        let ok = rgb_to_oklch(Rgb::WHITE);
        assert!(approx_eq(ok.l, 1.0, 0.001), "L: {}", ok.l);
        assert!(ok.c < 0.001, "C: {}", ok.c);
    }

    #[test]
    fn red_reference() {
        // oklch(0.628 0.2577 29.23) in the CSS Color 4 reference.
        let ok = rgb_to_oklch(Rgb::new(255, 0, 0));
        assert!(approx_eq(ok.l, 0.628, 0.002), "L: {}", ok.l);
        assert!(approx_eq(ok.c, 0.2577, 0.002), "C: {}", ok.c);
        assert!(approx_eq(ok.h, 29.23, 0.3), "H: {}", ok.h);
    }

    #[test]
    fn blue_reference() {
        // oklch(0.452 0.313 264.05).
        let ok = rgb_to_oklch(Rgb::new(0, 0, 255));
        assert!(approx_eq(ok.l, 0.452, 0.002), "L: {}", ok.l);
        assert!(approx_eq(ok.c, 0.313, 0.002), "C: {}", ok.c);
        assert!(approx_eq(ok.h, 264.05, 0.3), "H: {}", ok.h);
    }

    #[test]
    fn gray_has_no_chroma() {
        let ok = rgb_to_oklch(Rgb::new(128, 128, 128));
        assert!(ok.c < 0.001, "C: {}", ok.c);
        assert!(ok.l > 0.55 && ok.l < 0.65, "L: {}", ok.l);
    }

    // ── Rounding ─────────────────────────────────────────────────────────

    #[test]
    fn fields_are_rounded() {
        let ok = rgb_to_oklch(Rgb::new(52, 152, 219));
        assert!(approx_eq(ok.l * 10_000.0, (ok.l * 10_000.0).round(), 1e-6));
        assert!(approx_eq(ok.c * 10_000.0, (ok.c * 10_000.0).round(), 1e-6));
        assert!(approx_eq(ok.h * 100.0, (ok.h * 100.0).round(), 1e-6));
    }

    #[test]
    fn hue_in_range() {
        for rgb in [Rgb::new(255, 0, 128), Rgb::new(10, 200, 30), Rgb::new(120, 0, 255)] {
            let ok = rgb_to_oklch(rgb);
            assert!((0.0..360.0).contains(&ok.h), "H out of range: {}", ok.h);
        }
    }

    #[test]
    fn round_to_folds_negative_zero() {
        let v = round_to(-0.000_01, 4);
        assert!(v == 0.0 && v.is_sign_positive());
    }

    // ── Transfer function ────────────────────────────────────────────────

    #[test]
    fn linear_knee() {
        assert!(approx_eq(srgb_to_linear(0.04), 0.04 / 12.92, 1e-12));
        assert!(approx_eq(srgb_to_linear(1.0), 1.0, 1e-12));
        assert!(approx_eq(srgb_to_linear(0.5), 0.214, 0.001));
    }

    // ── Display ──────────────────────────────────────────────────────────

    #[test]
    fn display_uses_shortest_decimals() {
        let ok = Oklch { l: 0.5, c: 0.1234, h: 29.23 };
        assert_eq!(ok.to_string(), "oklch(0.5 0.1234 29.23)");
        let black = rgb_to_oklch(Rgb::BLACK);
        assert!(black.to_string().starts_with("oklch(0 0 "));
    }
}
