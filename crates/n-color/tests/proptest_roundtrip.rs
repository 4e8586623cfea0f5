//! Property-based tests for the n-color conversions.
//!
//! Exhaustive sweeps over all 256³ colors are too slow for the default test
//! run, so these sample the space randomly.

use n_color::contrast::contrast_ratio_rgb;
use n_color::{Rgb, hex_to_rgb, hsl_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex, rgb_to_hsl, rgb_to_oklch};
use proptest::prelude::*;

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn arb_hex() -> impl Strategy<Value = String> {
    prop_oneof![
        "#?[0-9a-fA-F]{3}",
        "#?[0-9a-fA-F]{6}",
    ]
}

fn channel_diff(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

proptest! {
    /// Every valid hex string parses, and re-encoding gives back the
    /// normalized form.
    #[test]
    fn hex_roundtrips_through_rgb(s in arb_hex()) {
        prop_assert!(is_valid_hex(&s));
        let normalized = normalize_hex(&s);
        let rgb = hex_to_rgb(&normalized);
        prop_assert!(rgb.is_some());
        let rgb = rgb.unwrap();
        prop_assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), normalized.to_ascii_lowercase());
    }

    /// Integer HSL loses at most a few channel steps. Hue is rounded to whole
    /// degrees and lightness/saturation to whole percent, so the bound is the
    /// sum of those three half-step errors through the steepest part of the
    /// reconstruction, plus final rounding.
    #[test]
    fn hsl_roundtrip_is_close(rgb in arb_rgb()) {
        let back = hsl_to_rgb(rgb_to_hsl(rgb));
        prop_assert!(channel_diff(rgb.r, back.r) <= 6, "{:?} -> {:?}", rgb, back);
        prop_assert!(channel_diff(rgb.g, back.g) <= 6, "{:?} -> {:?}", rgb, back);
        prop_assert!(channel_diff(rgb.b, back.b) <= 6, "{:?} -> {:?}", rgb, back);
    }

    /// Grays only carry the lightness rounding error, which stays within one
    /// channel step.
    #[test]
    fn hsl_roundtrip_gray_within_one(v in any::<u8>()) {
        let gray = Rgb::new(v, v, v);
        let back = hsl_to_rgb(rgb_to_hsl(gray));
        prop_assert!(channel_diff(v, back.r) <= 1, "{} -> {:?}", v, back);
        prop_assert_eq!(back.r, back.g);
        prop_assert_eq!(back.g, back.b);
    }

    /// HSL fields stay inside their documented ranges.
    #[test]
    fn hsl_fields_in_range(rgb in arb_rgb()) {
        let hsl = rgb_to_hsl(rgb);
        prop_assert!(hsl.h < 360);
        prop_assert!(hsl.s <= 100);
        prop_assert!(hsl.l <= 100);
    }

    /// OKLCH fields stay inside their documented ranges.
    #[test]
    fn oklch_fields_in_range(rgb in arb_rgb()) {
        let ok = rgb_to_oklch(rgb);
        prop_assert!((0.0..=1.0).contains(&ok.l), "L = {}", ok.l);
        prop_assert!(ok.c >= 0.0, "C = {}", ok.c);
        prop_assert!((0.0..360.0).contains(&ok.h), "H = {}", ok.h);
    }

    /// Contrast is symmetric and bounded by 1 and 21.
    #[test]
    fn contrast_bounds(a in arb_rgb(), b in arb_rgb()) {
        let ab = contrast_ratio_rgb(a, b);
        let ba = contrast_ratio_rgb(b, a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!(ab >= 1.0);
        prop_assert!(ab <= 21.0 + 1e-9);
    }
}
