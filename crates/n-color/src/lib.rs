// SPDX-License-Identifier: MIT
//
// n-color — the color engine behind the n-devtools palette generator.
//
// Everything in here is a pure function of its inputs. A color enters the
// engine as a free-text hex string, gets validated once, and from then on
// travels as an 8-bit `Rgb` triple that every other representation is
// derived from:
//
//   "#3498db" ──► Rgb ──┬──► Hsl    (integer degrees / percent)
//                       ├──► Oklch  (linear sRGB → XYZ → OKLab → polar)
//                       └──► relative luminance → WCAG contrast
//
// Invalid input never panics and never errors: conversions return `None`,
// contrast falls back to the minimum ratio, and callers that must tell
// "invalid" apart from "valid but black" ask `is_valid_hex` first.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Rounded floats are narrowed into u8/u16 channels after clamping.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod contrast;
pub mod hsl;
pub mod oklch;
pub mod rgb;

pub use contrast::{Accessibility, ContrastResult, Rating, contrast, contrast_ratio};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use oklch::{Oklch, rgb_to_oklch};
pub use rgb::{Rgb, hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex};
