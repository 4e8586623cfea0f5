//! Harmony rules — fixed hue relationships around a base color.
//!
//! Each rule takes the base color into HSL, derives its accents there, and
//! converts them back to sRGB. Hue rules hold saturation and lightness at the
//! base values and rotate hue; the monochromatic rule holds hue and
//! saturation and pins lightness instead.
//!
//! | Rule          | Entries (hue offset)                              |
//! |---------------|---------------------------------------------------|
//! | complementary | Base (0), Complementary (+180)                    |
//! | triadic       | Base (0), Triadic 1 (+120), Triadic 2 (+240)      |
//! | analogous     | Analogous -30° (−30), Base (0), Analogous +30° (+30) |
//! | tetradic      | Base (0), Tetradic +90°, +180°, +270°             |
//! | monochromatic | Base, Mono 20% / 40% / 60% / 80% (lightness)      |

use std::fmt;
use std::str::FromStr;

use n_color::{Hsl, hex_to_rgb};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::palette::{Palette, PaletteEntry};

/// Lightness percentages of the monochromatic steps, darkest first.
pub const MONO_LIGHTNESS: [u8; 4] = [20, 40, 60, 80];

/// The kind of harmony used to derive accents from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    /// Opposite hue (2 colors).
    #[default]
    Complementary,
    /// 120-degree spacing (3 colors).
    Triadic,
    /// Neighbours at ±30 degrees (3 colors).
    Analogous,
    /// 90-degree spacing, a square on the wheel (4 colors).
    Tetradic,
    /// One hue at four lightness steps (5 colors).
    Monochromatic,
}

impl HarmonyRule {
    /// Build the palette for `base` under this rule.
    #[must_use]
    pub fn generate(self, base: &str) -> Palette {
        generate_palette(base, self)
    }

    /// Number of entries this rule produces for a valid base color.
    #[must_use]
    pub const fn entry_count(self) -> usize {
        match self {
            Self::Complementary => 2,
            Self::Triadic | Self::Analogous => 3,
            Self::Tetradic => 4,
            Self::Monochromatic => 1 + MONO_LIGHTNESS.len(),
        }
    }

    /// Machine name, as accepted by [`HarmonyRule::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Human-readable label for selectors and headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Analogous => "Analogous",
            Self::Tetradic => "Tetradic (Square)",
            Self::Monochromatic => "Monochromatic",
        }
    }

    /// Parse a rule from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|r| r.name() == lower).copied()
    }

    /// All rules, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Triadic,
            Self::Analogous,
            Self::Tetradic,
            Self::Monochromatic,
        ]
    }

    /// Hue offsets and entry names for the hue-rotating rules, in output
    /// order. Offset 0 is the base color itself.
    const fn hue_steps(self) -> &'static [(i32, &'static str)] {
        match self {
            Self::Complementary => &[(0, "Base"), (180, "Complementary")],
            Self::Triadic => &[(0, "Base"), (120, "Triadic 1"), (240, "Triadic 2")],
            Self::Analogous => &[(-30, "Analogous -30°"), (0, "Base"), (30, "Analogous +30°")],
            Self::Tetradic => &[
                (0, "Base"),
                (90, "Tetradic +90°"),
                (180, "Tetradic +180°"),
                (270, "Tetradic +270°"),
            ],
            Self::Monochromatic => &[(0, "Base")],
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnknownHarmony(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Derive the palette for `base` under `rule`.
///
/// If `base` is not valid hex the result is the single entry
/// `[{ hex: base, name: "Base" }]`. That is the defined fallback, not an
/// error. Valid input yields canonical uppercase hex in every entry.
#[must_use]
pub fn generate_palette(base: &str, rule: HarmonyRule) -> Palette {
    let Some(rgb) = hex_to_rgb(base) else {
        warn!(base, rule = rule.name(), "invalid base color, using base-only palette");
        return Palette::base_only(base);
    };

    let hsl = rgb.to_hsl();
    let base_hex = rgb.to_canonical_hex();

    let mut entries: Vec<PaletteEntry> = rule
        .hue_steps()
        .iter()
        .map(|&(offset, name)| {
            if offset == 0 {
                PaletteEntry::new(base_hex.clone(), name)
            } else {
                PaletteEntry::new(derived_hex(hsl.with_hue_offset(offset)), name)
            }
        })
        .collect();

    if rule == HarmonyRule::Monochromatic {
        entries.extend(MONO_LIGHTNESS.iter().map(|&l| {
            PaletteEntry::new(derived_hex(hsl.with_lightness(l)), format!("Mono {l}%"))
        }));
    }

    debug!(
        rule = rule.name(),
        base = %base_hex,
        %hsl,
        entries = entries.len(),
        "generated palette"
    );
    Palette::new(entries)
}

/// Derive a palette from a rule given by name.
///
/// Unrecognized rule names, like invalid base colors, fall back to the
/// single-entry base palette.
#[must_use]
pub fn generate_palette_by_name(base: &str, rule: &str) -> Palette {
    if let Some(rule) = HarmonyRule::from_name(rule) {
        generate_palette(base, rule)
    } else {
        warn!(rule, "unknown harmony rule, using base-only palette");
        Palette::base_only(base)
    }
}

fn derived_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_canonical_hex()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
