//! Whole-palette export: CSS custom properties, SCSS variables, JSON.
//!
//! CSS and SCSS write each entry in the caller's [`ColorFormat`]. JSON ignores
//! it and carries hex, rgb, hsl and oklch side by side, so one export serves
//! every consumer.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::error::ParseError;
use crate::format::{ColorFormat, format_color};
use crate::palette::Palette;

/// Target syntax for [`export_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Scss => "SCSS Variables",
            Self::Json => "JSON",
        }
    }

    /// Parse an export format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Scss, Self::Json]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnknownExportFormat(s.to_string()))
    }
}

/// Lowercase `name` and replace each run of whitespace with `sep`.
///
/// `"Triadic 1"` becomes `triadic-1` with `'-'` and `triadic_1` with `'_'`.
/// Other characters, including `+`, `-` and `°`, are kept as they are.
#[must_use]
pub fn slug(name: &str, sep: char) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(sep);
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

/// Render the whole palette as `export` text.
///
/// `color_format` applies to CSS and SCSS values only.
#[must_use]
pub fn export_palette(palette: &Palette, export: ExportFormat, color_format: ColorFormat) -> String {
    match export {
        ExportFormat::Css => {
            let mut out = String::from(":root {\n");
            for entry in palette {
                let value = format_color(&entry.hex, color_format);
                let _ = writeln!(out, "  --color-{}: {value};", slug(&entry.name, '-'));
            }
            out.push('}');
            out
        }
        ExportFormat::Scss => {
            let mut out = String::new();
            for entry in palette {
                let value = format_color(&entry.hex, color_format);
                let _ = writeln!(out, "$color-{}: {value};", slug(&entry.name, '-'));
            }
            out
        }
        ExportFormat::Json => serde_json::to_string_pretty(&JsonPalette(palette)).unwrap_or_else(|e| {
            warn!(error = %e, "palette JSON serialization failed");
            String::from("{}")
        }),
    }
}

// ─── JSON shape ──────────────────────────────────────────────────────────────

/// Palette as a JSON object keyed by slug, in palette order.
struct JsonPalette<'a>(&'a Palette);

#[derive(Serialize)]
struct JsonSwatch {
    hex: String,
    rgb: String,
    hsl: String,
    oklch: String,
}

impl JsonSwatch {
    fn of(hex: &str) -> Self {
        Self {
            hex: format_color(hex, ColorFormat::Hex),
            rgb: format_color(hex, ColorFormat::Rgb),
            hsl: format_color(hex, ColorFormat::Hsl),
            oklch: format_color(hex, ColorFormat::Oklch),
        }
    }
}

impl Serialize for JsonPalette<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&slug(&entry.name, '_'), &JsonSwatch::of(&entry.hex))?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteEntry;
    use pretty_assertions::assert_eq;

    fn red_pair() -> Palette {
        Palette::new(vec![
            PaletteEntry::new("#FF0000", "Base"),
            PaletteEntry::new("#00FFFF", "Complementary"),
        ])
    }

    // ── slug ──

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slug("Triadic 1", '-'), "triadic-1");
        assert_eq!(slug("Mono  20%", '_'), "mono_20%");
        assert_eq!(slug("Tetradic +90°", '-'), "tetradic-+90°");
        assert_eq!(slug("Analogous -30°", '_'), "analogous_-30°");
        assert_eq!(slug("Base", '-'), "base");
    }

    // ── CSS / SCSS ──

    #[test]
    fn css_block() {
        let css = export_palette(&red_pair(), ExportFormat::Css, ColorFormat::Hex);
        assert_eq!(
            css,
            ":root {\n  --color-base: #FF0000;\n  --color-complementary: #00FFFF;\n}"
        );
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        assert_eq!(css.matches("--color-").count(), 2);
    }

    #[test]
    fn css_uses_chosen_format() {
        let css = export_palette(&red_pair(), ExportFormat::Css, ColorFormat::Rgb);
        assert!(css.contains("  --color-base: rgb(255, 0, 0);\n"), "{css}");
    }

    #[test]
    fn scss_lines() {
        let scss = export_palette(&red_pair(), ExportFormat::Scss, ColorFormat::Hsl);
        assert_eq!(
            scss,
            "$color-base: hsl(0, 100%, 50%);\n$color-complementary: hsl(180, 100%, 50%);\n"
        );
    }

    #[test]
    fn empty_palette_css() {
        let css = export_palette(&Palette::default(), ExportFormat::Css, ColorFormat::Hex);
        assert_eq!(css, ":root {\n}");
    }

    // ── JSON ──

    #[test]
    fn json_keeps_palette_order_and_ignores_color_format() {
        let palette = Palette::new(vec![
            PaletteEntry::new("#000000", "Mono 20%"),
            PaletteEntry::new("#000000", "Base"),
        ]);
        let json = export_palette(&palette, ExportFormat::Json, ColorFormat::Rgba);
        let expected = r##"{
  "mono_20%": {
    "hex": "#000000",
    "rgb": "rgb(0, 0, 0)",
    "hsl": "hsl(0, 0%, 0%)",
    "oklch": "oklch(0 0 0)"
  },
  "base": {
    "hex": "#000000",
    "rgb": "rgb(0, 0, 0)",
    "hsl": "hsl(0, 0%, 0%)",
    "oklch": "oklch(0 0 0)"
  }
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn json_of_fallback_palette_carries_raw_input() {
        let json = export_palette(&Palette::base_only("zzz"), ExportFormat::Json, ColorFormat::Hex);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base"]["hex"], "zzz");
        assert_eq!(value["base"]["oklch"], "zzz");
    }

    // ── names ──

    #[test]
    fn parse_names() {
        assert_eq!("SCSS".parse::<ExportFormat>(), Ok(ExportFormat::Scss));
        assert_eq!(
            "yaml".parse::<ExportFormat>(),
            Err(ParseError::UnknownExportFormat("yaml".into()))
        );
        assert_eq!(ExportFormat::default(), ExportFormat::Css);
    }

    #[test]
    fn labels() {
        assert_eq!(ExportFormat::Css.label(), "CSS Variables");
        assert_eq!(ExportFormat::Json.label(), "JSON");
    }
}
