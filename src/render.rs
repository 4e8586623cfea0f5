// SPDX-License-Identifier: MIT
//
// Plain-text views of palettes and colors.
//
// Each palette entry is a "card": name, canonical hex, the value in the
// selected format, and optionally how readable white and black text are on
// it. With `Style::Color` a truecolor swatch leads each card.

use std::io::{self, Write};

use n_color::{Accessibility, ContrastResult, Rgb};
use n_palette::{ColorFormat, HarmonyRule, Palette, PaletteEntry, format_color};

use crate::ansi::Style;

const NAME_WIDTH: usize = 16;
const SWATCH_WIDTH: usize = 4;

/// Heading plus one card per entry.
pub fn palette(
    w: &mut impl Write,
    palette: &Palette,
    rule: HarmonyRule,
    format: ColorFormat,
    accessibility: bool,
    style: Style,
) -> io::Result<()> {
    let base = palette.get("Base").map_or("", |e| e.hex.as_str());
    writeln!(w, "{} palette for {base}", rule.label())?;
    for entry in palette {
        writeln!(w)?;
        card(w, entry, format, accessibility, style)?;
    }
    Ok(())
}

fn card(
    w: &mut impl Write,
    entry: &PaletteEntry,
    format: ColorFormat,
    accessibility: bool,
    style: Style,
) -> io::Result<()> {
    if let Some(rgb) = entry.rgb() {
        let text = entry.accessibility().best_text();
        style.swatch(w, rgb, text, "", SWATCH_WIDTH)?;
        if style == Style::Color {
            write!(w, " ")?;
        }
    }

    let value = format_color(&entry.hex, format);
    if format == ColorFormat::Hex || value == entry.hex {
        writeln!(w, "{:<NAME_WIDTH$} {}", entry.name, entry.hex)?;
    } else {
        writeln!(w, "{:<NAME_WIDTH$} {}  {value}", entry.name, entry.hex)?;
    }

    if accessibility {
        scores(w, &entry.accessibility())?;
    }
    Ok(())
}

fn scores(w: &mut impl Write, acc: &Accessibility) -> io::Result<()> {
    score_line(w, "vs White", acc.vs_white)?;
    score_line(w, "vs Black", acc.vs_black)
}

fn score_line(w: &mut impl Write, label: &str, result: ContrastResult) -> io::Result<()> {
    let shown = result.to_string();
    writeln!(w, "  {label}  {shown:<14} {}", result.rating.description())
}

/// Every format of one color, then its contrast against white and black.
pub fn convert(w: &mut impl Write, rgb: Rgb, style: Style) -> io::Result<()> {
    let hex = rgb.to_canonical_hex();
    let acc = Accessibility::of(&hex);
    if style == Style::Color {
        style.swatch(w, rgb, acc.best_text(), &hex, 12)?;
        writeln!(w)?;
    }
    for &format in ColorFormat::all() {
        writeln!(w, "{:<6} {}", format.label(), format.render(rgb))?;
    }
    writeln!(w)?;
    scores(w, &acc)?;
    let best = if acc.best_text() == Rgb::WHITE { "white" } else { "black" };
    writeln!(w, "  Best text on it: {best}")
}

/// Ratio and tier of `a` against `b`, then which tiers pass.
pub fn contrast(
    w: &mut impl Write,
    a: Rgb,
    b: Rgb,
    result: ContrastResult,
    style: Style,
) -> io::Result<()> {
    if style == Style::Color {
        style.swatch(w, b, a, "Sample text", 16)?;
        writeln!(w)?;
    }
    writeln!(
        w,
        "{} on {}: {result} {}",
        a.to_canonical_hex(),
        b.to_canonical_hex(),
        result.rating.description()
    )?;
    for &tier in n_color::Rating::all().iter().filter(|r| r.min_ratio() > 1.0) {
        let verdict = if result.ratio >= tier.min_ratio() { "pass" } else { "fail" };
        writeln!(w, "  {:<4} (≥ {:.1}:1)  {verdict}", tier.label(), tier.min_ratio())?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
