// SPDX-License-Identifier: MIT
//
// n-devtools — developer utilities on the command line.
//
// This is the binary that wires the crates together:
//
//   n-color   → hex / RGB / HSL / OKLCH conversion, WCAG contrast
//   n-palette → harmony palettes, per-color formats, CSS/SCSS/JSON export
//   n-json    → JSON pretty-print, minify, validate
//
// Flow for every command:
//
//   argv ──clap──► Cli ──► logging::init ──► Config::load (palette/export)
//        ──► command ──► render / export text ──► stdout
//
// Errors from any stage end up here and print as `n-devtools: <message>`
// with exit status 1.

mod ansi;
mod cli;
mod config;
mod logging;
mod render;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use n_color::{Rgb, hex_to_rgb};
use n_palette::export_palette;
use tracing::{info, warn};

use crate::ansi::Style;
use crate::cli::{Cli, Command};
use crate::config::Config;

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Palette { palette, no_accessibility } => {
            let config = Config::load(cli.config.as_deref())?;
            let settings = config.palette_settings(&palette);
            let generated = settings.harmony.generate(&settings.base);
            info!(base = %settings.base, rule = %settings.harmony, entries = generated.len(), "palette");
            render::palette(
                &mut out,
                &generated,
                settings.harmony,
                settings.format,
                config.accessibility && !no_accessibility,
                Style::detect(),
            )?;
        }
        Command::Export { palette, to } => {
            let config = Config::load(cli.config.as_deref())?;
            let settings = config.palette_settings(&palette);
            let export = to.unwrap_or(config.export);
            let generated = settings.harmony.generate(&settings.base);
            info!(%export, label = export.label(), format = %settings.format, "export");
            writeln!(out, "{}", export_palette(&generated, export, settings.format))?;
        }
        Command::Convert { color } => {
            let rgb = parse_color(&color)?;
            render::convert(&mut out, rgb, Style::detect())?;
        }
        Command::Contrast { a, b } => {
            let (fg, bg) = (parse_color(&a)?, parse_color(&b)?);
            let result = n_color::contrast(&a, &b);
            render::contrast(&mut out, fg, bg, result, Style::detect())?;
        }
        Command::Json { file, minify } => {
            let input = read_input(file.as_deref())?;
            let output = if minify { n_json::minify_json(&input)? } else { n_json::format_json(&input)? };
            match output {
                Some(text) => writeln!(out, "{text}")?,
                None => warn!("input is empty, nothing to format"),
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn parse_color(s: &str) -> Result<Rgb> {
    match hex_to_rgb(s) {
        Some(rgb) => Ok(rgb),
        None => bail!("invalid hex color `{s}` (expected 3 or 6 hex digits, optional leading #)"),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path).map_err(|e| anyhow!("cannot read {}: {e}", path.display()));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(|e| anyhow!("cannot read stdin: {e}"))?;
    Ok(buf)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        // A closed pipe (`n-devtools export | head`) is not worth reporting.
        if e.downcast_ref::<io::Error>().is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe) {
            process::exit(0);
        }
        eprintln!("n-devtools: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
