// SPDX-License-Identifier: MIT
//
// Command-line surface.
//
// Rule and format names are parsed here, through each enum's `FromStr`, so an
// unknown name is rejected before any command runs. Options left unset on the
// command line are `None` and get filled from the config file or the
// built-in defaults (see `Config::palette_settings`).

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use n_palette::{ColorFormat, ExportFormat, HarmonyRule};

#[derive(Debug, Parser)]
#[command(name = "n-devtools")]
#[command(version, about = "Harmony color palettes with WCAG scoring, and a JSON formatter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (TOML)
    #[arg(long, global = true, env = "N_DEVTOOLS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a harmony palette and show each color with its contrast scores
    Palette {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Hide the vs-white / vs-black contrast scores
        #[arg(long)]
        no_accessibility: bool,
    },

    /// Export a harmony palette as CSS variables, SCSS variables or JSON
    Export {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Export syntax: css, scss or json
        #[arg(long, value_name = "FORMAT")]
        to: Option<ExportFormat>,
    },

    /// Show one color in every format, with its contrast scores
    Convert {
        /// Hex color, e.g. '#3498db' or f0a
        color: String,
    },

    /// WCAG contrast ratio between two colors
    Contrast {
        /// First hex color
        a: String,
        /// Second hex color
        b: String,
    },

    /// Pretty-print or minify JSON
    Json {
        /// Input file; stdin when absent
        file: Option<PathBuf>,

        /// Print compact JSON instead of indented
        #[arg(long)]
        minify: bool,
    },
}

/// Options shared by `palette` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct PaletteArgs {
    /// Base hex color
    pub base: Option<String>,

    /// complementary, triadic, analogous, tetradic or monochromatic
    #[arg(long, short = 'H', value_name = "RULE")]
    pub harmony: Option<HarmonyRule>,

    /// hex, rgb, rgba, hsl, hsla or oklch
    #[arg(long, short, value_name = "FMT")]
    pub format: Option<ColorFormat>,
}

// ─── Tests ──────────────────────────────────────────────────────────────────
