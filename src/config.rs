// SPDX-License-Identifier: MIT
//
// Optional TOML config and its merge with command-line flags.
//
//   base = "#663399"
//   harmony = "complementary"
//   format = "oklch"
//   export = "css"
//   accessibility = true
//
// Every key is optional; a missing file path means built-in defaults.
// Precedence is flag > config file > default.

use std::fs;
use std::path::{Path, PathBuf};

use n_palette::{ColorFormat, ExportFormat, HarmonyRule};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::cli::PaletteArgs;

/// Base color used when neither the command line nor the config names one.
pub const DEFAULT_BASE: &str = "#663399";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub base: String,
    pub harmony: HarmonyRule,
    pub format: ColorFormat,
    pub export: ExportFormat,
    pub accessibility: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            harmony: HarmonyRule::default(),
            format: ColorFormat::default(),
            export: ExportFormat::default(),
            accessibility: true,
        }
    }
}

impl Config {
    /// Read `path`, or return the defaults when there is no path.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if it is not valid config TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::parse(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// # Errors
    ///
    /// Malformed TOML, unknown keys, or unknown rule/format names.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Overlay the command-line palette options.
    #[must_use]
    pub fn palette_settings(&self, args: &PaletteArgs) -> PaletteSettings {
        PaletteSettings {
            base: args.base.clone().unwrap_or_else(|| self.base.clone()),
            harmony: args.harmony.unwrap_or(self.harmony),
            format: args.format.unwrap_or(self.format),
        }
    }
}

/// Fully resolved inputs for one palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSettings {
    pub base: String,
    pub harmony: HarmonyRule,
    pub format: ColorFormat,
}

// ─── Tests ──────────────────────────────────────────────────────────────────
