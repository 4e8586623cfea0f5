// SPDX-License-Identifier: MIT
//
// Truecolor swatches for terminal output.
//
// Pure functions that write SGR sequences to any `impl Write`. Whether to
// emit them at all is the caller's decision (see `Style`); this module only
// knows the byte-level encoding.

use std::io::{self, IsTerminal, Write};

use n_color::Rgb;

/// Reset all attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set a 24-bit foreground color.
#[inline]
pub fn fg(w: &mut impl Write, rgb: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

/// Set a 24-bit background color.
#[inline]
pub fn bg(w: &mut impl Write, rgb: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

/// Whether output gets color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Color,
}

impl Style {
    /// Color when stdout is a terminal and `NO_COLOR` is unset or empty.
    #[must_use]
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if !no_color && io::stdout().is_terminal() { Self::Color } else { Self::Plain }
    }

    /// A block of `width` cells painted in `rgb`, with `label` drawn on it in
    /// `text` color. Plain style writes nothing.
    pub fn swatch(
        self,
        w: &mut impl Write,
        rgb: Rgb,
        text: Rgb,
        label: &str,
        width: usize,
    ) -> io::Result<()> {
        if self == Self::Plain {
            return Ok(());
        }
        bg(w, rgb)?;
        fg(w, text)?;
        write!(w, " {label:<pad$}", pad = width.saturating_sub(1))?;
        reset(w)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
