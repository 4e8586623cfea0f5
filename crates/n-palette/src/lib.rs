//! # n-palette — harmony palettes from a single base color
//!
//! Turns one user-supplied hex color into a small, named palette and renders
//! it for display or export.
//!
//! # Architecture
//!
//! ```text
//! base hex + HarmonyRule
//!     │
//!     ▼
//! harmony.rs: rotate hue / pin lightness in HSL (via n-color)
//!     │
//!     ▼
//! palette.rs: ordered, uniquely named PaletteEntry values
//!     │
//!     ├──► format.rs: one entry as hex / rgb / rgba / hsl / hsla / oklch
//!     │
//!     └──► export.rs: whole palette as CSS variables, SCSS variables, JSON
//! ```
//!
//! Every step is a pure function. Palettes are rebuilt from scratch whenever
//! the base color or rule changes; nothing is mutated in place.
//!
//! Rule and format names are parsed once at the boundary into closed enums
//! ([`HarmonyRule`], [`ColorFormat`], [`ExportFormat`]); past that point every
//! dispatch is an exhaustive `match`.

pub mod error;
pub mod export;
pub mod format;
pub mod harmony;
pub mod palette;

pub use error::ParseError;
pub use export::{ExportFormat, export_palette, slug};
pub use format::{ColorFormat, format_color};
pub use harmony::{HarmonyRule, generate_palette, generate_palette_by_name};
pub use palette::{Palette, PaletteEntry};
