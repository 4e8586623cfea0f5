//! Palette values — what the harmony generator produces and the formatters
//! consume.

use n_color::{Accessibility, Rgb, hex_to_rgb};

/// One named color in a palette.
///
/// `hex` is canonical uppercase `#RRGGBB` for every entry derived from a valid
/// base color. The single-entry fallback palette carries the raw, invalid
/// input unchanged so the caller can still show what was typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub hex: String,
    pub name: String,
}

impl PaletteEntry {
    #[must_use]
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self { hex: hex.into(), name: name.into() }
    }

    /// The parsed color, or `None` for the invalid-input fallback entry.
    #[must_use]
    pub fn rgb(&self) -> Option<Rgb> {
        hex_to_rgb(&self.hex)
    }

    /// Contrast of this color against white and black text.
    #[must_use]
    pub fn accessibility(&self) -> Accessibility {
        Accessibility::of(&self.hex)
    }
}

/// An ordered sequence of uniquely named entries.
///
/// Length and order are fixed by the harmony rule that built it. Palettes are
/// replaced wholesale on every change rather than edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build a palette from entries.
    ///
    /// # Panics
    ///
    /// Debug builds assert that entry names are unique.
    #[must_use]
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, e)| entries[..i].iter().all(|prev| prev.name != e.name)),
            "palette entry names must be unique"
        );
        Self { entries }
    }

    /// The single-entry palette used when the base color is not valid hex.
    #[must_use]
    pub fn base_only(hex: &str) -> Self {
        Self { entries: vec![PaletteEntry::new(hex, "Base")] }
    }

    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Look up an entry by its display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entry names in palette order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Palette {
    type Item = PaletteEntry;
    type IntoIter = std::vec::IntoIter<PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_color::Rating;

    fn sample() -> Palette {
        Palette::new(vec![
            PaletteEntry::new("#FF0000", "Base"),
            PaletteEntry::new("#00FFFF", "Complementary"),
        ])
    }

    #[test]
    fn base_only_keeps_raw_input() {
        let p = Palette::base_only("zzz");
        assert_eq!(p.entries(), &[PaletteEntry::new("zzz", "Base")]);
        assert!(p.entries()[0].rgb().is_none());
    }

    #[test]
    fn lookup_by_name() {
        let p = sample();
        assert_eq!(p.get("Complementary").map(|e| e.hex.as_str()), Some("#00FFFF"));
        assert!(p.get("Triadic 1").is_none());
    }

    #[test]
    fn names_in_order() {
        assert_eq!(sample().names(), vec!["Base", "Complementary"]);
    }

    #[test]
    fn iterates_in_order() {
        let hexes: Vec<_> = sample().iter().map(|e| e.hex.clone()).collect();
        assert_eq!(hexes, vec!["#FF0000", "#00FFFF"]);
    }

    #[test]
    fn entry_accessibility() {
        let entry = PaletteEntry::new("#000000", "Base");
        let acc = entry.accessibility();
        assert_eq!(acc.vs_white.rating, Rating::Aaa);
        assert_eq!(acc.vs_black.rating, Rating::Fail);
    }

    #[test]
    fn empty_palette() {
        let p = Palette::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    #[should_panic(expected = "unique")]
    #[cfg(debug_assertions)]
    fn duplicate_names_rejected_in_debug() {
        let _ = Palette::new(vec![
            PaletteEntry::new("#000000", "Base"),
            PaletteEntry::new("#FFFFFF", "Base"),
        ]);
    }
}
