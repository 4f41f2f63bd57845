//! Line color assignment.

/// Colors handed out to chart lines, in allocation order.
pub const DEFAULT_PALETTE: [&str; 20] = [
    "red", "blue", "green", "orange", "purple", "pink", "brown", "cyan", "magenta", "lavender",
    "teal", "indigo", "violet", "salmon", "olive", "maroon", "grey", "navy", "black", "yellow",
];

/// Hands out palette colors so that no two live picks share a color while
/// the palette has room. Once every color is in use the used set is reset
/// and allocation restarts at the palette head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    palette: &'static [&'static str],
    /// Palette indices currently in use.
    used: Vec<usize>,
}

impl Default for ColorAssignment {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAssignment {
    pub fn new() -> Self {
        Self::with_palette(&DEFAULT_PALETTE)
    }

    pub fn with_palette(palette: &'static [&'static str]) -> Self {
        Self {
            palette,
            used: Vec::with_capacity(palette.len()),
        }
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Pick the first unused palette color. `None` only for an empty palette.
    pub fn choose_color_without_repetition(&mut self) -> Option<&'static str> {
        if let Some(color) = self.take_unused() {
            return Some(color);
        }
        if !self.palette.is_empty() {
            log::debug!("palette: all {} colors in use, starting over", self.palette.len());
        }
        self.used.clear();
        self.take_unused()
    }

    /// Forget every assignment.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    fn take_unused(&mut self) -> Option<&'static str> {
        let index = (0..self.palette.len()).find(|i| !self.used.contains(i))?;
        self.used.push(index);
        Some(self.palette[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distinct_until_exhausted() {
        let mut colors = ColorAssignment::new();
        let picked: Vec<&str> = (0..DEFAULT_PALETTE.len())
            .map(|_| colors.choose_color_without_repetition().unwrap())
            .collect();
        let distinct: HashSet<&str> = picked.iter().copied().collect();
        assert_eq!(distinct.len(), DEFAULT_PALETTE.len());
        assert_eq!(picked[0], "red");
        assert_eq!(picked[19], "yellow");
    }

    #[test]
    fn test_reuse_starts_from_palette_head() {
        let mut colors = ColorAssignment::new();
        for _ in 0..DEFAULT_PALETTE.len() {
            colors.choose_color_without_repetition();
        }
        assert_eq!(colors.choose_color_without_repetition(), Some("red"));
        assert_eq!(colors.used_count(), 1);
        assert_eq!(colors.choose_color_without_repetition(), Some("blue"));
    }

    #[test]
    fn test_reset() {
        let mut colors = ColorAssignment::new();
        colors.choose_color_without_repetition();
        colors.choose_color_without_repetition();
        colors.reset();
        assert_eq!(colors.used_count(), 0);
        assert_eq!(colors.choose_color_without_repetition(), Some("red"));
    }

    #[test]
    fn test_small_and_empty_palettes() {
        static TWO: [&str; 2] = ["black", "white"];
        let mut colors = ColorAssignment::with_palette(&TWO);
        assert_eq!(colors.choose_color_without_repetition(), Some("black"));
        assert_eq!(colors.choose_color_without_repetition(), Some("white"));
        assert_eq!(colors.choose_color_without_repetition(), Some("black"));

        static NONE: [&str; 0] = [];
        let mut empty = ColorAssignment::with_palette(&NONE);
        assert_eq!(empty.choose_color_without_repetition(), None);
    }
}
