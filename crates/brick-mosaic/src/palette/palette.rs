//! Palette struct with nearest-color matching.
//!
//! This module provides the `Palette` type: a fixed, ordered set of named
//! reference colors with two interchangeable nearest-color strategies.

use std::collections::HashSet;

use super::error::PaletteError;
use super::lego::LEGO_COLORS;
use crate::color::{delta_e_2000, Lab, Rgb};

/// A named palette entry.
///
/// The name is display metadata; matching operates on `rgb` alone. Both
/// strategies return the entry itself, so callers always receive the exact
/// stored RGB value, never a blended or rounded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickColor {
    /// Human-readable color name (e.g. "Bright Red")
    pub name: &'static str,
    /// The reference RGB value
    pub rgb: Rgb,
}

impl BrickColor {
    /// Create a palette entry.
    #[inline]
    pub const fn new(name: &'static str, rgb: Rgb) -> Self {
        Self { name, rgb }
    }
}

/// Strategy for nearest-color matching.
///
/// A tagged choice dispatched at the call site. Both strategies scan the
/// palette in declaration order and keep the first minimum, so ties resolve
/// identically and reproducibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Squared Euclidean distance in 8-bit RGB space.
    ///
    /// Cheap integer arithmetic. Good enough for previews and large grids,
    /// but RGB distance does not track perception: it over-weights dark
    /// blues and under-weights greens.
    Fast,

    /// CIEDE2000 difference in CIE Lab space.
    ///
    /// Perceptually accurate, and deliberately the slow path: every lookup
    /// evaluates the full CIEDE2000 formula against each palette entry.
    #[default]
    Accurate,
}

/// A fixed, ordered, read-only color palette.
///
/// Entry Lab coordinates are converted once at construction so that the
/// accurate strategy only pays for the CIEDE2000 evaluation per entry, not
/// for repeated color space conversions of the same reference colors.
///
/// # Example
///
/// ```
/// use brick_mosaic::{MatchStrategy, Palette, Rgb};
///
/// let palette = Palette::lego();
/// assert_eq!(palette.len(), 44);
///
/// let snapped = palette.nearest(Rgb::new(250, 10, 5), MatchStrategy::Fast);
/// assert_eq!(snapped.name, "Bright Red");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<BrickColor>,
    // Precomputed Lab coordinates, index-aligned with entries
    labs: Vec<Lab>,
}

impl Palette {
    /// Create a validated palette from the given entries.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - two entries share an RGB value ([`PaletteError::DuplicateColor`])
    ///
    /// Duplicate names are allowed; only RGB values must be unique, since
    /// a duplicate RGB would make the nearest-entry result ambiguous.
    pub fn new(colors: &[BrickColor]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(color.rgb.to_bytes()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self::from_entries(colors.to_vec()))
    }

    /// The built-in 44-color LEGO brick palette.
    ///
    /// Infallible: the table's validity (non-empty, no duplicate RGB
    /// values) is pinned by a unit test against [`Palette::new`].
    pub fn lego() -> Self {
        Self::from_entries(LEGO_COLORS.to_vec())
    }

    fn from_entries(entries: Vec<BrickColor>) -> Self {
        let labs = entries.iter().map(|e| Lab::from(e.rgb)).collect();
        Self { entries, labs }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> &BrickColor {
        &self.entries[idx]
    }

    /// All entries, in declaration order.
    #[inline]
    pub fn entries(&self) -> &[BrickColor] {
        &self.entries
    }

    /// Nearest entry by squared RGB distance.
    ///
    /// Stable first-minimum scan: with several equidistant entries, the one
    /// declared earliest wins.
    pub fn nearest_fast(&self, target: Rgb) -> &BrickColor {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = target.distance_squared(entry.rgb);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        &self.entries[best_idx]
    }

    /// Nearest entry by CIEDE2000 difference in Lab space.
    ///
    /// The target is converted to Lab once; entry Lab values were
    /// precomputed at construction. Each call still evaluates the full
    /// CIEDE2000 formula once per entry, which dominates the cost.
    /// Ties resolve to the earliest declared entry, as in
    /// [`nearest_fast`](Self::nearest_fast).
    pub fn nearest_accurate(&self, target: Rgb) -> &BrickColor {
        let target_lab = Lab::from(target);

        let mut best_idx = 0;
        let mut best_delta = f32::MAX;

        for (i, &entry_lab) in self.labs.iter().enumerate() {
            let delta = delta_e_2000(target_lab, entry_lab);
            if delta < best_delta {
                best_delta = delta;
                best_idx = i;
            }
        }

        &self.entries[best_idx]
    }

    /// Nearest entry under the given strategy.
    #[inline]
    pub fn nearest(&self, target: Rgb, strategy: MatchStrategy) -> &BrickColor {
        match strategy {
            MatchStrategy::Fast => self.nearest_fast(target),
            MatchStrategy::Accurate => self.nearest_accurate(target),
        }
    }
}
