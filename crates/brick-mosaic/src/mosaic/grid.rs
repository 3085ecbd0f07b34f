//! Mosaic grid dimensions.

/// The mosaic grid: how many bricks wide and high the output is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Bricks per row
    pub width: u32,
    /// Bricks per column
    pub height: u32,
}

impl GridSize {
    /// Create a grid size from explicit dimensions.
    ///
    /// Zero dimensions are representable but rejected by
    /// [`pixelate`](super::pixelate) at render time.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Derive a grid from a block width, preserving the source image's
    /// aspect ratio: `height = round(blocks_wide * source_height /
    /// source_width)`.
    ///
    /// The derived height is clamped to at least one block, so extreme
    /// aspect ratios (a 1000x1 panorama at a small block width) still
    /// produce a renderable grid.
    ///
    /// # Example
    ///
    /// ```
    /// use brick_mosaic::GridSize;
    ///
    /// let grid = GridSize::for_aspect(48, 640, 480);
    /// assert_eq!(grid, GridSize::new(48, 36));
    /// ```
    pub fn for_aspect(blocks_wide: u32, source_width: u32, source_height: u32) -> Self {
        debug_assert!(
            source_width > 0 && source_height > 0,
            "source dimensions must be nonzero"
        );
        let height = (blocks_wide as f64 * source_height as f64 / source_width as f64).round()
            as u32;
        Self {
            width: blocks_wide,
            height: height.max(1),
        }
    }
}
