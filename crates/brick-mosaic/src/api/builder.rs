//! MosaicRenderer builder -- the primary ergonomic entry point for the crate.
//!
//! [`MosaicRenderer`] wraps the mosaic pipeline with fluent configuration
//! and aspect-ratio-derived grid sizing.

use crate::color::Rgb;
use crate::mosaic::{pixelate, ColorMode, GridSize};
use crate::output::MosaicImage;
use crate::palette::{MatchStrategy, Palette};

use super::MosaicError;

/// High-level mosaic builder.
///
/// `MosaicRenderer` is the recommended entry point. It owns a [`Palette`],
/// derives the grid height from each input image's aspect ratio, and
/// renders through [`pixelate`].
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`render()`](Self::render) takes `&self` so the builder is **reusable**
///   across multiple images
///
/// Defaults match the interactive tool this engine grew out of: brick size
/// 20, grid width 48 blocks, palette snapping on, accurate matching.
///
/// # Example
///
/// ```
/// use brick_mosaic::{MatchStrategy, MosaicRenderer, Palette, Rgb};
///
/// let renderer = MosaicRenderer::new(Palette::lego())
///     .brick_size(10)
///     .grid_width(2)
///     .strategy(MatchStrategy::Fast);
///
/// let pixels = vec![Rgb::new(255, 0, 0); 8 * 4];
/// let mosaic = renderer.render(&pixels, 8, 4).unwrap();
///
/// // 2 blocks wide; height derived from the 2:1 aspect ratio
/// assert_eq!(mosaic.width(), 20);
/// assert_eq!(mosaic.height(), 10);
/// ```
pub struct MosaicRenderer {
    palette: Palette,
    brick_size: u32,
    grid_width: u32,
    use_palette: bool,
    strategy: MatchStrategy,
}

impl MosaicRenderer {
    /// Create a new renderer with the given palette.
    ///
    /// Defaults: brick size 20, grid width 48, palette snapping enabled,
    /// [`MatchStrategy::Accurate`].
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            brick_size: 20,
            grid_width: 48,
            use_palette: true,
            strategy: MatchStrategy::Accurate,
        }
    }

    /// Set the rendered edge length of each brick, in pixels.
    #[inline]
    pub fn brick_size(mut self, pixels: u32) -> Self {
        self.brick_size = pixels;
        self
    }

    /// Set the mosaic width in blocks. Height follows the source aspect
    /// ratio at render time.
    #[inline]
    pub fn grid_width(mut self, blocks: u32) -> Self {
        self.grid_width = blocks;
        self
    }

    /// Enable or disable palette snapping.
    ///
    /// When disabled, blocks keep their downsampled source colors.
    #[inline]
    pub fn use_palette(mut self, enabled: bool) -> Self {
        self.use_palette = enabled;
        self
    }

    /// Set the palette matching strategy.
    ///
    /// Ignored while palette snapping is disabled.
    #[inline]
    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Render a mosaic from raw RGB pixels.
    ///
    /// The grid is `grid_width` blocks wide; its height is derived from
    /// `width`/`height` via [`GridSize::for_aspect`]. The builder is
    /// reusable -- `render()` takes `&self`.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`pixelate`]; a zero-dimension
    /// source is rejected before the aspect ratio is computed.
    pub fn render(
        &self,
        pixels: &[Rgb],
        width: u32,
        height: u32,
    ) -> Result<MosaicImage, MosaicError> {
        if width == 0 || height == 0 {
            return Err(MosaicError::EmptyImage);
        }

        let grid = GridSize::for_aspect(self.grid_width, width, height);
        let mode = if self.use_palette {
            ColorMode::Palette {
                palette: &self.palette,
                strategy: self.strategy,
            }
        } else {
            ColorMode::Passthrough
        };

        pixelate(pixels, width, height, grid, self.brick_size, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Vec<Rgb> {
        (0..width * height)
            .map(|i| {
                let v = (i * 255 / (width * height - 1).max(1)) as u8;
                Rgb::new(v, v, v)
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let renderer = MosaicRenderer::new(Palette::lego());
        assert_eq!(renderer.brick_size, 20);
        assert_eq!(renderer.grid_width, 48);
        assert!(renderer.use_palette);
        assert_eq!(renderer.strategy, MatchStrategy::Accurate);
    }

    #[test]
    fn test_builder_chaining() {
        let renderer = MosaicRenderer::new(Palette::lego())
            .brick_size(5)
            .grid_width(12)
            .use_palette(false)
            .strategy(MatchStrategy::Fast);

        assert_eq!(renderer.brick_size, 5);
        assert_eq!(renderer.grid_width, 12);
        assert!(!renderer.use_palette);
        assert_eq!(renderer.strategy, MatchStrategy::Fast);
    }

    #[test]
    fn test_render_derives_grid_height() {
        let renderer = MosaicRenderer::new(Palette::lego())
            .brick_size(3)
            .grid_width(8);
        let pixels = gradient(64, 32);

        let mosaic = renderer.render(&pixels, 64, 32).unwrap();
        // 8 blocks wide, 2:1 aspect -> 4 blocks high
        assert_eq!(mosaic.width(), 24);
        assert_eq!(mosaic.height(), 12);
    }

    #[test]
    fn test_render_reusable() {
        let renderer = MosaicRenderer::new(Palette::lego())
            .brick_size(2)
            .grid_width(4)
            .strategy(MatchStrategy::Fast);
        let pixels = gradient(16, 16);

        let first = renderer.render(&pixels, 16, 16).unwrap();
        let second = renderer.render(&pixels, 16, 16).unwrap();
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_render_rejects_empty_source() {
        let renderer = MosaicRenderer::new(Palette::lego());
        let result = renderer.render(&[], 0, 0);
        assert!(matches!(result, Err(MosaicError::EmptyImage)));
    }

    #[test]
    fn test_render_rejects_zero_parameters() {
        let pixels = gradient(8, 8);

        let zero_brick = MosaicRenderer::new(Palette::lego()).brick_size(0);
        assert!(matches!(
            zero_brick.render(&pixels, 8, 8),
            Err(MosaicError::InvalidBrickSize { .. })
        ));

        let zero_grid = MosaicRenderer::new(Palette::lego()).grid_width(0);
        assert!(matches!(
            zero_grid.render(&pixels, 8, 8),
            Err(MosaicError::InvalidGridSize { .. })
        ));
    }

    #[test]
    fn test_passthrough_vs_palette_differ_on_off_palette_input() {
        // A color far from every palette entry: snapping must change it,
        // passthrough must keep it.
        let pixels = vec![Rgb::new(1, 255, 1); 4 * 4];

        let snapped = MosaicRenderer::new(Palette::lego())
            .brick_size(1)
            .grid_width(2)
            .render(&pixels, 4, 4)
            .unwrap();
        let raw = MosaicRenderer::new(Palette::lego())
            .brick_size(1)
            .grid_width(2)
            .use_palette(false)
            .render(&pixels, 4, 4)
            .unwrap();

        assert_eq!(raw.pixel(0, 0), Rgb::new(1, 255, 1));
        assert_ne!(snapped.pixel(0, 0), raw.pixel(0, 0));
    }
}
