//! The core mosaic transform.
//!
//! [`pixelate`] downsamples the source image to the brick grid, picks one
//! color per grid cell (raw or palette-snapped), and expands each cell into
//! a solid square block in the output image.

use super::grid::GridSize;
use crate::api::MosaicError;
use crate::color::Rgb;
use crate::output::MosaicImage;
use crate::palette::{MatchStrategy, Palette};
use crate::preprocess::resize_bilinear;

/// How a grid cell's sampled color becomes its brick color.
///
/// Selected per call; the palette reference makes the borrow explicit, and
/// the enum keeps strategy dispatch out of the per-cell hot path's vtable.
#[derive(Debug, Clone, Copy)]
pub enum ColorMode<'a> {
    /// Use the downsampled color unchanged.
    Passthrough,
    /// Snap the downsampled color to the nearest palette entry.
    Palette {
        /// The palette to snap to
        palette: &'a Palette,
        /// Fast RGB distance or accurate CIEDE2000 matching
        strategy: MatchStrategy,
    },
}

/// Render a brick mosaic from raw RGB pixels.
///
/// Steps:
/// 1. Downsample the source to `grid` with bilinear filtering, so each
///    cell's color reflects its whole source area.
/// 2. Map each cell color through `mode`.
/// 3. Fill each cell's `brick_size`-square block in the output with that
///    single color.
///
/// The input is never mutated; the returned image is independently owned.
/// Output dimensions are exactly `(grid.width * brick_size, grid.height *
/// brick_size)`. Deterministic: identical inputs give byte-identical
/// output.
///
/// # Errors
///
/// - [`MosaicError::InvalidBrickSize`] if `brick_size` is zero
/// - [`MosaicError::InvalidGridSize`] if either grid dimension is zero
/// - [`MosaicError::EmptyImage`] if either source dimension is zero
/// - [`MosaicError::PixelCountMismatch`] if `pixels.len() != width * height`
/// - [`MosaicError::OutputTooLarge`] if an output dimension overflows `u32`
///
/// # Example
///
/// ```
/// use brick_mosaic::{pixelate, ColorMode, GridSize, MatchStrategy, Palette, Rgb};
///
/// let palette = Palette::lego();
/// let source = vec![Rgb::new(255, 0, 0); 16];
/// let mosaic = pixelate(
///     &source,
///     4,
///     4,
///     GridSize::new(1, 1),
///     10,
///     ColorMode::Palette { palette: &palette, strategy: MatchStrategy::Fast },
/// )
/// .unwrap();
///
/// assert_eq!(mosaic.width(), 10);
/// assert_eq!(mosaic.height(), 10);
/// assert_eq!(mosaic.pixel(0, 0), Rgb::new(180, 0, 0)); // Bright Red
/// ```
pub fn pixelate(
    pixels: &[Rgb],
    width: u32,
    height: u32,
    grid: GridSize,
    brick_size: u32,
    mode: ColorMode<'_>,
) -> Result<MosaicImage, MosaicError> {
    if brick_size == 0 {
        return Err(MosaicError::InvalidBrickSize { size: brick_size });
    }
    if grid.width == 0 || grid.height == 0 {
        return Err(MosaicError::InvalidGridSize {
            width: grid.width,
            height: grid.height,
        });
    }
    if width == 0 || height == 0 {
        return Err(MosaicError::EmptyImage);
    }
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(MosaicError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let out_width = grid.width as u64 * brick_size as u64;
    let out_height = grid.height as u64 * brick_size as u64;
    if out_width > u32::MAX as u64 || out_height > u32::MAX as u64 {
        return Err(MosaicError::OutputTooLarge {
            width: out_width,
            height: out_height,
        });
    }

    let small = resize_bilinear(pixels, width, height, grid.width, grid.height);

    let bs = brick_size as usize;
    let gw = grid.width as usize;
    let gh = grid.height as usize;
    let ow = gw * bs;
    let oh = gh * bs;

    let mut out = vec![Rgb::new(0, 0, 0); ow * oh];
    for gy in 0..gh {
        for gx in 0..gw {
            let sampled = small[gy * gw + gx];
            let color = match mode {
                ColorMode::Passthrough => sampled,
                ColorMode::Palette { palette, strategy } => {
                    palette.nearest(sampled, strategy).rgb
                }
            };

            for by in 0..bs {
                let row = (gy * bs + by) * ow + gx * bs;
                out[row..row + bs].fill(color);
            }
        }
    }

    Ok(MosaicImage::new(out, out_width as u32, out_height as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::BrickColor;

    fn solid(width: u32, height: u32, color: Rgb) -> Vec<Rgb> {
        vec![color; (width * height) as usize]
    }

    #[test]
    fn test_rejects_zero_brick_size() {
        let source = solid(4, 4, Rgb::new(1, 2, 3));
        let result = pixelate(
            &source,
            4,
            4,
            GridSize::new(2, 2),
            0,
            ColorMode::Passthrough,
        );
        assert!(matches!(
            result,
            Err(MosaicError::InvalidBrickSize { size: 0 })
        ));
    }

    #[test]
    fn test_rejects_zero_grid_dimensions() {
        let source = solid(4, 4, Rgb::new(1, 2, 3));
        for grid in [GridSize::new(0, 2), GridSize::new(2, 0), GridSize::new(0, 0)] {
            let result = pixelate(&source, 4, 4, grid, 5, ColorMode::Passthrough);
            assert!(
                matches!(result, Err(MosaicError::InvalidGridSize { .. })),
                "grid {grid:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_image() {
        let result = pixelate(
            &[],
            0,
            4,
            GridSize::new(1, 1),
            5,
            ColorMode::Passthrough,
        );
        assert!(matches!(result, Err(MosaicError::EmptyImage)));
    }

    #[test]
    fn test_rejects_pixel_count_mismatch() {
        let source = solid(4, 4, Rgb::new(1, 2, 3));
        let result = pixelate(
            &source,
            5,
            4,
            GridSize::new(1, 1),
            5,
            ColorMode::Passthrough,
        );
        assert!(matches!(
            result,
            Err(MosaicError::PixelCountMismatch {
                expected: 20,
                actual: 16
            })
        ));
    }

    #[test]
    fn test_rejects_overflowing_output() {
        let source = solid(2, 2, Rgb::new(1, 2, 3));
        let result = pixelate(
            &source,
            2,
            2,
            GridSize::new(u32::MAX, 1),
            2,
            ColorMode::Passthrough,
        );
        assert!(matches!(result, Err(MosaicError::OutputTooLarge { .. })));
    }

    #[test]
    fn test_output_dimensions() {
        let source = solid(64, 32, Rgb::new(9, 9, 9));
        let mosaic = pixelate(
            &source,
            64,
            32,
            GridSize::new(8, 4),
            5,
            ColorMode::Passthrough,
        )
        .unwrap();
        assert_eq!(mosaic.width(), 40);
        assert_eq!(mosaic.height(), 20);
        assert_eq!(mosaic.pixels().len(), 40 * 20);
    }

    #[test]
    fn test_blocks_are_flat() {
        // A varied source: every block must still be a single solid color
        let source: Vec<Rgb> = (0..32 * 32)
            .map(|i| Rgb::new((i % 256) as u8, (i * 5 % 256) as u8, (i * 11 % 256) as u8))
            .collect();
        let grid = GridSize::new(4, 4);
        let brick = 6;
        let mosaic = pixelate(&source, 32, 32, grid, brick, ColorMode::Passthrough).unwrap();

        for gy in 0..grid.height {
            for gx in 0..grid.width {
                let anchor = mosaic.pixel(gx * brick, gy * brick);
                for by in 0..brick {
                    for bx in 0..brick {
                        assert_eq!(
                            mosaic.pixel(gx * brick + bx, gy * brick + by),
                            anchor,
                            "block ({gx}, {gy}) must be uniform"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_passthrough_preserves_downsampled_colors() {
        let source: Vec<Rgb> = (0..16 * 16)
            .map(|i| Rgb::new((i * 3 % 256) as u8, (i * 7 % 256) as u8, (i % 256) as u8))
            .collect();
        let grid = GridSize::new(4, 4);
        let small = resize_bilinear(&source, 16, 16, grid.width, grid.height);
        let mosaic = pixelate(&source, 16, 16, grid, 3, ColorMode::Passthrough).unwrap();

        for gy in 0..grid.height {
            for gx in 0..grid.width {
                assert_eq!(
                    mosaic.pixel(gx * 3, gy * 3),
                    small[(gy * grid.width + gx) as usize],
                    "passthrough block ({gx}, {gy}) must equal the downsampled color"
                );
            }
        }
    }

    #[test]
    fn test_palette_mode_snaps_every_block() {
        let palette = Palette::new(&[
            BrickColor::new("black", Rgb::new(0, 0, 0)),
            BrickColor::new("white", Rgb::new(255, 255, 255)),
        ])
        .unwrap();
        let source: Vec<Rgb> = (0..8 * 8)
            .map(|i| {
                let v = (i * 4 % 256) as u8;
                Rgb::new(v, v, v)
            })
            .collect();

        let mosaic = pixelate(
            &source,
            8,
            8,
            GridSize::new(4, 4),
            2,
            ColorMode::Palette {
                palette: &palette,
                strategy: MatchStrategy::Fast,
            },
        )
        .unwrap();

        for &p in mosaic.pixels() {
            assert!(
                p == Rgb::new(0, 0, 0) || p == Rgb::new(255, 255, 255),
                "palette mode must only emit palette colors, got {p:?}"
            );
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let source = solid(8, 8, Rgb::new(120, 130, 140));
        let before = source.clone();
        let _ = pixelate(
            &source,
            8,
            8,
            GridSize::new(2, 2),
            4,
            ColorMode::Passthrough,
        )
        .unwrap();
        assert_eq!(source, before);
    }

    #[test]
    fn test_brick_size_one() {
        // brick_size 1 degenerates to the downsampled image itself
        let source: Vec<Rgb> = (0..10 * 10)
            .map(|i| Rgb::new((i * 2 % 256) as u8, 0, 0))
            .collect();
        let grid = GridSize::new(5, 5);
        let small = resize_bilinear(&source, 10, 10, 5, 5);
        let mosaic = pixelate(&source, 10, 10, grid, 1, ColorMode::Passthrough).unwrap();
        assert_eq!(mosaic.pixels(), &small[..]);
    }
}
