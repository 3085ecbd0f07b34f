//! Rendering glue: image decoding, PNG encoding, and one-shot file renders.

mod decode;
mod encode;

pub use decode::decode_rgb;
pub use encode::encode_rgb_png;

use std::path::Path;

use brick_mosaic::{MatchStrategy, MosaicRenderer, Palette};

/// Options for one-shot file rendering (the `render` CLI subcommand).
#[derive(Debug, Clone)]
pub struct RenderFileOptions {
    /// Rendered edge length of each brick, in pixels
    pub brick_size: u32,
    /// Mosaic width in blocks; height follows the source aspect ratio
    pub grid_width: u32,
    /// Snap block colors to the brick palette
    pub use_palette: bool,
    /// Use CIEDE2000 matching instead of fast RGB distance
    pub high_accuracy: bool,
}

/// Render an image file to a mosaic PNG on disk.
///
/// Returns the number of PNG bytes written.
pub fn render_file(
    input: &Path,
    output: &Path,
    opts: &RenderFileOptions,
) -> anyhow::Result<usize> {
    let bytes = std::fs::read(input)?;
    let (pixels, width, height) = decode_rgb(&bytes)?;

    let strategy = if opts.high_accuracy {
        MatchStrategy::Accurate
    } else {
        MatchStrategy::Fast
    };
    let renderer = MosaicRenderer::new(Palette::lego())
        .brick_size(opts.brick_size)
        .grid_width(opts.grid_width)
        .use_palette(opts.use_palette)
        .strategy(strategy);

    let mosaic = renderer.render(&pixels, width, height)?;
    let png_bytes = encode_rgb_png(&mosaic)?;
    std::fs::write(output, &png_bytes)?;
    Ok(png_bytes.len())
}
