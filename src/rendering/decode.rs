//! Input image decoding.

use brick_mosaic::Rgb;

use crate::error::ApiError;

/// Decode image bytes (JPEG or PNG) into an RGB pixel buffer.
///
/// Transparency is composited against white, matching how the mosaic is
/// meant to be viewed on a light background.
///
/// Returns `(pixels, width, height)` with pixels in row-major order.
pub fn decode_rgb(bytes: &[u8]) -> Result<(Vec<Rgb>, u32, u32), ApiError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ApiError::UnsupportedImageFormat(e.to_string()))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let pixels = rgba_to_rgb(rgba.as_raw());

    Ok((pixels, width, height))
}

/// Convert RGBA pixel data to Rgb, alpha-compositing against white.
fn rgba_to_rgb(rgba_data: &[u8]) -> Vec<Rgb> {
    rgba_data
        .chunks_exact(4)
        .map(|pixel| {
            let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
            if a == 255 {
                Rgb::new(r, g, b)
            } else if a == 0 {
                Rgb::new(255, 255, 255)
            } else {
                // Alpha composite against white
                let af = a as u16;
                let cr = ((r as u16 * af + 255 * (255 - af)) / 255) as u8;
                let cg = ((g as u16 * af + 255 * (255 - af)) / 255) as u8;
                let cb = ((b as u16 * af + 255 * (255 - af)) / 255) as u8;
                Rgb::new(cr, cg, cb)
            }
        })
        .collect()
}
