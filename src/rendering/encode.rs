//! PNG output encoding.
//!
//! Mosaics are always encoded as 8-bit truecolor RGB: lossless, and with no
//! PNG-level palette reduction even when the mosaic itself is
//! palette-snapped.

use std::io::Cursor;

use brick_mosaic::MosaicImage;

use crate::error::ApiError;

/// Encode a mosaic as RGB8 PNG bytes.
pub fn encode_rgb_png(image: &MosaicImage) -> Result<Vec<u8>, ApiError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ApiError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgb_bytes())
            .map_err(|e| ApiError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
