//! Image fixtures for integration tests.

use image::{ImageBuffer, Rgb};
use std::io::Cursor;

/// Encode a solid-color PNG of the given dimensions.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode(width, height, |_, _| rgb, image::ImageFormat::Png)
}

/// Encode a solid-color JPEG of the given dimensions.
pub fn solid_jpeg(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode(width, height, |_, _| rgb, image::ImageFormat::Jpeg)
}

/// Encode a PNG with a per-pixel color function.
pub fn png_with<F: Fn(u32, u32) -> [u8; 3]>(width: u32, height: u32, f: F) -> Vec<u8> {
    encode(width, height, f, image::ImageFormat::Png)
}

fn encode<F: Fn(u32, u32) -> [u8; 3]>(
    width: u32,
    height: u32,
    f: F,
    format: image::ImageFormat,
) -> Vec<u8> {
    let img = ImageBuffer::from_fn(width, height, |x, y| Rgb(f(x, y)));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).expect("encode fixture");
    buf.into_inner()
}

/// Decode PNG response bytes into pixels and dimensions for assertions.
pub fn decode_png(bytes: &[u8]) -> (Vec<[u8; 3]>, u32, u32) {
    let decoded = image::load_from_memory(bytes)
        .expect("response must decode")
        .to_rgb8();
    let (width, height) = (decoded.width(), decoded.height());
    let pixels = decoded.pixels().map(|p| p.0).collect();
    (pixels, width, height)
}
