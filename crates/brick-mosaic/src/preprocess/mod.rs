//! Preprocessing: downsampling the source image to the mosaic grid.

mod resize;

pub use resize::resize_bilinear;
