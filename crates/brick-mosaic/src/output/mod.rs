//! Output image type produced by the mosaic transform.

mod mosaic_image;

pub use mosaic_image::MosaicImage;
