//! Unified error type for the brick-mosaic public API.
//!
//! [`MosaicError`] covers parameter validation for the render path and
//! wraps the palette error types into a single enum for convenient `?`
//! propagation in application code.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the brick-mosaic public API.
///
/// Invalid render parameters are rejected with a typed error rather than
/// silently producing a degenerate image.
///
/// # Example
///
/// ```
/// use brick_mosaic::{pixelate, ColorMode, GridSize, MosaicError, Rgb};
///
/// let source = vec![Rgb::new(0, 0, 0); 4];
/// let result = pixelate(&source, 2, 2, GridSize::new(1, 1), 0, ColorMode::Passthrough);
/// assert!(matches!(result, Err(MosaicError::InvalidBrickSize { size: 0 })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicError {
    /// Brick size must be at least one pixel
    InvalidBrickSize {
        /// The rejected size
        size: u32,
    },
    /// Grid dimensions must both be at least one block
    InvalidGridSize {
        /// Requested blocks per row
        width: u32,
        /// Requested blocks per column
        height: u32,
    },
    /// The source image has a zero dimension
    EmptyImage,
    /// The source pixel buffer does not match the stated dimensions
    PixelCountMismatch {
        /// `width * height`
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
    /// Requested output dimensions overflow the supported image size
    OutputTooLarge {
        /// Requested output width in pixels
        width: u64,
        /// Requested output height in pixels
        height: u64,
    },
    /// Palette validation error (empty or duplicate entries)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::InvalidBrickSize { size } => {
                write!(f, "invalid brick size {} (must be at least 1)", size)
            }
            MosaicError::InvalidGridSize { width, height } => {
                write!(
                    f,
                    "invalid grid size {}x{} (both dimensions must be at least 1)",
                    width, height
                )
            }
            MosaicError::EmptyImage => {
                write!(f, "source image has a zero dimension")
            }
            MosaicError::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length {} does not match dimensions (expected {})",
                    actual, expected
                )
            }
            MosaicError::OutputTooLarge { width, height } => {
                write!(f, "output dimensions {}x{} exceed supported size", width, height)
            }
            MosaicError::Palette(err) => write!(f, "palette error: {}", err),
            MosaicError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MosaicError::Palette(err) => Some(err),
            MosaicError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for MosaicError {
    fn from(err: PaletteError) -> Self {
        MosaicError::Palette(err)
    }
}

impl From<ParseColorError> for MosaicError {
    fn from(err: ParseColorError) -> Self {
        MosaicError::ParseColor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MosaicError::InvalidBrickSize { size: 0 }.to_string(),
            "invalid brick size 0 (must be at least 1)"
        );
        assert_eq!(
            MosaicError::InvalidGridSize {
                width: 0,
                height: 3
            }
            .to_string(),
            "invalid grid size 0x3 (both dimensions must be at least 1)"
        );
        assert_eq!(
            MosaicError::EmptyImage.to_string(),
            "source image has a zero dimension"
        );
        assert_eq!(
            MosaicError::PixelCountMismatch {
                expected: 100,
                actual: 99
            }
            .to_string(),
            "pixel buffer length 99 does not match dimensions (expected 100)"
        );
    }

    #[test]
    fn test_from_palette_error() {
        let err: MosaicError = PaletteError::EmptyPalette.into();
        assert!(matches!(err, MosaicError::Palette(PaletteError::EmptyPalette)));
        assert_eq!(err.to_string(), "palette error: palette cannot be empty");
    }

    #[test]
    fn test_source_chains() {
        use std::error::Error;
        let err: MosaicError = PaletteError::EmptyPalette.into();
        assert!(err.source().is_some());
        assert!(MosaicError::EmptyImage.source().is_none());
    }
}
