//! Color types and conversion utilities
//!
//! This module provides the two color representations the mosaic pipeline
//! needs, with compile-time distinction between them.
//!
//! # Color Spaces
//!
//! - **Rgb**: 8-bit sRGB. The storage and I/O representation for image
//!   pixels and palette entries.
//! - **Lab**: CIE L\*a\*b\* (D65). Used for perceptual color differences.
//!
//! # Example
//!
//! ```
//! use brick_mosaic::{Lab, Rgb};
//!
//! // A pixel as stored in an image
//! let rgb = Rgb::new(128, 64, 32);
//!
//! // Convert to Lab for perceptual comparisons
//! let lab = Lab::from(rgb);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod deltae;
mod lab;
mod rgb;

pub use deltae::delta_e_2000;
pub use lab::Lab;
pub use rgb::Rgb;
