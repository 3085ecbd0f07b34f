//! Public API for the brick-mosaic crate.
//!
//! This module provides the high-level API: [`MosaicRenderer`] builder and
//! [`MosaicError`] unified error type.

mod builder;
mod error;

pub use builder::MosaicRenderer;
pub use error::MosaicError;
