//! The mosaic transform: downsample to a block grid, then expand each grid
//! cell into a solid square brick.

mod grid;
mod renderer;

pub use grid::GridSize;
pub use renderer::{pixelate, ColorMode};
