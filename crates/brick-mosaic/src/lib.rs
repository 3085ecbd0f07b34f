//! brick-mosaic: photo-to-brick-mosaic rendering with perceptual palette
//! matching
//!
//! This library turns a photograph into a mosaic of uniformly colored
//! square bricks, optionally snapping each brick to the nearest color of a
//! fixed palette (the built-in table models the 44 LEGO brick colors).
//!
//! # Quick Start
//!
//! The [`MosaicRenderer`] builder is the primary entry point:
//!
//! ```
//! use brick_mosaic::{MosaicRenderer, Palette, Rgb};
//!
//! let renderer = MosaicRenderer::new(Palette::lego())
//!     .brick_size(10)
//!     .grid_width(4);
//!
//! let pixels = vec![Rgb::new(200, 30, 30); 64 * 48];
//! let mosaic = renderer.render(&pixels, 64, 48).unwrap();
//!
//! assert_eq!(mosaic.width(), 40);  // 4 blocks x 10 px
//! assert_eq!(mosaic.height(), 30); // height follows the 4:3 aspect ratio
//! ```
//!
//! The lower-level [`pixelate`] function takes an explicit [`GridSize`] and
//! [`ColorMode`] when the builder's aspect-derived sizing is not wanted.
//!
//! # Pipeline
//!
//! ```text
//! source pixels (Rgb)
//!     |
//!     v
//! bilinear downsample to the block grid     (one color per brick cell,
//!     |                                      averaging the cell's area)
//!     v
//! per-cell color mapping                    (Passthrough, or nearest
//!     |                                      palette entry)
//!     v
//! block expansion                           (each cell becomes a solid
//!     |                                      brick_size^2 square)
//!     v
//! MosaicImage
//! ```
//!
//! # Color Science
//!
//! Two nearest-color strategies are offered via [`MatchStrategy`]:
//!
//! | Strategy | Metric | Cost |
//! |----------|--------|------|
//! | `Fast` | squared Euclidean distance in 8-bit RGB | integer ops per entry |
//! | `Accurate` | CIEDE2000 in CIE Lab (D65) | full formula per entry |
//!
//! RGB distance is cheap but does not track perception: equal numeric
//! steps in RGB are not equally visible, so the fast strategy can pick an
//! entry that looks clearly wrong for saturated or dark inputs. The
//! accurate strategy converts to CIE Lab and evaluates the CIEDE2000
//! difference, which weights lightness, chroma and hue the way human
//! vision does. Callers trade speed for fidelity per invocation.
//!
//! Both strategies scan the palette in declaration order, keep the first
//! minimum, and return the matched entry's exact stored RGB value -- the
//! output of a palette-snapped render contains only palette colors.

pub mod api;
pub mod color;
pub mod mosaic;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{MosaicError, MosaicRenderer};
pub use color::{delta_e_2000, Lab, Rgb};
pub use mosaic::{pixelate, ColorMode, GridSize};
pub use output::MosaicImage;
pub use palette::{BrickColor, MatchStrategy, Palette, PaletteError, ParseColorError, LEGO_COLORS};
