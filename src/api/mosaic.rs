use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use brick_mosaic::{ColorMode, GridSize, MatchStrategy};

use crate::error::ApiError;
use crate::rendering::{decode_rgb, encode_rgb_png};
use crate::server::AppState;

// Parameter bounds. Uploads are untrusted; these caps keep worst-case CPU
// and memory bounded.
const MAX_BRICK_SIZE: u32 = 100;
const MAX_GRID_WIDTH: u32 = 256;
const MAX_OUTPUT_SIDE: u32 = 4096;

fn default_brick_size() -> u32 {
    20
}

fn default_grid_width() -> u32 {
    48
}

fn default_true() -> bool {
    true
}

/// Query parameters for the mosaic endpoint.
///
/// Defaults mirror the interactive defaults: 20 px bricks, 48 blocks wide,
/// palette snapping with accurate matching.
#[derive(Debug, Deserialize)]
pub struct MosaicQuery {
    /// Rendered edge length of each brick, in pixels
    #[serde(default = "default_brick_size")]
    pub brick_size: u32,
    /// Mosaic width in blocks; height follows the source aspect ratio
    #[serde(default = "default_grid_width")]
    pub grid_width: u32,
    /// Snap block colors to the brick palette
    #[serde(default = "default_true")]
    pub palette: bool,
    /// Use CIEDE2000 matching instead of fast RGB distance (slower)
    #[serde(default = "default_true")]
    pub high_accuracy: bool,
}

/// Render an uploaded image as a brick mosaic PNG.
///
/// The request body is the raw image bytes (JPEG or PNG). The response is
/// an `image/png` body whose dimensions are `grid_width * brick_size` wide
/// and, via the source aspect ratio, `grid_height * brick_size` high.
pub async fn handle_mosaic(
    State(state): State<AppState>,
    Query(params): Query<MosaicQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Cheap parameter checks before touching the body
    if params.brick_size == 0 || params.brick_size > MAX_BRICK_SIZE {
        return Err(ApiError::InvalidParameter(format!(
            "brick_size must be 1..={MAX_BRICK_SIZE}, got {}",
            params.brick_size
        )));
    }
    if params.grid_width == 0 || params.grid_width > MAX_GRID_WIDTH {
        return Err(ApiError::InvalidParameter(format!(
            "grid_width must be 1..={MAX_GRID_WIDTH}, got {}",
            params.grid_width
        )));
    }

    let (pixels, width, height) = decode_rgb(&body)?;

    let grid = GridSize::for_aspect(params.grid_width, width, height);

    // The derived grid height can be large for tall sources, so the output
    // bound is checked on both axes
    let out_width = grid.width as u64 * params.brick_size as u64;
    let out_height = grid.height as u64 * params.brick_size as u64;
    if out_width > MAX_OUTPUT_SIDE as u64 || out_height > MAX_OUTPUT_SIDE as u64 {
        return Err(ApiError::OutputTooLarge {
            width: out_width,
            height: out_height,
            max: MAX_OUTPUT_SIDE,
        });
    }

    let strategy = if params.high_accuracy {
        MatchStrategy::Accurate
    } else {
        MatchStrategy::Fast
    };
    let mode = if params.palette {
        ColorMode::Palette {
            palette: &state.palette,
            strategy,
        }
    } else {
        ColorMode::Passthrough
    };

    let mosaic = brick_mosaic::pixelate(&pixels, width, height, grid, params.brick_size, mode)?;

    tracing::debug!(
        source_width = width,
        source_height = height,
        grid_width = grid.width,
        grid_height = grid.height,
        brick_size = params.brick_size,
        palette = params.palette,
        high_accuracy = params.high_accuracy,
        "Rendered mosaic"
    );

    let png_bytes = encode_rgb_png(&mosaic)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response())
}
