use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brick_mosaic::MosaicError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unsupported or corrupt image: {0}")]
    UnsupportedImageFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Output too large: {width}x{height} (max {max} pixels per side)")]
    OutputTooLarge { width: u64, height: u64, max: u32 },

    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnsupportedImageFormat(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string())
            }
            ApiError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::OutputTooLarge { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            // Core-level validation failures are caller errors, not server faults
            ApiError::Mosaic(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::PngEncode(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
