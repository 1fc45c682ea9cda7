//! Error types for the extraction server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors produced while receiving an upload and extracting its text.
///
/// Validation failures (`MissingFile`, `UnsupportedType`) are detected
/// explicitly and returned as 400s; every failure inside the extraction
/// paths collapses into `ExtractionFailed` and is returned as a 500.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The multipart form carried no `file` field.
    #[error("No file uploaded")]
    MissingFile,

    /// The declared MIME type is neither `application/pdf` nor `image/*`.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// An external routine (PDF parser, image decoder, OCR engine) failed.
    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),
}

/// JSON error body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ExtractError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded", None),
            ExtractError::UnsupportedType(mime) => {
                tracing::warn!("Rejected upload with unsupported type '{}'", mime);
                (StatusCode::BAD_REQUEST, "Unsupported file type", None)
            }
            ExtractError::ExtractionFailed(message) => {
                tracing::error!("Text extraction failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Text extraction failed",
                    Some(message),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
