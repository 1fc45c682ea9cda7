//! Text extraction endpoint
//!
//! `POST /api/extract-text` accepts a multipart form with a single `file`
//! field and returns the extracted text as JSON. The whole file is
//! buffered in memory for the lifetime of the request; nothing is spilled
//! to disk or kept afterwards.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::error::ExtractError;
use crate::extract;

/// Allow up to 100MB uploads
const MAX_UPLOAD_SIZE: usize = 100 * 1024 * 1024;

/// Successful extraction response
#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/api/extract-text", post(extract_text))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
}

/// POST /api/extract-text
///
/// Dispatches on the caller-declared MIME type: `application/pdf` goes to
/// the PDF parser, `image/*` goes through normalization and OCR, anything
/// else is rejected. A request without a readable `file` field fails
/// validation before any extraction work starts.
async fn extract_text(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ExtractError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::warn!("Request is not a readable multipart form: {}", e);
        ExtractError::MissingFile
    })?;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Failed to read multipart field: {}", e);
        ExtractError::MissingFile
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let mime = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read file data: {}", e);
            ExtractError::MissingFile
        })?;

        tracing::debug!("Received {} bytes declared as '{}'", data.len(), mime);

        let text = extract::extract_text(&mime, data.to_vec()).await?;
        return Ok(Json(ExtractResponse { text }));
    }

    tracing::warn!("No file field found in multipart upload");
    Err(ExtractError::MissingFile)
}
