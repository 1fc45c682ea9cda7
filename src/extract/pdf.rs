//! PDF text extraction
//!
//! Delegates to `pdf-extract` for the text layout work. Parsing is
//! CPU-bound, so it runs on the blocking thread pool instead of an async
//! worker.

use crate::error::ExtractError;

/// Extract the text layer of a PDF held in memory.
///
/// Any parser failure (malformed file, encrypted document, unsupported
/// internals) surfaces as `ExtractionFailed` with the library's message.
pub async fn extract_text(data: Vec<u8>) -> Result<String, ExtractError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| ExtractError::ExtractionFailed(format!("Task join error: {}", e)))?
        .map_err(|e| ExtractError::ExtractionFailed(e.to_string()))?;

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn garbage_bytes_fail_extraction() {
        let result = extract_text(b"definitely not a pdf".to_vec()).await;
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }

    #[tokio::test]
    async fn empty_buffer_fails_extraction() {
        let result = extract_text(Vec::new()).await;
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }
}
