//! Text extraction pipeline
//!
//! An uploaded buffer is classified once by its caller-declared MIME type
//! and routed to the matching extraction path. PDFs go through the text
//! layer parser, images go through normalization and OCR. Nothing here
//! keeps state across requests.

mod image;
mod pdf;

use crate::error::ExtractError;

/// Upload category, decided once at the dispatch boundary.
///
/// Downstream code matches on the variant and never re-inspects the MIME
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Image,
    Unsupported,
}

impl UploadKind {
    /// Classify a caller-declared MIME type.
    ///
    /// This is a string match, not content sniffing: a mislabeled file is
    /// trusted and may produce garbage output or a downstream failure.
    pub fn from_mime(mime: &str) -> Self {
        if mime == "application/pdf" {
            UploadKind::Pdf
        } else if mime.starts_with("image/") {
            UploadKind::Image
        } else {
            UploadKind::Unsupported
        }
    }
}

/// Extract text from an uploaded buffer, dispatching on its declared type.
///
/// The returned text is trimmed at both ends.
pub async fn extract_text(mime: &str, data: Vec<u8>) -> Result<String, ExtractError> {
    match UploadKind::from_mime(mime) {
        UploadKind::Pdf => pdf::extract_text(data).await,
        UploadKind::Image => image::extract_text(data).await,
        UploadKind::Unsupported => Err(ExtractError::UnsupportedType(mime.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_requires_exact_mime_match() {
        assert_eq!(UploadKind::from_mime("application/pdf"), UploadKind::Pdf);
        assert_eq!(
            UploadKind::from_mime("application/pdf+xml"),
            UploadKind::Unsupported
        );
        assert_eq!(UploadKind::from_mime("APPLICATION/PDF"), UploadKind::Unsupported);
    }

    #[test]
    fn any_image_subtype_is_accepted() {
        assert_eq!(UploadKind::from_mime("image/png"), UploadKind::Image);
        assert_eq!(UploadKind::from_mime("image/jpeg"), UploadKind::Image);
        assert_eq!(UploadKind::from_mime("image/x-custom"), UploadKind::Image);
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(UploadKind::from_mime("text/plain"), UploadKind::Unsupported);
        assert_eq!(
            UploadKind::from_mime("application/octet-stream"),
            UploadKind::Unsupported
        );
        assert_eq!(UploadKind::from_mime(""), UploadKind::Unsupported);
    }

    #[tokio::test]
    async fn unsupported_mime_short_circuits_before_extraction() {
        let result = extract_text("application/zip", vec![0x50, 0x4b]).await;
        assert!(matches!(result, Err(ExtractError::UnsupportedType(_))));
    }
}
