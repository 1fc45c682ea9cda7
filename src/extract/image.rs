//! Image OCR path
//!
//! Normalizes an uploaded image before recognition: grayscale conversion
//! followed by fixed-threshold binarization. The binarized frame is then
//! handed to Tesseract configured for English and a single uniform block
//! of text.

use image::DynamicImage;
use tesseract::{PageSegMode, Tesseract};

use crate::error::ExtractError;

/// Binarization cutoff: intensities below become black, at or above white.
/// Fixed, not adaptive.
const BINARIZE_THRESHOLD: u8 = 128;

/// Recognition language passed to Tesseract.
const OCR_LANGUAGE: &str = "eng";

/// Extract text from an encoded image held in memory.
///
/// Decoding, normalization and OCR are all CPU-bound and run on the
/// blocking thread pool. Any failure in either step surfaces as
/// `ExtractionFailed`.
pub async fn extract_text(data: Vec<u8>) -> Result<String, ExtractError> {
    let text = tokio::task::spawn_blocking(move || -> Result<String, ExtractError> {
        let preprocessed = preprocess(&data)?;
        recognize(&preprocessed)
    })
    .await
    .map_err(|e| ExtractError::ExtractionFailed(format!("Task join error: {}", e)))??;

    Ok(text)
}

/// Grayscale and binarize an encoded image, returning PNG bytes for OCR.
///
/// Binarization flattens background noise and gradients before
/// recognition, at the cost of fidelity on color-dependent or
/// low-contrast sources.
fn preprocess(data: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let img = image::load_from_memory(data)
        .map_err(|e| ExtractError::ExtractionFailed(format!("Failed to decode image: {}", e)))?;

    let mut gray = img.to_luma8();
    for pixel in gray.pixels_mut() {
        pixel.0[0] = if pixel.0[0] < BINARIZE_THRESHOLD { 0 } else { 255 };
    }

    let mut buffer = Vec::new();
    DynamicImage::ImageLuma8(gray)
        .write_to(
            &mut std::io::Cursor::new(&mut buffer),
            image::ImageFormat::Png,
        )
        .map_err(|e| ExtractError::ExtractionFailed(format!("Failed to encode image: {}", e)))?;

    Ok(buffer)
}

/// Run Tesseract over a preprocessed image.
///
/// Page segmentation mode 6 assumes a single uniform block of text.
fn recognize(png: &[u8]) -> Result<String, ExtractError> {
    let mut tess = Tesseract::new(None, Some(OCR_LANGUAGE))
        .map_err(|e| {
            ExtractError::ExtractionFailed(format!("Failed to initialize Tesseract: {}", e))
        })?
        .set_image_from_mem(png)
        .map_err(|e| {
            ExtractError::ExtractionFailed(format!("Failed to load image into Tesseract: {}", e))
        })?;

    tess.set_page_seg_mode(PageSegMode::PsmSingleBlock);

    let text = tess
        .get_text()
        .map_err(|e| ExtractError::ExtractionFailed(format!("OCR failed: {}", e)))?;

    Ok(text.trim().to_string())
}
