//! Text extraction through the Tesseract CLI.

use crate::{error::AppError, Result};
use image::{DynamicImage, RgbaImage};
use rusty_tesseract::{Args, Image};

/// OCR adapter over the system Tesseract installation
pub struct OcrEngine {
    args: Args,
}

impl OcrEngine {
    /// Create an OCR engine for the given language.
    ///
    /// Fails fast when the tesseract binary is not installed, so narration
    /// can degrade at startup instead of on every request.
    pub fn new(language: &str) -> Result<Self> {
        let version = rusty_tesseract::get_tesseract_version()
            .map_err(|e| AppError::Ocr(format!("Tesseract not available: {e}")))?;
        log::info!("Found Tesseract: {}", version.trim());

        let args = Args {
            lang: language.to_string(),
            ..Args::default()
        };
        Ok(Self { args })
    }

    /// Extract text from a captured screen region.
    ///
    /// The result is trimmed; an empty string means nothing recognizable
    /// was found near the cursor.
    pub fn extract(&self, region: &RgbaImage) -> Result<String> {
        let dynamic = DynamicImage::ImageRgba8(region.clone());
        let image = Image::from_dynamic_image(&dynamic)
            .map_err(|e| AppError::Ocr(format!("Failed to prepare image: {e}")))?;

        let text = rusty_tesseract::image_to_string(&image, &self.args)
            .map_err(|e| AppError::Ocr(format!("Text extraction failed: {e}")))?;

        Ok(text.trim().to_string())
    }
}
