//! Configuration management for the hand gesture control application

use crate::constants::{
    DEFAULT_CAPTURE_SIZE, DEFAULT_CURSOR_SENSITIVITY, DEFAULT_DETECTION_CONFIDENCE, DEFAULT_SMOOTHING_ALPHA,
    DEFAULT_TRACKING_CONFIDENCE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hand detector configuration
    pub detector: DetectorConfig,

    /// Cursor control configuration
    pub cursor: CursorConfig,

    /// Motion smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Narration configuration
    pub narration: NarrationConfig,
}

/// Hand detector parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to the hand landmark ONNX model
    pub model: PathBuf,

    /// Minimum confidence for fresh hand detection (0.0-1.0)
    pub min_detection_confidence: f32,

    /// Minimum confidence while tracking an already-detected hand (0.0-1.0)
    pub min_tracking_confidence: f32,
}

/// Cursor control parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Enable cursor and click injection
    pub enabled: bool,

    /// Sensitivity multiplier applied to mapped coordinates
    pub sensitivity: f64,
}

/// Motion smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Weight of the newest raw sample in the moving average (0.0, 1.0]
    pub alpha: f64,
}

/// Narration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// Enable spoken narration on cursor movement
    pub enabled: bool,

    /// Side length of the square OCR capture region, in pixels
    pub capture_size: u16,

    /// Tesseract language code
    pub ocr_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            cursor: CursorConfig::default(),
            smoothing: SmoothingConfig::default(),
            narration: NarrationConfig::default(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from("assets/hand_landmarks.onnx"),
            min_detection_confidence: DEFAULT_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_TRACKING_CONFIDENCE,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitivity: DEFAULT_CURSOR_SENSITIVITY,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capture_size: DEFAULT_CAPTURE_SIZE,
            ocr_language: "eng".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.detector.min_detection_confidence) {
            return Err(Error::ConfigError(
                "Detection confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.detector.min_tracking_confidence) {
            return Err(Error::ConfigError(
                "Tracking confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.cursor.sensitivity <= 0.0 {
            return Err(Error::ConfigError("Cursor sensitivity must be positive".to_string()));
        }

        if self.smoothing.alpha <= 0.0 || self.smoothing.alpha > 1.0 {
            return Err(Error::ConfigError(
                "Smoothing alpha must be in (0.0, 1.0]".to_string(),
            ));
        }

        if self.narration.capture_size == 0 {
            return Err(Error::ConfigError(
                "Narration capture size must be greater than 0".to_string(),
            ));
        }
        if self.narration.ocr_language.is_empty() {
            return Err(Error::ConfigError("OCR language must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Hand detector
detector:
  model: "assets/hand_landmarks.onnx"
  min_detection_confidence: 0.7
  min_tracking_confidence: 0.7

# Cursor control
cursor:
  enabled: true
  sensitivity: 1.0

# Motion smoothing
smoothing:
  alpha: 0.5

# Narration
narration:
  enabled: true
  capture_size: 100
  ocr_language: "eng"
"#;
