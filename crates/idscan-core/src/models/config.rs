//! Configuration structures for the scanning pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the idscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdScanConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Model configuration.
    pub models: ModelConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Keep `[UNK]` tokens emitted for characters outside the dictionary.
    pub keep_unk: bool,

    /// Recognize front and back on separate threads.
    pub parallel_sides: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            keep_unk: false,
            parallel_sides: true,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Treat a record with every field empty as a failure.
    pub reject_empty: bool,

    /// Skip ID number candidates that fail the Verhoeff checksum.
    pub validate_id_checksum: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            reject_empty: true,
            validate_id_checksum: false,
        }
    }
}

/// Model file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "en_rec.onnx".to_string(),
            dictionary: "en_dict.txt".to_string(),
        }
    }
}

impl IdScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.models.model_dir.join(model_name)
    }
}
