//! OCR engine wrapper using `pure-onnx-ocr`.

use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::{IdScanConfig, OcrConfig};

use super::OcrEngine;

/// Rows closer than this many pixels are read as one line.
const ROW_HEIGHT: f64 = 20.0;

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
    config: OcrConfig,
}

impl PureOcrEngine {
    /// Create an engine from explicit model and dictionary paths.
    pub fn from_paths(
        det_path: &Path,
        rec_path: &Path,
        dict_path: &Path,
        config: OcrConfig,
    ) -> Result<Self, OcrError> {
        for path in [det_path, rec_path, dict_path] {
            if !path.exists() {
                return Err(OcrError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(det_path)
            .rec_model_path(rec_path)
            .dictionary_path(dict_path)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", det_path.display());

        Ok(Self { engine, config })
    }

    /// Read lines of text from an image, in reading order.
    fn read_lines(&self, image: &DynamicImage) -> Result<Vec<String>, OcrError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();

        debug!("Recognizing image: {}x{}", width, height);

        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        let mut lines: Vec<((i64, f64), String)> = results
            .iter()
            .map(|r| {
                let text = if self.config.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace("[UNK]", " ")
                };
                (reading_key(&r.bounding_box), text)
            })
            .collect();

        lines.sort_by(|(a, _), (b, _)| {
            a.0.cmp(&b.0)
                .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        });

        info!(
            "OCR complete: {} text regions in {}ms",
            lines.len(),
            start.elapsed().as_millis()
        );

        Ok(lines.into_iter().map(|(_, text)| text).collect())
    }
}

impl OcrEngine for PureOcrEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        Ok(self.read_lines(image)?.join("\n"))
    }
}

/// Sort key: coarse row from the top edge, then the left edge.
fn reading_key(polygon: &pure_onnx_ocr::Polygon<f64>) -> (i64, f64) {
    let (min_x, min_y) = polygon
        .exterior()
        .coords()
        .fold((f64::INFINITY, f64::INFINITY), |(x, y), c| {
            (x.min(c.x), y.min(c.y))
        });
    ((min_y / ROW_HEIGHT) as i64, min_x)
}

/// Create an engine from the model files named in the configuration.
pub fn create_engine_from_dir(
    model_dir: &Path,
    config: &IdScanConfig,
) -> Result<PureOcrEngine, OcrError> {
    PureOcrEngine::from_paths(
        &model_dir.join(&config.models.detection_model),
        &model_dir.join(&config.models.recognition_model),
        &model_dir.join(&config.models.dictionary),
        config.ocr.clone(),
    )
}
