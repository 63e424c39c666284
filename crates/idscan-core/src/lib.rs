//! Core library for two-sided identity card OCR.
//!
//! This crate provides:
//! - Front/back classification with swapped-sides detection
//! - Rule-based extraction of name, date of birth, gender, ID number,
//!   address and postal code
//! - An OCR engine interface, with a `pure-onnx-ocr` backend under the
//!   `native` feature

pub mod document;
pub mod error;
pub mod models;
pub mod ocr;

pub use document::{classify, extract, CardParser, ExtractionResult, IdCardParser, Verdict};
pub use error::{DocumentError, IdScanError, OcrError, Result};
pub use models::config::IdScanConfig;
pub use models::record::{Field, FieldRecord, RawText, Side};
pub use ocr::{recognize_pair, OcrEngine};
#[cfg(feature = "native")]
pub use ocr::{create_engine_from_dir, PureOcrEngine};

/// Classify and extract in one step.
///
/// Rejections come back as [`DocumentError`]; an accepted card always yields
/// a record, possibly with empty fields.
pub fn scan(raw: &RawText) -> std::result::Result<FieldRecord, DocumentError> {
    classify(&raw.front, &raw.back).into_result()?;
    Ok(extract(&raw.front, &raw.back))
}
