//! Error types for the idscan-core library.

use thiserror::Error;

/// Main error type for the idscan library.
#[derive(Error, Debug)]
pub enum IdScanError {
    /// The two sides were rejected by the document classifier.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Every field of an accepted document came back empty.
    #[error("No details could be read from the images. Please upload clearer images.")]
    EmptyExtraction,
}

/// Rejections produced by the document classifier.
///
/// Display strings are user-facing and ask for a re-upload.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// Back reads like a front and front reads like a back.
    #[error("Front and back images appear to be swapped or invalid Aadhaar images.")]
    SwappedSides,

    /// One or both sides lack the required content markers.
    #[error(
        "Uploaded images do not appear to contain Aadhaar content. Please upload valid Aadhaar images."
    )]
    NotADocument,
}

impl DocumentError {
    /// Short machine-readable tag for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::SwappedSides => "swapped",
            DocumentError::NotADocument => "not-a-document",
        }
    }
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the idscan library.
pub type Result<T> = std::result::Result<T, IdScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_is_transparent() {
        let err: IdScanError = DocumentError::NotADocument.into();
        assert_eq!(err.to_string(), DocumentError::NotADocument.to_string());
    }

    #[test]
    fn test_ocr_error_prefix() {
        let err: IdScanError = OcrError::ModelLoad("det.onnx".to_string()).into();
        assert_eq!(err.to_string(), "OCR error: failed to load model: det.onnx");
    }
}
