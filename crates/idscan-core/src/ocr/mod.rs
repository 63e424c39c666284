//! OCR collaborator interface.
//!
//! Recognition itself is delegated to an external engine; the core only
//! consumes the text it produces.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::{create_engine_from_dir, PureOcrEngine};

use std::thread;

use image::DynamicImage;
use tracing::debug;

use crate::error::OcrError;
use crate::models::record::{RawText, Side};

/// Anything that turns an image into text.
pub trait OcrEngine: Sync {
    /// Recognize all text in the image, lines separated by `\n`.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;

    /// Decode encoded image bytes (PNG, JPEG, ...) and recognize them.
    fn recognize_bytes(&self, bytes: &[u8]) -> Result<String, OcrError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        self.recognize(&image)
    }
}

/// Recognize both sides of a card.
///
/// With `parallel` set, each side runs on its own scoped thread.
pub fn recognize_pair<E: OcrEngine + ?Sized>(
    engine: &E,
    front: &DynamicImage,
    back: &DynamicImage,
    parallel: bool,
) -> Result<RawText, OcrError> {
    let (front_text, back_text) = if parallel {
        thread::scope(|s| {
            let back_handle = s.spawn(|| engine.recognize(back));
            let front_text = engine.recognize(front);
            let back_text = back_handle
                .join()
                .unwrap_or_else(|_| Err(OcrError::Recognition("back side worker panicked".into())));
            (front_text, back_text)
        })
    } else {
        (engine.recognize(front), engine.recognize(back))
    };

    let raw = RawText::new(
        front_text.map_err(|e| side_error(Side::Front, e))?,
        back_text.map_err(|e| side_error(Side::Back, e))?,
    );

    debug!(
        "Recognized {} front / {} back characters",
        raw.front.len(),
        raw.back.len()
    );

    Ok(raw)
}

fn side_error(side: Side, err: OcrError) -> OcrError {
    match err {
        OcrError::Recognition(msg) => OcrError::Recognition(format!("{} side: {}", side, msg)),
        OcrError::InvalidImage(msg) => OcrError::InvalidImage(format!("{} side: {}", side, msg)),
        other => other,
    }
}
