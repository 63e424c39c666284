//! Card side classification.
//!
//! Decides whether two transcripts plausibly form the front and back of an
//! identity card. Markers are single keywords: OCR output is noisy, so the
//! checks favor recall and leave precision to field extraction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DocumentError;
use crate::models::record::RawText;

use super::rules::patterns::{BACK_MARKERS, BACK_ON_FRONT, FRONT_MARKERS, FRONT_ON_BACK};

/// Outcome of classifying a front/back pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Both sides look right.
    Accepted,
    /// Each side reads like the other one.
    RejectedSwapped,
    /// At least one side lacks its content markers.
    RejectedNotADocument,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Convert a rejection into its error.
    pub fn into_result(self) -> Result<(), DocumentError> {
        match self {
            Verdict::Accepted => Ok(()),
            Verdict::RejectedSwapped => Err(DocumentError::SwappedSides),
            Verdict::RejectedNotADocument => Err(DocumentError::NotADocument),
        }
    }
}

/// True if the back-labeled text carries front-side markers.
pub fn back_looks_like_front(back: &str) -> bool {
    FRONT_ON_BACK.is_match(back)
}

/// True if the front-labeled text carries back-side markers.
pub fn front_looks_like_back(front: &str) -> bool {
    BACK_ON_FRONT.is_match(front)
}

/// True if the text has any personal-details marker.
pub fn has_front_markers(front: &str) -> bool {
    FRONT_MARKERS.is_match(front)
}

/// True if the text has any address-side marker.
pub fn has_back_markers(back: &str) -> bool {
    BACK_MARKERS.is_match(back)
}

/// Classify a front/back pair.
///
/// The swap check runs first and only fires when both sides cross-indicate.
pub fn classify(front: &str, back: &str) -> Verdict {
    let verdict = if back_looks_like_front(back) && front_looks_like_back(front) {
        Verdict::RejectedSwapped
    } else if !has_front_markers(front) || !has_back_markers(back) {
        Verdict::RejectedNotADocument
    } else {
        Verdict::Accepted
    };

    debug!(
        "Classified {}+{} chars as {:?}",
        front.len(),
        back.len(),
        verdict
    );

    verdict
}

/// Classify a [`RawText`] pair.
pub fn classify_raw(raw: &RawText) -> Verdict {
    classify(&raw.front, &raw.back)
}
