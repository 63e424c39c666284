//! Rule-based field extractors for identity cards.

pub mod address;
pub mod dates;
pub mod gender;
pub mod id_number;
pub mod name;
pub mod normalize;
pub mod patterns;

pub use address::{extract_address, extract_postal_code, AddressExtractor, PostalCodeExtractor};
pub use dates::{extract_date_of_birth, DateOfBirthExtractor};
pub use gender::{extract_gender, GenderExtractor};
pub use id_number::{extract_id_number, validate_id_number, IdNumberExtractor};
pub use name::{extract_name, NameExtractor};
pub use normalize::normalize_ocr_text;
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single extraction strategy. Returns `None` when it does not apply.
pub type Strategy = fn(&str) -> Option<ExtractionMatch<String>>;

/// Run strategies in order and return the first hit.
pub fn first_match(strategies: &[Strategy], text: &str) -> Option<ExtractionMatch<String>> {
    strategies.iter().find_map(|strategy| strategy(text))
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte span of the value in the searched text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
