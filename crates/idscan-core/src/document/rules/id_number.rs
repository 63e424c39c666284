//! ID number extraction and validation.

use super::patterns::ID_NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Verhoeff multiplication table.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Verhoeff permutation table.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// ID number field extractor.
///
/// Without validation the first `NNNN NNNN NNNN` group wins. With validation
/// enabled, groups failing the checksum are skipped.
pub struct IdNumberExtractor {
    validate: bool,
}

impl IdNumberExtractor {
    /// Create a new ID number extractor.
    pub fn new() -> Self {
        Self { validate: false }
    }

    /// Set whether to skip numbers with a bad checksum.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for IdNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ID_NUMBER
            .find_iter(text)
            .filter_map(|m| {
                let valid = validate_id_number(m.as_str());
                if self.validate && !valid {
                    return None;
                }
                let confidence = if valid { 0.95 } else { 0.8 };
                Some(
                    ExtractionMatch::new(m.as_str().to_string(), confidence, m.as_str())
                        .with_position(m.start(), m.end()),
                )
            })
            .collect()
    }
}

/// Extract the ID number from front-side text.
pub fn extract_id_number(text: &str) -> Option<String> {
    IdNumberExtractor::new().extract(text).map(|m| m.value)
}

/// Validate a 12-digit Aadhaar number.
///
/// The first digit may not be 0 or 1 and the last digit is a Verhoeff
/// check digit. Spaces and dashes are ignored.
pub fn validate_id_number(id: &str) -> bool {
    let digits: Vec<u8> = id
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    if digits.len() != 12 || digits[0] < 2 {
        return false;
    }

    let checksum = digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &d)| D[c as usize][P[i % 8][d as usize] as usize]);

    checksum == 0
}
