//! Address and postal code extraction from the back side.

use super::patterns::{ADDRESS, POSTAL_CODE};
use super::{first_match, ExtractionMatch, FieldExtractor, Strategy};

/// Address extractor: the rest of the line after the `Address` marker.
pub struct AddressExtractor;

impl AddressExtractor {
    const STRATEGIES: [Strategy; 1] = [labeled_line];

    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::STRATEGIES, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ADDRESS
            .captures_iter(text)
            .filter_map(|caps| {
                let line = caps.get(1)?;
                Some(
                    ExtractionMatch::new(line.as_str().to_string(), 0.9, &caps[0])
                        .with_position(line.start(), line.end()),
                )
            })
            .collect()
    }
}

fn labeled_line(text: &str) -> Option<ExtractionMatch<String>> {
    let caps = ADDRESS.captures(text)?;
    let line = caps.get(1)?;
    Some(
        ExtractionMatch::new(line.as_str().to_string(), 0.9, &caps[0])
            .with_position(line.start(), line.end()),
    )
}

/// Postal code extractor: the first standalone six-digit token.
pub struct PostalCodeExtractor;

impl PostalCodeExtractor {
    const STRATEGIES: [Strategy; 1] = [six_digits];

    pub fn new() -> Self {
        Self
    }
}

impl Default for PostalCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PostalCodeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::STRATEGIES, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        POSTAL_CODE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), 0.8, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

fn six_digits(text: &str) -> Option<ExtractionMatch<String>> {
    let m = POSTAL_CODE.find(text)?;
    Some(ExtractionMatch::new(m.as_str().to_string(), 0.8, m.as_str()).with_position(m.start(), m.end()))
}

/// Extract the address line from back-side text.
pub fn extract_address(text: &str) -> Option<String> {
    AddressExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the postal code from back-side text.
pub fn extract_postal_code(text: &str) -> Option<String> {
    PostalCodeExtractor::new().extract(text).map(|m| m.value)
}
