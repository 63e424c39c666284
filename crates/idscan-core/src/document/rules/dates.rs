//! Date of birth extraction.

use super::normalize::normalize_ocr_text;
use super::patterns::{DATE_DMY, DOB_LABELED};
use super::{first_match, ExtractionMatch, FieldExtractor, Strategy};

/// Date of birth extractor.
///
/// Text is normalized first, then a date after the `DOB` marker wins over a
/// bare date anywhere in the text.
pub struct DateOfBirthExtractor;

impl DateOfBirthExtractor {
    const STRATEGIES: [Strategy; 2] = [labeled_date, bare_date];

    pub fn new() -> Self {
        Self
    }
}

impl Default for DateOfBirthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateOfBirthExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::STRATEGIES, &normalize_ocr_text(text))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let text = normalize_ocr_text(text);
        let mut results: Vec<Self::Output> = Vec::new();

        for caps in DOB_LABELED.captures_iter(&text) {
            let Some(date) = caps.get(1) else {
                continue;
            };
            results.push(
                ExtractionMatch::new(date.as_str().to_string(), 0.95, &caps[0])
                    .with_position(date.start(), date.end()),
            );
        }

        for m in DATE_DMY.find_iter(&text) {
            // Skip dates already found behind a marker
            if results.iter().any(|r| r.position == Some((m.start(), m.end()))) {
                continue;
            }
            results.push(
                ExtractionMatch::new(m.as_str().to_string(), 0.7, m.as_str())
                    .with_position(m.start(), m.end()),
            );
        }

        results
    }
}

fn labeled_date(text: &str) -> Option<ExtractionMatch<String>> {
    let caps = DOB_LABELED.captures(text)?;
    let date = caps.get(1)?;
    Some(
        ExtractionMatch::new(date.as_str().to_string(), 0.95, &caps[0])
            .with_position(date.start(), date.end()),
    )
}

fn bare_date(text: &str) -> Option<ExtractionMatch<String>> {
    let m = DATE_DMY.find(text)?;
    Some(
        ExtractionMatch::new(m.as_str().to_string(), 0.7, m.as_str())
            .with_position(m.start(), m.end()),
    )
}

/// Extract the date of birth from front-side text.
pub fn extract_date_of_birth(text: &str) -> Option<String> {
    DateOfBirthExtractor::new().extract(text).map(|m| m.value)
}
