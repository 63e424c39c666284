//! Gender extraction.

use super::patterns::GENDER;
use super::{first_match, ExtractionMatch, FieldExtractor, Strategy};

/// Gender extractor: first whole-word `Male`, `Female` or `Other`, any case.
///
/// The value keeps the casing found in the text.
pub struct GenderExtractor;

impl GenderExtractor {
    const STRATEGIES: [Strategy; 1] = [gender_word];

    pub fn new() -> Self {
        Self
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::STRATEGIES, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        GENDER
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), 0.9, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

fn gender_word(text: &str) -> Option<ExtractionMatch<String>> {
    let m = GENDER.find(text)?;
    Some(ExtractionMatch::new(m.as_str().to_string(), 0.9, m.as_str()).with_position(m.start(), m.end()))
}

/// Extract gender from front-side text.
pub fn extract_gender(text: &str) -> Option<String> {
    GenderExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_gender() {
        assert_eq!(extract_gender("DOB:10/10/1990 Male"), Some("Male".to_string()));
        assert_eq!(extract_gender("Female / स्त्री"), Some("Female".to_string()));
        assert_eq!(extract_gender("Other"), Some("Other".to_string()));
    }

    #[test]
    fn test_keeps_source_casing() {
        assert_eq!(extract_gender("SEX: FEMALE"), Some("FEMALE".to_string()));
        assert_eq!(extract_gender("gender male"), Some("male".to_string()));
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(extract_gender("Malegaon Otherwise"), None);
        // "male" inside "Female" is not a separate word
        assert_eq!(extract_gender("Female"), Some("Female".to_string()));
    }

    #[test]
    fn test_first_occurrence() {
        assert_eq!(
            extract_gender("Mother Female Male"),
            Some("Female".to_string())
        );
    }

    #[test]
    fn test_adjacent_non_ascii_letters_are_boundaries() {
        assert_eq!(extract_gender("पुरुषMale"), Some("Male".to_string()));
        assert_eq!(extract_gender("Femaleस्त्री"), Some("Female".to_string()));
    }
}
