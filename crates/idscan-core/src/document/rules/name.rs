//! Cardholder name extraction.

use super::patterns::NAME;
use super::{first_match, ExtractionMatch, FieldExtractor, Strategy};

/// Name extractor: the first pair of title-case words.
///
/// Runs over the raw front text, so a heading such as `Government Of` is
/// returned if it precedes the holder's name.
pub struct NameExtractor;

impl NameExtractor {
    const STRATEGIES: [Strategy; 1] = [title_case_pair];

    pub fn new() -> Self {
        Self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        first_match(&Self::STRATEGIES, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NAME.find_iter(text).map(to_match).collect()
    }
}

fn title_case_pair(text: &str) -> Option<ExtractionMatch<String>> {
    NAME.find(text).map(to_match)
}

fn to_match(m: regex::Match<'_>) -> ExtractionMatch<String> {
    ExtractionMatch::new(m.as_str().to_string(), 0.6, m.as_str()).with_position(m.start(), m.end())
}

/// Extract the cardholder name from front-side text.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name() {
        assert_eq!(
            extract_name("John Smith DOB:10/10/1990 Male"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_first_pair_wins() {
        assert_eq!(
            extract_name("Government Of India\nRavi Kumar"),
            Some("Government Of".to_string())
        );
    }

    #[test]
    fn test_takes_two_words_only() {
        assert_eq!(
            extract_name("Anna Maria Lopez"),
            Some("Anna Maria".to_string())
        );
    }

    #[test]
    fn test_requires_title_case() {
        assert_eq!(extract_name("JOHN SMITH"), None);
        assert_eq!(extract_name("john smith"), None);
        assert_eq!(extract_name("J Smith"), None);
        assert_eq!(extract_name("John\nSmith"), None);
    }

    #[test]
    fn test_extract_all() {
        let all = NameExtractor::new().extract_all("Ravi Kumar s/o Mohan Das");
        let values: Vec<&str> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["Ravi Kumar", "Mohan Das"]);
    }
}
