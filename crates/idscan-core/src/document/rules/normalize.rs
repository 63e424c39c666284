//! OCR confusion fixes applied before date matching.

/// Correct OCR mis-renders around the date of birth marker.
///
/// `D0B` becomes `DOB`; `|` and `;` become `:`. Every substitution keeps the
/// byte length, so match offsets map back onto the original text.
pub fn normalize_ocr_text(text: &str) -> String {
    text.replace("D0B", "DOB").replace(['|', ';'], ":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_in_marker() {
        assert_eq!(normalize_ocr_text("D0B: 01-01-1999"), "DOB: 01-01-1999");
    }

    #[test]
    fn test_separator_confusion() {
        assert_eq!(normalize_ocr_text("DOB| 01/01/1999"), "DOB: 01/01/1999");
        assert_eq!(normalize_ocr_text("DOB; 01/01/1999"), "DOB: 01/01/1999");
    }

    #[test]
    fn test_only_literal_substitution() {
        // Lowercase variant is not an OCR confusion the rule covers.
        assert_eq!(normalize_ocr_text("d0b 1/1/2000"), "d0b 1/1/2000");
        assert_eq!(normalize_ocr_text("plain text"), "plain text");
        assert_eq!(
            normalize_ocr_text("John Smith").len(),
            "John Smith".len()
        );
    }
}
