//! Common regex patterns for identity card classification and extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Swap detection (case-sensitive)
    pub static ref FRONT_ON_BACK: Regex = Regex::new(
        r"DOB|Male|Female"
    ).unwrap();

    pub static ref BACK_ON_FRONT: Regex = Regex::new(
        r"Address|Pincode"
    ).unwrap();

    // Content plausibility
    pub static ref FRONT_MARKERS: Regex = Regex::new(
        r"(?i)DOB|Male|Female|Government"
    ).unwrap();

    pub static ref BACK_MARKERS: Regex = Regex::new(
        r"(?i)Address|Pincode|Kerala|India"
    ).unwrap();

    // Two consecutive title-case words
    pub static ref NAME: Regex = Regex::new(
        r"[A-Z][a-z]+ [A-Z][a-z]+"
    ).unwrap();

    // Date of birth after the DOB marker
    pub static ref DOB_LABELED: Regex = Regex::new(
        r"(?i)DOB[:\s]*([0-3]?[0-9][/\-][01]?[0-9][/\-][0-9]{4})"
    ).unwrap();

    // Word boundaries below are ASCII-only: a Devanagari or accented letter
    // touching a token still counts as a boundary.

    // Any D[D]/M[M]/YYYY or D[D]-M[M]-YYYY token
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(?-u:\b)([0-3]?[0-9][/\-][01]?[0-9][/\-][0-9]{4})(?-u:\b)"
    ).unwrap();

    pub static ref GENDER: Regex = Regex::new(
        r"(?i)(?-u:\b)(Male|Female|Other)(?-u:\b)"
    ).unwrap();

    // 12-digit ID number printed in groups of four
    pub static ref ID_NUMBER: Regex = Regex::new(
        r"(?-u:\b)[0-9]{4} [0-9]{4} [0-9]{4}(?-u:\b)"
    ).unwrap();

    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"(?-u:\b)[0-9]{6}(?-u:\b)"
    ).unwrap();

    // Address marker, separator, rest of the line
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?i)Address[:\s]*([^\r\n]*)"
    ).unwrap();
}
