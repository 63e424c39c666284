//! Identity card classification and field extraction.

pub mod classifier;
mod extractor;
mod parser;
pub mod rules;

pub use classifier::{classify, Verdict};
pub use extractor::{extract, FieldMatch, FieldSet};
pub use parser::{CardParser, ExtractionResult, IdCardParser};

use crate::error::DocumentError;

/// Result type for classification and parsing.
pub type Result<T> = std::result::Result<T, DocumentError>;
