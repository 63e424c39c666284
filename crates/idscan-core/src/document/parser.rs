//! Identity card parser: classify, then extract.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::config::ExtractionConfig;
use crate::models::record::{Field, FieldRecord, RawText};

use super::classifier::classify_raw;
use super::extractor::{FieldMatch, FieldSet};
use super::rules::validate_id_number;
use super::Result;

/// Result of card extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: FieldRecord,
    /// Where each found field came from.
    pub matches: Vec<FieldMatch>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Mean confidence over found fields, 0.0 when none were found.
    pub fn confidence(&self) -> f32 {
        if self.matches.is_empty() {
            return 0.0;
        }
        self.matches.iter().map(|m| m.confidence).sum::<f32>() / self.matches.len() as f32
    }
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse a card from both sides' text.
    fn parse(&self, raw: &RawText) -> Result<ExtractionResult>;
}

/// Rule-based parser for two-sided identity cards.
pub struct IdCardParser {
    fields: FieldSet,
}

impl IdCardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(),
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_id_validation(config.validate_id_checksum)
    }

    /// Set ID number checksum validation.
    pub fn with_id_validation(mut self, validate: bool) -> Self {
        self.fields = FieldSet::new().with_id_validation(validate);
        self
    }
}

impl Default for IdCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for IdCardParser {
    fn parse(&self, raw: &RawText) -> Result<ExtractionResult> {
        let start = Instant::now();

        info!(
            "Parsing card from {} front / {} back characters",
            raw.front.len(),
            raw.back.len()
        );

        if let Err(e) = classify_raw(raw).into_result() {
            warn!("Card rejected: {}", e.code());
            return Err(e);
        }

        let (record, matches) = self.fields.extract(raw);

        let mut warnings: Vec<String> = record
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        if !record.id_number.is_empty() && !validate_id_number(&record.id_number) {
            warnings.push(format!("{} failed checksum validation", Field::IdNumber));
        }
        if !record.date_of_birth.is_empty() && record.parsed_date_of_birth().is_none() {
            warnings.push(format!("{} is not a valid calendar date", Field::DateOfBirth));
        }

        debug!(
            "Extracted {} of {} fields with {} warnings",
            matches.len(),
            Field::ALL.len(),
            warnings.len()
        );

        Ok(ExtractionResult {
            record,
            matches,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
