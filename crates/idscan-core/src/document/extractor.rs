//! Field extraction over an accepted front/back pair.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::record::{Field, FieldRecord, RawText, Side};

use super::rules::{
    AddressExtractor, DateOfBirthExtractor, ExtractionMatch, FieldExtractor, GenderExtractor,
    IdNumberExtractor, NameExtractor, PostalCodeExtractor,
};

/// A located field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: Field,
    pub side: Side,
    pub value: String,
    pub confidence: f32,
    /// Byte span of the value in that side's text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(usize, usize)>,
}

impl FieldMatch {
    fn new(field: Field, found: ExtractionMatch<String>) -> Self {
        Self {
            field,
            side: field.side(),
            value: found.value,
            confidence: found.confidence,
            position: found.position,
        }
    }
}

/// Runs every field rule against the appropriate side.
pub struct FieldSet {
    name: NameExtractor,
    date_of_birth: DateOfBirthExtractor,
    gender: GenderExtractor,
    id_number: IdNumberExtractor,
    address: AddressExtractor,
    postal_code: PostalCodeExtractor,
}

impl FieldSet {
    pub fn new() -> Self {
        Self {
            name: NameExtractor::new(),
            date_of_birth: DateOfBirthExtractor::new(),
            gender: GenderExtractor::new(),
            id_number: IdNumberExtractor::new(),
            address: AddressExtractor::new(),
            postal_code: PostalCodeExtractor::new(),
        }
    }

    /// Skip ID number candidates that fail the checksum.
    pub fn with_id_validation(mut self, validate: bool) -> Self {
        self.id_number = IdNumberExtractor::new().with_validation(validate);
        self
    }

    fn find(&self, field: Field, text: &str) -> Option<ExtractionMatch<String>> {
        match field {
            Field::Name => self.name.extract(text),
            Field::DateOfBirth => self.date_of_birth.extract(text),
            Field::Gender => self.gender.extract(text),
            Field::IdNumber => self.id_number.extract(text),
            Field::Address => self.address.extract(text),
            Field::PostalCode => self.postal_code.extract(text),
        }
    }

    /// Extract all six fields, keeping where each was found.
    pub fn extract(&self, raw: &RawText) -> (FieldRecord, Vec<FieldMatch>) {
        let mut record = FieldRecord::default();
        let mut matches = Vec::new();

        for field in Field::ALL {
            match self.find(field, raw.side(field.side())) {
                Some(found) => {
                    debug!("Found {} = {:?} ({:.2})", field, found.value, found.confidence);
                    record.set(field, found.value.clone());
                    matches.push(FieldMatch::new(field, found));
                }
                None => debug!("No match for {}", field),
            }
        }

        (record, matches)
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the six fields from confirmed front and back text.
///
/// Never fails: fields without a match are left empty.
pub fn extract(front: &str, back: &str) -> FieldRecord {
    FieldSet::new().extract(&RawText::new(front, back)).0
}
