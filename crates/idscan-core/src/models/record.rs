//! Identity card data models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::IdScanError;

/// OCR transcripts of both sides of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawText {
    /// Text recognized on the side uploaded as the front.
    pub front: String,

    /// Text recognized on the side uploaded as the back.
    pub back: String,
}

impl RawText {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Get the transcript for one side.
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}

/// Side of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Personal details side (name, date of birth, gender, ID number).
    Front,
    /// Address side.
    Back,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Front => write!(f, "front"),
            Side::Back => write!(f, "back"),
        }
    }
}

/// The six extracted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    DateOfBirth,
    Gender,
    IdNumber,
    Address,
    PostalCode,
}

impl Field {
    /// All fields in output order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::DateOfBirth,
        Field::Gender,
        Field::IdNumber,
        Field::Address,
        Field::PostalCode,
    ];

    /// Key used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::DateOfBirth => "dateOfBirth",
            Field::Gender => "gender",
            Field::IdNumber => "idNumber",
            Field::Address => "address",
            Field::PostalCode => "postalCode",
        }
    }

    /// Side of the card the field is read from.
    pub fn side(&self) -> Side {
        match self {
            Field::Name | Field::DateOfBirth | Field::Gender | Field::IdNumber => Side::Front,
            Field::Address | Field::PostalCode => Side::Back,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields extracted from an accepted card.
///
/// An empty string means the field was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub id_number: String,
    pub address: String,
    pub postal_code: String,
}

impl FieldRecord {
    /// Get a field value by name.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Gender => &self.gender,
            Field::IdNumber => &self.id_number,
            Field::Address => &self.address,
            Field::PostalCode => &self.postal_code,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Gender => &mut self.gender,
            Field::IdNumber => &mut self.id_number,
            Field::Address => &mut self.address,
            Field::PostalCode => &mut self.postal_code,
        };
        *slot = value;
    }

    /// True when no field was found.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that came back empty.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Reject a record with no fields at all.
    pub fn require_any(self) -> Result<Self, IdScanError> {
        if self.is_empty() {
            Err(IdScanError::EmptyExtraction)
        } else {
            Ok(self)
        }
    }

    /// Interpret the date of birth as day/month/year.
    ///
    /// Returns `None` when the field is empty or not a real calendar date.
    pub fn parsed_date_of_birth(&self) -> Option<NaiveDate> {
        let mut parts = self.date_of_birth.split(['/', '-']);
        let day: u32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let year: i32 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}
