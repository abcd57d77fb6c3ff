use serde::{Deserialize, Serialize};
use std::fmt;

/// The two OCR transcriptions of a card, exactly as the text source produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocumentText {
    pub front_text: String,
    pub back_text: String,
}

impl RawDocumentText {
    pub fn new(front_text: impl Into<String>, back_text: impl Into<String>) -> Self {
        RawDocumentText {
            front_text: front_text.into(),
            back_text: back_text.into(),
        }
    }
}

/// Per-side derived text. `lines` keeps the original line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub collapsed: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Others => write!(f, "Others"),
        }
    }
}

/// Best-effort identity fields pulled out of one card. Every field is
/// independently optional; the record is a first draft for a human to confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub dob: Option<String>,
    pub id_number: Option<String>,
    pub gender: Option<Gender>,
    pub name: Option<String>,
    pub guardian_name: Option<String>,
    pub address: Option<String>,
}

impl ExtractedRecord {
    /// Number of fields that resolved to a value.
    pub fn found_count(&self) -> usize {
        [
            self.dob.is_some(),
            self.id_number.is_some(),
            self.gender.is_some(),
            self.name.is_some(),
            self.guardian_name.is_some(),
            self.address.is_some(),
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DateOfBirth,
    IdNumber,
    Gender,
    Name,
    GuardianName,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Field::DateOfBirth => "dob",
            Field::IdNumber => "idNumber",
            Field::Gender => "gender",
            Field::Name => "name",
            Field::GuardianName => "guardianName",
            Field::Address => "address",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = ExtractedRecord {
            dob: Some("01/01/1990".to_string()),
            id_number: Some("1234 5678 9012".to_string()),
            gender: Some(Gender::Male),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["idNumber"], "1234 5678 9012");
        assert_eq!(json["gender"], "Male");
        assert!(json["guardianName"].is_null());
        assert_eq!(record.found_count(), 3);
    }

    #[test]
    fn test_record_round_trips_from_json() {
        let json = r#"{"dob":"1990-01-01","idNumber":"1234 5678 9012","gender":"Others",
            "name":"Asha Rao","guardianName":null,"address":"Pune"}"#;
        let record: ExtractedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.gender, Some(Gender::Others));
        assert_eq!(record.guardian_name, None);
    }
}
