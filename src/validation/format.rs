use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use super::date::{is_valid_iso_date, iso_date_of_birth};
use crate::models::{ExtractedRecord, Field, ValidationIssue, ValidationResult};
use crate::utils::AadhaarError;

lazy_static! {
    static ref ID_NUMBER_FORMAT: Regex = Regex::new(r"^\d{4} \d{4} \d{4}$").unwrap();
}

const MIN_NAME_LENGTH: usize = 3;

/// Checks a user-confirmed record before it is handed to persistence.
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(record: &ExtractedRecord) -> ValidationResult {
        let mut issues = Vec::new();
        let mut fail = |field: Field, message: &str| {
            issues.push(ValidationIssue {
                field,
                message: message.to_string(),
            })
        };

        if record.name.as_deref().map_or(0, |name| name.chars().count()) < MIN_NAME_LENGTH {
            fail(Field::Name, "Name is Required");
        }

        if let Some(guardian) = record.guardian_name.as_deref() {
            let guardian = guardian.trim();
            if !guardian.is_empty() && guardian.chars().count() < MIN_NAME_LENGTH {
                fail(
                    Field::GuardianName,
                    "Father's name must be at least 3 characters if provided",
                );
            }
        }

        match record.id_number.as_deref() {
            Some(number) if ID_NUMBER_FORMAT.is_match(number) => {}
            _ => fail(Field::IdNumber, "Invalid Aadhaar number"),
        }

        match record.dob.as_deref().map(iso_date_of_birth) {
            Some(dob) if is_valid_iso_date(&dob) => {}
            _ => fail(Field::DateOfBirth, "Invalid date of birth format (yyyy-mm-dd)"),
        }

        if record.gender.is_none() {
            fail(Field::Gender, "Gender is required");
        }

        if record.address.as_deref().map_or(true, |address| address.is_empty()) {
            fail(Field::Address, "Address is required");
        }

        for issue in &issues {
            warn!("record rejected on {}: {}", issue.field, issue.message);
        }

        ValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Validates `record` and returns it with its date of birth in ISO form,
    /// ready to persist.
    pub fn confirm(record: &ExtractedRecord) -> Result<ExtractedRecord, AadhaarError> {
        let result = Self::validate(record);
        if !result.is_valid {
            return Err(AadhaarError::ValidationError(result.issues));
        }
        Ok(ExtractedRecord {
            dob: record.dob.as_deref().map(iso_date_of_birth),
            ..record.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn complete_record() -> ExtractedRecord {
        ExtractedRecord {
            dob: Some("01/01/1990".to_string()),
            id_number: Some("1234 5678 9012".to_string()),
            gender: Some(Gender::Male),
            name: Some("RAHUL SHARMA".to_string()),
            guardian_name: Some("Ramesh Sharma".to_string()),
            address: Some("12 MG Road, Pune".to_string()),
        }
    }

    fn failed_fields(result: &ValidationResult) -> Vec<Field> {
        result.issues.iter().map(|issue| issue.field).collect()
    }

    #[test]
    fn test_complete_record_is_valid() {
        let result = RecordValidator::validate(&complete_record());
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_empty_record_reports_every_required_field() {
        let result = RecordValidator::validate(&ExtractedRecord::default());
        assert!(!result.is_valid);
        assert_eq!(
            failed_fields(&result),
            vec![Field::Name, Field::IdNumber, Field::DateOfBirth, Field::Gender, Field::Address]
        );
    }

    #[test]
    fn test_guardian_name_is_optional_but_not_short() {
        let mut record = complete_record();
        record.guardian_name = Some("  ".to_string());
        assert!(RecordValidator::validate(&record).is_valid);

        record.guardian_name = Some("Al".to_string());
        assert_eq!(failed_fields(&RecordValidator::validate(&record)), vec![Field::GuardianName]);
    }

    #[test]
    fn test_unspaced_id_number_is_rejected() {
        let mut record = complete_record();
        record.id_number = Some("123456789012".to_string());
        assert_eq!(failed_fields(&RecordValidator::validate(&record)), vec![Field::IdNumber]);
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        let mut record = complete_record();
        record.dob = Some("31/02/1990".to_string());
        assert_eq!(failed_fields(&RecordValidator::validate(&record)), vec![Field::DateOfBirth]);
    }

    #[test]
    fn test_confirm_converts_date_of_birth() {
        let confirmed = RecordValidator::confirm(&complete_record()).unwrap();
        assert_eq!(confirmed.dob.as_deref(), Some("1990-01-01"));
        assert_eq!(confirmed.name.as_deref(), Some("RAHUL SHARMA"));
    }

    #[test]
    fn test_confirm_rejects_invalid_record() {
        let mut record = complete_record();
        record.address = Some(String::new());
        match RecordValidator::confirm(&record) {
            Err(AadhaarError::ValidationError(issues)) => assert_eq!(issues[0].field, Field::Address),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
