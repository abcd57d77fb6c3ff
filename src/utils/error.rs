use thiserror::Error;

use crate::models::ValidationIssue;

#[derive(Debug, Error)]
pub enum AadhaarError {
    #[error("Text extraction from image failed. Please try with a clearer image. ({0})")]
    TextSourceError(String),
    #[error("No file was uploaded: {0}")]
    MissingInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Some fields are missing. ({})", summarize(.0))]
    ValidationError(Vec<ValidationIssue>),
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}
