use log::info;

use crate::models::{ExtractedRecord, RawDocumentText};
use crate::processing::{DocumentSide, FieldExtractor, TextSource};
use crate::utils::AadhaarError;

/// Turns the OCR text of both card faces into an `ExtractedRecord`.
/// Stateless; one reader can serve any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct AadhaarReader;

impl AadhaarReader {
    pub fn new() -> Self {
        AadhaarReader
    }

    // Never fails: unreadable or empty text only leaves fields unset
    pub fn extract(&self, raw: &RawDocumentText) -> ExtractedRecord {
        let front = DocumentSide::new(&raw.front_text);
        let back = DocumentSide::new(&raw.back_text);

        // front: name, DOB, gender, number; back: guardian, address
        let record = ExtractedRecord {
            dob: FieldExtractor::extract_dob(&front),
            id_number: FieldExtractor::extract_id_number(&front),
            gender: FieldExtractor::extract_gender(&front),
            name: FieldExtractor::extract_name(&front),
            guardian_name: FieldExtractor::extract_guardian_name(&back),
            address: FieldExtractor::extract_address(&back),
        };

        info!("extracted {} of 6 fields", record.found_count());
        record
    }

    pub fn extract_text(&self, front_text: &str, back_text: &str) -> ExtractedRecord {
        self.extract(&RawDocumentText::new(front_text, back_text))
    }

    /// Pulls text from `source` and extracts from it. Only the source can fail.
    pub fn read<S: TextSource + ?Sized>(&self, source: &S) -> Result<ExtractedRecord, AadhaarError> {
        let raw = source.read_text()?;
        Ok(self.extract(&raw))
    }
}
