pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod aadhaar_reader;

pub use aadhaar_reader::AadhaarReader;
pub use models::{ExtractedRecord, Gender, RawDocumentText};
pub use utils::AadhaarError;
