use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::RawDocumentText;
use crate::utils::AadhaarError;

/// Supplies the OCR transcription of both card faces. Recognition itself
/// happens behind this trait; failures surface here, never in extraction.
pub trait TextSource {
    fn read_text(&self) -> Result<RawDocumentText, AadhaarError>;
}

/// Reads front and back transcriptions that were saved as UTF-8 text files.
pub struct FileTextSource {
    front: PathBuf,
    back: PathBuf,
}

impl FileTextSource {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(front: P, back: Q) -> Self {
        FileTextSource {
            front: front.as_ref().to_path_buf(),
            back: back.as_ref().to_path_buf(),
        }
    }

    fn read_side(path: &Path) -> Result<String, AadhaarError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AadhaarError::MissingInput(path.display().to_string()),
            _ => AadhaarError::TextSourceError(format!("failed to read {}: {}", path.display(), e)),
        })?;
        debug!("read {} bytes of OCR text from {}", text.len(), path.display());
        Ok(text)
    }
}

impl TextSource for FileTextSource {
    fn read_text(&self) -> Result<RawDocumentText, AadhaarError> {
        let front_text = Self::read_side(&self.front)?;
        let back_text = Self::read_side(&self.back)?;
        Ok(RawDocumentText { front_text, back_text })
    }
}

/// Text already held in memory, e.g. handed over by an upstream OCR call.
impl TextSource for RawDocumentText {
    fn read_text(&self) -> Result<RawDocumentText, AadhaarError> {
        Ok(self.clone())
    }
}
