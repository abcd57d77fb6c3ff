pub mod extractors;
pub mod normalizer;
pub mod ocr;
pub mod patterns;
pub mod strategy;

pub use extractors::FieldExtractor;
pub use ocr::{FileTextSource, TextSource};
pub use strategy::{DocumentSide, Strategy};
