pub mod date;
pub mod format;

pub use date::iso_date_of_birth;
pub use format::RecordValidator;
