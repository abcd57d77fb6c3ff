pub mod error;

pub use error::AadhaarError;
