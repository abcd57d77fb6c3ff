pub mod data;
pub mod keywords;

pub use data::*;
