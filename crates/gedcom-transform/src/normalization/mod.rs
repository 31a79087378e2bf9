//! Normalization functions for genealogy record text.
//!
//! - **date**: free-text date parsing to canonical sortable keys
//! - **age**: age at an event from canonical dates

pub mod age;
pub mod date;

// Re-export commonly used items
pub use age::{Age, age_at_event};
pub use date::{DatePrecision, DateQualifier, ParsedDate, normalize_date, parse_date};
