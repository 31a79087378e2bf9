//! Genealogy record text normalization.
//!
//! This crate provides pure transformation logic used during resolution:
//!
//! - **normalization**: free-text dates to canonical keys, age at event
//! - **data_utils**: name splitting, identifier and URL helpers, name ordering

pub mod data_utils;
pub mod normalization;

// Re-export common functions for external use
pub use data_utils::{compare_names, person_url, split_name, strip_surname_markers, surname_slug};
pub use normalization::{Age, ParsedDate, age_at_event, normalize_date, parse_date};
