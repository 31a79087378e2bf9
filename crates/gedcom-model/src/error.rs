use thiserror::Error;

/// Errors raised while constructing model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An event was given an empty identifier.
    #[error("event id is required")]
    EmptyEventId,

    /// A record cross-reference id was empty after trimming.
    #[error("invalid xref id: {0:?}")]
    InvalidXref(String),

    /// A canonical date string was not eight ASCII digits with a valid month/day.
    #[error("invalid canonical date: {0:?}")]
    InvalidCanonicalDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
