//! Error types for record resolution.

use gedcom_model::ModelError;
use thiserror::Error;

/// Errors returned when a caller asks for something the tree cannot provide.
///
/// Dangling references met while walking the graph are not errors; they are
/// dropped and logged at debug level.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No `INDI` record carries the requested xref id.
    #[error("person not found: {id}")]
    PersonNotFound { id: String },

    /// The record passed as a person is not an `INDI` record.
    #[error("expected an INDI record, found {tag}")]
    NotAnIndividual { tag: String },

    /// An `INDI` record has no xref id, so it cannot be linked or addressed.
    #[error("individual record has no xref id")]
    MissingXref,

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}
