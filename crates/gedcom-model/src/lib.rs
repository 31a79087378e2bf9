//! Genealogy record tree and normalized domain model definitions.
//!
//! - **record**: raw `{type, data, children}` nodes from the upstream parser
//! - **tags**: the GEDCOM tag vocabulary the resolvers look at
//! - **ids / date / event / person**: plain values produced by resolution
//! - **options**: resolution and privacy configuration
//! - **builder**: programmatic tree construction

pub mod builder;
pub mod date;
pub mod error;
pub mod event;
pub mod ids;
pub mod options;
pub mod person;
pub mod record;
pub mod tags;

pub use date::CanonicalDate;
pub use error::{ModelError, Result};
pub use event::{Citation, Event, EventKind};
pub use ids::{EventId, Xref, strip_delimiters};
pub use options::ResolveOptions;
pub use person::{
    Disclosure, LIVING_PERSON_NAME, LifeEvents, NameIndexEntry, PersonName, Sex, SurnameEntry,
    UNKNOWN_PERSON_NAME,
};
pub use record::{RawRecord, RecordData};
