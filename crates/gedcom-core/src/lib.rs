//! Resolution of genealogy record trees into people, families and events.
//!
//! - **accessor**: indexed lookups over the immutable [`RecordTree`]
//! - **citations / events**: source citations, notes and normalized events
//! - **person**: lazily resolved [`Person`] projections
//! - **relationships**: families as spouse, parents and pedigree
//! - **privacy**: living-status inference behind the [`LivingPolicy`] seam
//! - **index**: name and surname indices over resolved people
//! - **logging**: subscriber setup and redaction of personal data
//!
//! ```
//! use gedcom_core::{RecordTree, Resolver};
//! use gedcom_model::ResolveOptions;
//! use gedcom_model::builder::{IndividualBuilder, TreeBuilder};
//!
//! let tree = RecordTree::new(
//!     TreeBuilder::new()
//!         .individual(
//!             IndividualBuilder::new("@I1@")
//!                 .name("Ada /Byron/")
//!                 .event("BIRT", Some("10 DEC 1815"))
//!                 .event("DEAT", Some("27 NOV 1852")),
//!         )
//!         .build(),
//! );
//! let resolver = Resolver::new(&tree).with_options(ResolveOptions::new().with_reference_year(2024));
//! let ada = resolver.person("@I1@").unwrap();
//!
//! assert_eq!(ada.url(), "/people/I/I1");
//! assert!(!ada.considered_living());
//! assert_eq!(ada.display_name(), "Ada Byron");
//! ```

pub mod accessor;
pub mod citations;
pub mod error;
pub mod events;
pub mod index;
pub mod logging;
pub mod person;
pub mod privacy;
pub mod relationships;
pub mod resolver;

pub use accessor::{RecordTree, find_child, find_record, find_records, find_value, follow};
pub use citations::{normalize_citations, normalize_notes, note_text};
pub use error::{LoggingError, ResolveError, Result};
pub use events::normalize_event;
pub use index::{SurnameGroup, name_index, surname_index, top_surnames};
pub use person::Person;
pub use privacy::{AgeThresholdPolicy, LivingPolicy, LivingStatus, earliest_child_birth_year};
pub use relationships::{Family, ParentLine, Parents, Pedigree, find_spouse};
pub use resolver::Resolver;
