//! Programmatic construction of record trees.
//!
//! Produces the same node shape the upstream parser emits, so trees built
//! here resolve exactly like parsed ones.
//!
//! ```
//! use gedcom_model::builder::{FamilyBuilder, IndividualBuilder, TreeBuilder};
//!
//! let root = TreeBuilder::new()
//!     .individual(
//!         IndividualBuilder::new("@I1@")
//!             .name("Ada /Byron/")
//!             .event("BIRT", Some("10 DEC 1815"))
//!             .spouse_of("@F1@"),
//!     )
//!     .family(FamilyBuilder::new("@F1@").wife("@I1@"))
//!     .build();
//!
//! assert_eq!(root.children.len(), 2);
//! ```

use crate::RawRecord;
use crate::tags;

#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    root: RawRecord,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn individual(mut self, individual: IndividualBuilder) -> Self {
        self.root.children.push(individual.build());
        self
    }

    pub fn family(mut self, family: FamilyBuilder) -> Self {
        self.root.children.push(family.build());
        self
    }

    /// Adds a `SOUR` record with a title.
    pub fn source(mut self, xref: &str, title: &str) -> Self {
        self.root.children.push(
            RawRecord::new(tags::SOUR)
                .with_xref(xref)
                .with_child(RawRecord::new(tags::TITL).with_value(title)),
        );
        self
    }

    /// Adds a `NOTE` record holding `text`.
    pub fn note(mut self, xref: &str, text: &str) -> Self {
        self.root
            .children
            .push(RawRecord::new(tags::NOTE).with_xref(xref).with_value(text));
        self
    }

    /// Adds a `LABL` record with a title.
    pub fn label(mut self, xref: &str, title: &str) -> Self {
        self.root.children.push(
            RawRecord::new(tags::LABL)
                .with_xref(xref)
                .with_child(RawRecord::new(tags::TITL).with_value(title)),
        );
        self
    }

    pub fn record(mut self, record: RawRecord) -> Self {
        self.root.children.push(record);
        self
    }

    pub fn build(self) -> RawRecord {
        self.root
    }
}

#[derive(Debug, Clone)]
pub struct IndividualBuilder {
    record: RawRecord,
}

impl IndividualBuilder {
    pub fn new(xref: &str) -> Self {
        Self {
            record: RawRecord::new(tags::INDI).with_xref(xref),
        }
    }

    /// Adds a `NAME` using the `Given /Surname/` convention.
    pub fn name(mut self, value: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::NAME).with_value(value));
        self
    }

    /// Adds a `NAME` with explicit `GIVN`/`SURN` parts.
    pub fn structured_name(mut self, given: &str, surname: &str) -> Self {
        self.record.children.push(
            RawRecord::new(tags::NAME)
                .with_value(format!("{given} /{surname}/"))
                .with_child(RawRecord::new(tags::GIVN).with_value(given))
                .with_child(RawRecord::new(tags::SURN).with_value(surname)),
        );
        self
    }

    pub fn sex(mut self, value: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::SEX).with_value(value));
        self
    }

    /// Adds an event record with an optional `DATE`.
    pub fn event(mut self, tag: &str, date: Option<&str>) -> Self {
        let mut event = RawRecord::new(tag);
        if let Some(date) = date {
            event = event.with_child(RawRecord::new(tags::DATE).with_value(date));
        }
        self.record.children.push(event);
        self
    }

    pub fn spouse_of(mut self, family: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::FAMS).with_pointer(family));
        self
    }

    pub fn child_of(mut self, family: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::FAMC).with_pointer(family));
        self
    }

    pub fn labelled(mut self, label: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::LABL).with_pointer(label));
        self
    }

    pub fn note_ref(mut self, note: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::NOTE).with_pointer(note));
        self
    }

    pub fn child(mut self, record: RawRecord) -> Self {
        self.record.children.push(record);
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}

#[derive(Debug, Clone)]
pub struct FamilyBuilder {
    record: RawRecord,
}

impl FamilyBuilder {
    pub fn new(xref: &str) -> Self {
        Self {
            record: RawRecord::new(tags::FAM).with_xref(xref),
        }
    }

    pub fn husband(mut self, person: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::HUSB).with_pointer(person));
        self
    }

    pub fn wife(mut self, person: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::WIFE).with_pointer(person));
        self
    }

    pub fn child(mut self, person: &str) -> Self {
        self.record
            .children
            .push(RawRecord::new(tags::CHIL).with_pointer(person));
        self
    }

    pub fn event(mut self, tag: &str, date: Option<&str>) -> Self {
        let mut event = RawRecord::new(tag);
        if let Some(date) = date {
            event = event.with_child(RawRecord::new(tags::DATE).with_value(date));
        }
        self.record.children.push(event);
        self
    }

    pub fn record(mut self, record: RawRecord) -> Self {
        self.record.children.push(record);
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}
