//! Person normalization.
//!
//! A [`Person`] is a read-only projection of one `INDI` record. Identity and
//! name fields are resolved eagerly. Life events, the noteworthy flag and
//! living status are resolved on first access and cached for the lifetime of
//! the instance; the underlying tree never changes during a run.

use std::cell::{Cell, OnceCell};
use std::fmt;

use gedcom_model::{
    CanonicalDate, Disclosure, Event, EventId, LIVING_PERSON_NAME, LifeEvents, NameIndexEntry,
    PersonName, RawRecord, Sex, Xref, tags,
};
use gedcom_transform::{Age, age_at_event, person_url, split_name, strip_surname_markers};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::accessor::{find_child, find_records, find_value, follow};
use crate::citations::normalize_notes;
use crate::error::{ResolveError, Result};
use crate::events::{first_event, normalize_event};
use crate::relationships::{self, Family, Parents, Pedigree};
use crate::resolver::Resolver;

#[derive(Clone)]
pub struct Person<'a> {
    resolver: &'a Resolver<'a>,
    record: &'a RawRecord,
    id: String,
    pretty_id: String,
    url: String,
    sex: Sex,
    name: PersonName,
    events: OnceCell<LifeEvents>,
    noteworthy: OnceCell<bool>,
    considered_living: OnceCell<bool>,
    deciding_living: Cell<bool>,
}

impl<'a> Person<'a> {
    /// Normalize an `INDI` record.
    ///
    /// A record without a `NAME` still normalizes, with empty name parts.
    pub fn from_record(resolver: &'a Resolver<'a>, record: &'a RawRecord) -> Result<Self> {
        if !record.is(tags::INDI) {
            return Err(ResolveError::NotAnIndividual {
                tag: record.tag.clone(),
            });
        }
        let xref = Xref::new(record.xref_id().ok_or(ResolveError::MissingXref)?)?;
        let pretty_id = xref.pretty();
        let url = person_url(&resolver.options().people_url_prefix, &pretty_id);

        Ok(Self {
            resolver,
            record,
            id: xref.into(),
            pretty_id,
            url,
            sex: Sex::from_value(find_value(record, tags::SEX)),
            name: parse_name(record),
            events: OnceCell::new(),
            noteworthy: OnceCell::new(),
            considered_living: OnceCell::new(),
            deciding_living: Cell::new(false),
        })
    }

    /// Raw xref id, e.g. `@I12@`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Xref id without reference delimiters, e.g. `I12`.
    pub fn pretty_id(&self) -> &str {
        &self.pretty_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn resolver(&self) -> &'a Resolver<'a> {
        self.resolver
    }

    pub fn record(&self) -> &'a RawRecord {
        self.record
    }

    /// The underlying record's children, for lookups the model does not cover.
    pub fn raw_children(&self) -> &'a [RawRecord] {
        &self.record.children
    }

    /// First birth, death and burial events.
    ///
    /// Later records of the same type are ignored.
    pub fn events(&self) -> &LifeEvents {
        self.events.get_or_init(|| LifeEvents {
            birth: self.life_event(tags::BIRT),
            death: self.life_event(tags::DEAT),
            burial: self.life_event(tags::BURI),
        })
    }

    fn life_event(&self, tag: &str) -> Option<Event> {
        let (index, record) = first_event(self.record, tag)?;
        normalize_event(self.resolver.tree(), Some(record), EventId::person(index))
    }

    pub fn birth_date(&self) -> Option<CanonicalDate> {
        self.events()
            .birth
            .as_ref()
            .and_then(|birth| birth.canonical_date)
    }

    /// Whether a `LABL` on this person resolves to the configured noteworthy
    /// label. The title comparison is exact and case-sensitive.
    pub fn noteworthy(&self) -> bool {
        *self.noteworthy.get_or_init(|| {
            let tree = self.resolver.tree();
            let wanted = self.resolver.options().noteworthy_label.as_str();
            find_records(self.record, tags::LABL)
                .filter_map(|label| follow(tree, tags::LABL, label.pointer()))
                .any(|label| find_value(label, tags::TITL) == Some(wanted))
        })
    }

    /// Living status from the resolver's policy, evaluated once per instance.
    ///
    /// While the policy is deciding, asking this person again answers
    /// `true` without caching.
    pub fn considered_living(&self) -> bool {
        if let Some(living) = self.considered_living.get() {
            return *living;
        }
        if self.deciding_living.replace(true) {
            return true;
        }
        let living = self.resolver.policy().is_living(self);
        self.deciding_living.set(false);
        *self.considered_living.get_or_init(|| living)
    }

    pub fn disclosure(&self) -> Disclosure {
        Disclosure::classify(self.considered_living(), self.noteworthy())
    }

    /// Full name, or [`LIVING_PERSON_NAME`] when redacted.
    pub fn display_name(&self) -> &str {
        match self.disclosure() {
            Disclosure::Redacted => LIVING_PERSON_NAME,
            Disclosure::Public | Disclosure::NoteworthyLiving => self.name.full.as_str(),
        }
    }

    /// Raw birth date text when the person may be disclosed and has one.
    pub fn display_birth(&self) -> Option<&str> {
        if !self.disclosure().is_disclosed() {
            return None;
        }
        self.events()
            .birth
            .as_ref()
            .filter(|birth| birth.has_date())
            .map(|birth| birth.date.as_str())
    }

    /// Birth, configured person events in record order, death, then burial.
    pub fn timeline(&self) -> Vec<Event> {
        let tree = self.resolver.tree();
        let options = self.resolver.options();
        let life = self.events();

        let mut timeline: Vec<Event> = life.birth.iter().cloned().collect();
        timeline.extend(
            self.record
                .children
                .iter()
                .enumerate()
                .filter(|(_, child)| options.is_person_event(&child.tag))
                .filter_map(|(index, child)| {
                    normalize_event(tree, Some(child), EventId::person(index))
                }),
        );
        timeline.extend(life.death.iter().cloned());
        timeline.extend(life.burial.iter().cloned());
        timeline
    }

    /// The person's own notes; unresolvable references are dropped.
    pub fn notes(&self) -> Vec<String> {
        normalize_notes(
            self.resolver.tree(),
            find_records(self.record, tags::NOTE),
        )
    }

    /// Families in which this person is a spouse, in source order.
    pub fn families(&self) -> Vec<Family<'a>> {
        relationships::families(self)
    }

    /// Mother and father from the first family of origin.
    pub fn parents(&self) -> Parents<'a> {
        relationships::parents(self)
    }

    /// Parents and grandparents.
    pub fn pedigree(&self) -> Pedigree<'a> {
        relationships::pedigree(self)
    }

    /// Age at an event; `None` without a birth date or a parseable event date.
    pub fn age_at(&self, event: &Event) -> Option<Age> {
        age_at_event(self.birth_date(), &event.date)
    }

    /// `Son`, `Daughter` or `Child`.
    pub fn child_role(&self) -> &'static str {
        self.sex.child_role()
    }

    /// Search entry, present only for disclosed persons.
    pub fn name_index_entry(&self) -> Option<NameIndexEntry> {
        if !self.disclosure().is_disclosed() {
            return None;
        }
        Some(NameIndexEntry {
            name: self.display_name().to_string(),
            birth: self.display_birth().map(str::to_string),
            url: self.url.clone(),
        })
    }
}

fn parse_name(record: &RawRecord) -> PersonName {
    let Some(name) = find_child(record, tags::NAME) else {
        return PersonName::default();
    };
    let raw = name.value().unwrap_or_default();
    let (split_given, split_surname) = split_name(raw);

    let given = find_value(name, tags::GIVN)
        .map(|value| value.trim().to_string())
        .unwrap_or(split_given);
    let surname = find_value(name, tags::SURN)
        .map(|value| value.trim().to_string())
        .unwrap_or(split_surname);

    let mut full = strip_surname_markers(raw);
    if full.is_empty() {
        full = [given.as_str(), surname.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
    }

    PersonName {
        given,
        surname,
        full,
    }
}

impl fmt::Debug for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("id", &self.id)
            .field("sex", &self.sex)
            .field("name", &self.name)
            .field("events", &self.events.get())
            .field("noteworthy", &self.noteworthy.get())
            .field("considered_living", &self.considered_living.get())
            .finish_non_exhaustive()
    }
}

/// Serializes the resolved fields, forcing every lazy field.
impl Serialize for Person<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Person", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("prettyId", &self.pretty_id)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("sex", &self.sex)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("events", self.events())?;
        state.serialize_field("noteworthy", &self.noteworthy())?;
        state.serialize_field("consideredLiving", &self.considered_living())?;
        state.end()
    }
}
