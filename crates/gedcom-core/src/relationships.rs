//! Family membership resolution.
//!
//! A [`Family`] is always seen from one person: only the other spouse is
//! materialized. Parents come from the first family of origin, scanning
//! `WIFE`/`HUSB` without excluding anyone.

use gedcom_model::{Event, EventId, RawRecord, UNKNOWN_PERSON_NAME, tags};
use tracing::debug;

use crate::accessor::{find_records, follow};
use crate::events::normalize_event;
use crate::person::Person;
use crate::resolver::Resolver;

/// A family-as-spouse, relative to one person.
#[derive(Debug, Clone)]
pub struct Family<'a> {
    /// Raw xref id of the `FAM` record.
    pub xref: String,
    /// Position of the family among the person's `FAMS` references.
    pub index: usize,
    pub spouse: Option<Person<'a>>,
    pub children: Vec<Person<'a>>,
    pub events: Vec<Event>,
}

impl Family<'_> {
    /// Spouse's display name, or `Unknown Person` when none is recorded.
    pub fn spouse_display_name(&self) -> &str {
        self.spouse
            .as_ref()
            .map_or(UNKNOWN_PERSON_NAME, Person::display_name)
    }
}

/// Mother and father from a family of origin.
#[derive(Debug, Clone, Default)]
pub struct Parents<'a> {
    pub mother: Option<Person<'a>>,
    pub father: Option<Person<'a>>,
}

impl Parents<'_> {
    pub fn is_empty(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// One parent and that parent's own parents.
#[derive(Debug, Clone)]
pub struct ParentLine<'a> {
    pub parent: Person<'a>,
    pub grandparents: Parents<'a>,
}

/// Two generations of ancestors, mother's line first.
#[derive(Debug, Clone, Default)]
pub struct Pedigree<'a> {
    pub mother: Option<ParentLine<'a>>,
    pub father: Option<ParentLine<'a>>,
}

/// Resolve every `FAMS` reference of `person`, in source order.
///
/// Dangling family pointers are skipped but still consume an index, so event
/// ids stay tied to the reference position.
pub fn families<'a>(person: &Person<'a>) -> Vec<Family<'a>> {
    let resolver = person.resolver();
    let tree = resolver.tree();

    find_records(person.record(), tags::FAMS)
        .enumerate()
        .filter_map(|(index, spouse_of)| {
            follow(tree, tags::FAM, spouse_of.pointer()).map(|family| (index, family))
        })
        .map(|(index, family)| resolve_family(resolver, person.id(), index, family))
        .collect()
}

fn resolve_family<'a>(
    resolver: &'a Resolver<'a>,
    person_id: &str,
    index: usize,
    family: &'a RawRecord,
) -> Family<'a> {
    let tree = resolver.tree();
    let options = resolver.options();

    let spouse = find_spouse(family, person_id).and_then(|pointer| person_at(resolver, pointer));

    let children = find_records(family, tags::CHIL)
        .filter_map(RawRecord::pointer)
        .filter_map(|pointer| person_at(resolver, pointer))
        .collect();

    let events = family
        .children
        .iter()
        .filter(|child| options.is_family_event(&child.tag))
        .enumerate()
        .filter_map(|(event_index, event)| {
            normalize_event(tree, Some(event), EventId::family(index, event_index))
        })
        .collect();

    Family {
        xref: family.xref_id().unwrap_or_default().to_string(),
        index,
        spouse,
        children,
        events,
    }
}

/// Pointer of the first `WIFE`/`HUSB` entry that is not `person_id`.
pub fn find_spouse<'r>(family: &'r RawRecord, person_id: &str) -> Option<&'r str> {
    family
        .children
        .iter()
        .filter(|child| child.is(tags::WIFE) || child.is(tags::HUSB))
        .filter_map(RawRecord::pointer)
        .find(|pointer| *pointer != person_id)
}

/// Mother and father from the person's first `FAMC`.
pub fn parents<'a>(person: &Person<'a>) -> Parents<'a> {
    let resolver = person.resolver();
    let Some(family) = find_records(person.record(), tags::FAMC)
        .next()
        .and_then(|child_of| follow(resolver.tree(), tags::FAM, child_of.pointer()))
    else {
        return Parents::default();
    };

    let parent = |tag: &str| {
        find_records(family, tag)
            .find_map(RawRecord::pointer)
            .and_then(|pointer| person_at(resolver, pointer))
    };

    Parents {
        mother: parent(tags::WIFE),
        father: parent(tags::HUSB),
    }
}

/// Parents with their own parents.
pub fn pedigree<'a>(person: &Person<'a>) -> Pedigree<'a> {
    let Parents { mother, father } = parents(person);
    let line = |parent: Person<'a>| ParentLine {
        grandparents: parents(&parent),
        parent,
    };
    Pedigree {
        mother: mother.map(line),
        father: father.map(line),
    }
}

fn person_at<'a>(resolver: &'a Resolver<'a>, pointer: &str) -> Option<Person<'a>> {
    let record = follow(resolver.tree(), tags::INDI, Some(pointer))?;
    match Person::from_record(resolver, record) {
        Ok(person) => Some(person),
        Err(error) => {
            debug!(pointer, %error, "unresolvable person reference");
            None
        }
    }
}
