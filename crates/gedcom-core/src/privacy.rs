//! Living-status inference.
//!
//! Rules are applied in order and the first match decides:
//!
//! 1. Any recorded death: deceased.
//! 2. Born at least `deceased_after_birth_years` ago: deceased.
//! 3. The earliest-born child across every family where the person is a
//!    spouse was born at least `deceased_after_child_birth_years` ago:
//!    deceased.
//! 4. Otherwise living.
//!
//! Rule 3 reads children's birth dates straight from their records. It never
//! builds a [`Person`] for a child or asks for a child's living status, so
//! reciprocal spouse and family references cannot cause recursion.

use gedcom_model::{RawRecord, ResolveOptions, tags};
use gedcom_transform::normalize_date;
use tracing::debug;

use crate::accessor::{RecordTree, find_child, find_records, find_value, follow};
use crate::logging::redact_value;
use crate::person::Person;

/// Decides whether a person is treated as living.
///
/// Implementations are shared by every person a resolver produces and may be
/// called from several workers at once. Inside `is_living`, the person's own
/// [`Person::considered_living`] and [`Person::disclosure`] see them as living.
pub trait LivingPolicy: Send + Sync {
    fn is_living(&self, person: &Person<'_>) -> bool;
}

/// Outcome of [`AgeThresholdPolicy::assess`] with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivingStatus {
    Living,
    DeathRecorded,
    BornLongAgo { birth_year: i32 },
    ChildBornLongAgo { child_birth_year: i32 },
}

impl LivingStatus {
    pub fn is_living(&self) -> bool {
        matches!(self, LivingStatus::Living)
    }
}

/// The default policy: death records plus age thresholds on the person's own
/// birth and their earliest child's birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeThresholdPolicy {
    pub deceased_after_birth_years: i32,
    pub deceased_after_child_birth_years: i32,
}

impl Default for AgeThresholdPolicy {
    fn default() -> Self {
        Self::from_options(&ResolveOptions::default())
    }
}

impl AgeThresholdPolicy {
    pub fn from_options(options: &ResolveOptions) -> Self {
        Self {
            deceased_after_birth_years: options.deceased_after_birth_years,
            deceased_after_child_birth_years: options.deceased_after_child_birth_years,
        }
    }

    /// Apply the rules against the resolver's current year.
    pub fn assess(&self, person: &Person<'_>) -> LivingStatus {
        let current_year = person.resolver().current_year();
        let events = person.events();

        if events.death.is_some() {
            return LivingStatus::DeathRecorded;
        }

        if let Some(birth_year) = person.birth_date().map(|date| date.year())
            && current_year - birth_year >= self.deceased_after_birth_years
        {
            return LivingStatus::BornLongAgo { birth_year };
        }

        if let Some(child_birth_year) =
            earliest_child_birth_year(person.resolver().tree(), person.record())
            && current_year - child_birth_year >= self.deceased_after_child_birth_years
        {
            return LivingStatus::ChildBornLongAgo { child_birth_year };
        }

        LivingStatus::Living
    }
}

impl LivingPolicy for AgeThresholdPolicy {
    fn is_living(&self, person: &Person<'_>) -> bool {
        let status = self.assess(person);
        debug!(
            id = person.id(),
            name = redact_value(&person.name().full),
            ?status,
            "classified living status"
        );
        status.is_living()
    }
}

/// Earliest canonical birth year among the children of every family in which
/// `record` is a spouse. Dangling family and child pointers are skipped.
pub fn earliest_child_birth_year(tree: &RecordTree, record: &RawRecord) -> Option<i32> {
    find_records(record, tags::FAMS)
        .filter_map(|spouse_of| follow(tree, tags::FAM, spouse_of.pointer()))
        .flat_map(|family| find_records(family, tags::CHIL))
        .filter_map(|child| follow(tree, tags::INDI, child.pointer()))
        .filter_map(recorded_birth_year)
        .min()
}

/// Year of the first `BIRT` record's date, when it parses.
fn recorded_birth_year(record: &RawRecord) -> Option<i32> {
    find_child(record, tags::BIRT)
        .and_then(|birth| find_value(birth, tags::DATE))
        .and_then(normalize_date)
        .map(|date| date.year())
}
