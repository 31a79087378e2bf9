//! Resolution context binding a record tree, options and a living-status policy.

use std::fmt;

use chrono::{Datelike, Utc};
use gedcom_model::{RawRecord, ResolveOptions};
use tracing::warn;

use crate::accessor::{RecordTree, find_record};
use crate::error::{ResolveError, Result};
use crate::person::Person;
use crate::privacy::{AgeThresholdPolicy, LivingPolicy};

/// Entry point for turning raw records into people and families.
///
/// A resolver borrows the tree read-only and owns no per-person state, so one
/// resolver may be shared by every worker of a run. `Person` values hold
/// their own caches.
pub struct Resolver<'t> {
    tree: &'t RecordTree,
    options: ResolveOptions,
    policy: Box<dyn LivingPolicy>,
}

impl<'t> Resolver<'t> {
    /// Create a resolver with default options and the age-threshold policy.
    pub fn new(tree: &'t RecordTree) -> Self {
        let options = ResolveOptions::default();
        let policy = Box::new(AgeThresholdPolicy::from_options(&options));
        Self {
            tree,
            options,
            policy,
        }
    }

    /// Replace the options. This also rebuilds the default living-status
    /// policy from them, so call [`Resolver::with_policy`] afterwards.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.policy = Box::new(AgeThresholdPolicy::from_options(&options));
        self.options = options;
        self
    }

    /// Replace the living-status policy.
    pub fn with_policy(mut self, policy: impl LivingPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn tree(&self) -> &'t RecordTree {
        self.tree
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn policy(&self) -> &dyn LivingPolicy {
        self.policy.as_ref()
    }

    /// The year the privacy rules treat as "now".
    pub fn current_year(&self) -> i32 {
        self.options
            .reference_year
            .unwrap_or_else(|| Utc::now().year())
    }

    /// Resolve the individual with xref `id`.
    pub fn person(&self, id: &str) -> Result<Person<'_>> {
        let record = find_record(self.tree, gedcom_model::tags::INDI, id).ok_or_else(|| {
            ResolveError::PersonNotFound { id: id.to_string() }
        })?;
        Person::from_record(self, record)
    }

    /// Resolve an individual from its record.
    pub fn person_from_record<'a>(&'a self, record: &'a RawRecord) -> Result<Person<'a>> {
        Person::from_record(self, record)
    }

    /// Every individual in source order. Records that cannot be addressed
    /// are skipped with a warning.
    pub fn people(&self) -> Vec<Person<'_>> {
        self.tree
            .individuals()
            .filter_map(|record| match Person::from_record(self, record) {
                Ok(person) => Some(person),
                Err(error) => {
                    warn!(%error, "skipping individual");
                    None
                }
            })
            .collect()
    }
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("records", &self.tree.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
