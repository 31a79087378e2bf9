//! Configuration options for record resolution and privacy inference.

use serde::{Deserialize, Serialize};

use crate::tags::{DEFAULT_FAMILY_EVENT_TAGS, DEFAULT_PERSON_EVENT_TAGS};

/// Default years since birth after which a person without a death record
/// is considered deceased.
pub const DEFAULT_DECEASED_AFTER_BIRTH_YEARS: i32 = 120;

/// Default years since the earliest child's birth after which a person is
/// considered deceased.
pub const DEFAULT_DECEASED_AFTER_CHILD_BIRTH_YEARS: i32 = 100;

pub const DEFAULT_NOTEWORTHY_LABEL: &str = "Noteworthy";
pub const DEFAULT_PEOPLE_URL_PREFIX: &str = "/people";

/// Options controlling how records are resolved into people and families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Year treated as "now" by the privacy rules.
    ///
    /// `None` uses the current UTC year. Fixing it makes a run reproducible.
    pub reference_year: Option<i32>,

    pub deceased_after_birth_years: i32,

    pub deceased_after_child_birth_years: i32,

    /// `TITL` of the label record that marks a person as noteworthy.
    /// Compared exactly, case-sensitive.
    pub noteworthy_label: String,

    /// Prefix of person URLs: `<prefix>/<first char>/<pretty id>`.
    pub people_url_prefix: String,

    /// Extra per-person event tags placed between birth and death in a timeline.
    pub person_event_tags: Vec<String>,

    /// Tags resolved as family-level events.
    pub family_event_tags: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            reference_year: None,
            deceased_after_birth_years: DEFAULT_DECEASED_AFTER_BIRTH_YEARS,
            deceased_after_child_birth_years: DEFAULT_DECEASED_AFTER_CHILD_BIRTH_YEARS,
            noteworthy_label: DEFAULT_NOTEWORTHY_LABEL.to_string(),
            people_url_prefix: DEFAULT_PEOPLE_URL_PREFIX.to_string(),
            person_event_tags: DEFAULT_PERSON_EVENT_TAGS
                .iter()
                .map(|tag| (*tag).to_string())
                .collect(),
            family_event_tags: DEFAULT_FAMILY_EVENT_TAGS
                .iter()
                .map(|tag| (*tag).to_string())
                .collect(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn with_deceased_after_birth_years(mut self, years: i32) -> Self {
        self.deceased_after_birth_years = years;
        self
    }

    pub fn with_deceased_after_child_birth_years(mut self, years: i32) -> Self {
        self.deceased_after_child_birth_years = years;
        self
    }

    pub fn with_noteworthy_label(mut self, label: impl Into<String>) -> Self {
        self.noteworthy_label = label.into();
        self
    }

    pub fn with_people_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.people_url_prefix = prefix.into();
        self
    }

    pub fn with_family_event_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.family_event_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_person_event_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.person_event_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_family_event(&self, tag: &str) -> bool {
        self.family_event_tags.iter().any(|t| t == tag)
    }

    pub fn is_person_event(&self, tag: &str) -> bool {
        self.person_event_tags.iter().any(|t| t == tag)
    }
}
