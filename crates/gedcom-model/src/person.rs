use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Event;

/// Name shown in place of a redacted living person.
pub const LIVING_PERSON_NAME: &str = "Living Person";

/// Name shown when a family has no recorded spouse.
pub const UNKNOWN_PERSON_NAME: &str = "Unknown Person";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U")]
    Unknown,
}

impl Sex {
    /// Parses a `SEX` value case-insensitively; anything but M/F is unknown.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("M") => Sex::Male,
            Some("F") => Sex::Female,
            _ => Sex::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unknown => "U",
        }
    }

    /// Role noun for a "<role> of <parents>" line.
    pub fn child_role(&self) -> &'static str {
        match self {
            Sex::Male => "Son",
            Sex::Female => "Daughter",
            Sex::Unknown => "Child",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name parts; missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub given: String,
    pub surname: String,
    pub full: String,
}

impl PersonName {
    pub fn is_empty(&self) -> bool {
        self.given.is_empty() && self.surname.is_empty() && self.full.is_empty()
    }
}

/// First-occurrence core life events of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvents {
    pub birth: Option<Event>,
    pub death: Option<Event>,
    pub burial: Option<Event>,
}

/// How a person's identity may be shown.
///
/// Noteworthiness only affects display; it never changes whether the person
/// is considered living.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disclosure {
    /// Not considered living: shown in full.
    Public,
    /// Living but curated as noteworthy: shown in full with a disclosure banner.
    NoteworthyLiving,
    /// Living: name replaced by [`LIVING_PERSON_NAME`] and details withheld.
    Redacted,
}

impl Disclosure {
    pub fn classify(considered_living: bool, noteworthy: bool) -> Self {
        match (considered_living, noteworthy) {
            (false, _) => Disclosure::Public,
            (true, true) => Disclosure::NoteworthyLiving,
            (true, false) => Disclosure::Redacted,
        }
    }

    pub fn is_disclosed(&self) -> bool {
        !matches!(self, Disclosure::Redacted)
    }

    pub fn needs_banner(&self) -> bool {
        matches!(self, Disclosure::NoteworthyLiving)
    }
}

/// Flat search entry for one disclosed person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameIndexEntry {
    pub name: String,
    pub birth: Option<String>,
    pub url: String,
}

/// Entry in a per-surname listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurnameEntry {
    pub id: String,
    pub name: String,
    pub birth: Option<String>,
    pub url: String,
}
