use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CanonicalDate, EventId};

/// Kind of a life or family event, keyed by its GEDCOM tag.
///
/// Tags without a dedicated variant are preserved in [`EventKind::Other`] so
/// that new event types flow through resolution untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Birth,
    Death,
    Burial,
    Education,
    Occupation,
    Residence,
    Marriage,
    MarriageBann,
    MarriageContract,
    MarriageLicense,
    MarriageSettlement,
    Engagement,
    Divorce,
    DivorceFiled,
    Annulment,
    Other(String),
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BIRT" => EventKind::Birth,
            "DEAT" => EventKind::Death,
            "BURI" => EventKind::Burial,
            "EDUC" => EventKind::Education,
            "OCCU" => EventKind::Occupation,
            "RESI" => EventKind::Residence,
            "MARR" => EventKind::Marriage,
            "MARB" => EventKind::MarriageBann,
            "MARC" => EventKind::MarriageContract,
            "MARL" => EventKind::MarriageLicense,
            "MARS" => EventKind::MarriageSettlement,
            "ENGA" => EventKind::Engagement,
            "DIV" => EventKind::Divorce,
            "DIVF" => EventKind::DivorceFiled,
            "ANUL" => EventKind::Annulment,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            EventKind::Birth => "BIRT",
            EventKind::Death => "DEAT",
            EventKind::Burial => "BURI",
            EventKind::Education => "EDUC",
            EventKind::Occupation => "OCCU",
            EventKind::Residence => "RESI",
            EventKind::Marriage => "MARR",
            EventKind::MarriageBann => "MARB",
            EventKind::MarriageContract => "MARC",
            EventKind::MarriageLicense => "MARL",
            EventKind::MarriageSettlement => "MARS",
            EventKind::Engagement => "ENGA",
            EventKind::Divorce => "DIV",
            EventKind::DivorceFiled => "DIVF",
            EventKind::Annulment => "ANUL",
            EventKind::Other(tag) => tag,
        }
    }

    /// Human-readable label; unknown tags fall back to the tag itself.
    pub fn label(&self) -> &str {
        match self {
            EventKind::Birth => "Birth",
            EventKind::Death => "Death",
            EventKind::Burial => "Burial",
            EventKind::Education => "Education",
            EventKind::Occupation => "Occupation",
            EventKind::Residence => "Residence",
            EventKind::Marriage => "Marriage",
            EventKind::MarriageBann => "Marriage Bann",
            EventKind::MarriageContract => "Marriage Contract",
            EventKind::MarriageLicense => "Marriage License",
            EventKind::MarriageSettlement => "Marriage Settlement",
            EventKind::Engagement => "Engagement",
            EventKind::Divorce => "Divorce",
            EventKind::DivorceFiled => "Divorce Filed",
            EventKind::Annulment => "Annulment",
            EventKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        EventKind::from_tag(&value)
    }
}

impl From<EventKind> for String {
    fn from(value: EventKind) -> Self {
        value.tag().to_string()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved source citation attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source pointer with reference delimiters stripped.
    pub id: String,
    /// Source title (`TITL`), else periodical (`PERI`), else empty.
    pub name: String,
    pub page: Option<String>,
    pub notes: Vec<String>,
}

/// A normalized event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Raw date text; empty when the record has no `DATE`.
    pub date: String,
    /// `None` both when no date is present and when it could not be parsed.
    pub canonical_date: Option<CanonicalDate>,
    pub place: String,
    pub citations: Vec<Citation>,
}

impl Event {
    pub fn has_date(&self) -> bool {
        !self.date.trim().is_empty()
    }

    pub fn year(&self) -> Option<i32> {
        self.canonical_date.map(|date| date.year())
    }

    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}
