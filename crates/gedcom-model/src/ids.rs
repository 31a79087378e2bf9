#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// A record cross-reference id such as `@I12@`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Xref(String);

impl Xref {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidXref(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id with the `@` reference delimiters removed (`@I12@` -> `I12`).
    pub fn pretty(&self) -> String {
        strip_delimiters(&self.0)
    }
}

impl TryFrom<String> for Xref {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Xref> for String {
    fn from(value: Xref) -> Self {
        value.0
    }
}

impl fmt::Display for Xref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Removes every `@` reference delimiter from a pointer or xref id.
pub fn strip_delimiters(value: &str) -> String {
    value.replace('@', "")
}

/// Stable identifier for a normalized event.
///
/// Event ids link narrative text to a sources appendix, so they must be
/// unique within the person or family that owns the event. An empty id is
/// unrepresentable: the only fallible constructor is [`EventId::new`].
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::EmptyEventId);
        }
        Ok(Self(value))
    }

    /// Id for a person-level event at `raw_index` among the person's record children.
    pub fn person(raw_index: usize) -> Self {
        Self(format!("event-{raw_index}"))
    }

    /// Id for the `event_index`-th event of the person's `family_index`-th family.
    pub fn family(family_index: usize, event_index: usize) -> Self {
        Self(format!("family-{family_index}-event-{event_index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventId> for String {
    fn from(value: EventId) -> Self {
        value.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
