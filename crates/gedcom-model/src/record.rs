//! Raw record nodes as produced by the upstream GEDCOM parser.
//!
//! The parser emits a strict hierarchy of `{type, data, children}` nodes.
//! Cross-references between records are plain `pointer` strings that match
//! another record's `xref_id`; cycles only appear once pointers are followed.

use serde::{Deserialize, Serialize};

/// Scalar payload of a record node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One node of the raw record tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub tag: String,
    #[serde(default)]
    pub data: RecordData,
    #[serde(default)]
    pub children: Vec<RawRecord>,
}

impl RawRecord {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_xref(mut self, xref_id: impl Into<String>) -> Self {
        self.data.xref_id = Some(xref_id.into());
        self
    }

    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.data.pointer = Some(pointer.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.data.value = Some(value.into());
        self
    }

    pub fn with_child(mut self, child: RawRecord) -> Self {
        self.children.push(child);
        self
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    pub fn xref_id(&self) -> Option<&str> {
        self.data.xref_id.as_deref()
    }

    pub fn pointer(&self) -> Option<&str> {
        self.data.pointer.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.data.value.as_deref()
    }
}
