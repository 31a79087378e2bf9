//! Lookup primitives over the raw record tree.
//!
//! Top-level records are indexed by `(tag, xref_id)` when the tree is built,
//! so `find_record` is a hash lookup. Lookups inside a record (`find_records`,
//! `find_value`) scan the record's immediate children in order.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use gedcom_model::{RawRecord, tags};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An immutable, indexed record tree.
///
/// Built once per run and shared read-only by every resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "RawRecord")]
pub struct RecordTree {
    root: RawRecord,
    index: HashMap<(String, String), usize>,
}

impl RecordTree {
    /// Index the top-level records of `root`.
    ///
    /// If two records share a tag and xref id the first one wins and the
    /// duplicate is logged.
    pub fn new(root: RawRecord) -> Self {
        let mut index = HashMap::new();
        for (position, record) in root.children.iter().enumerate() {
            let Some(xref) = record.xref_id() else {
                continue;
            };
            match index.entry((record.tag.clone(), xref.to_string())) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(existing) => {
                    warn!(
                        tag = %record.tag,
                        xref,
                        first = *existing.get(),
                        duplicate = position,
                        "duplicate xref id; keeping first record"
                    );
                }
            }
        }
        Self { root, index }
    }

    pub fn root(&self) -> &RawRecord {
        &self.root
    }

    /// Top-level records in source order.
    pub fn records(&self) -> &[RawRecord] {
        &self.root.children
    }

    /// All top-level `INDI` records in source order.
    pub fn individuals(&self) -> impl Iterator<Item = &RawRecord> {
        find_records(&self.root, tags::INDI)
    }

    pub fn len(&self) -> usize {
        self.root.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

impl From<RawRecord> for RecordTree {
    fn from(root: RawRecord) -> Self {
        Self::new(root)
    }
}

impl From<RecordTree> for RawRecord {
    fn from(tree: RecordTree) -> Self {
        tree.root
    }
}

/// Find the top-level record with `tag` whose xref id is `id`.
pub fn find_record<'t>(tree: &'t RecordTree, tag: &str, id: &str) -> Option<&'t RawRecord> {
    let key = (tag.to_string(), id.to_string());
    tree.index
        .get(&key)
        .and_then(|position| tree.root.children.get(*position))
}

/// Follow an optional pointer to a top-level record.
pub fn follow<'t>(tree: &'t RecordTree, tag: &str, pointer: Option<&str>) -> Option<&'t RawRecord> {
    let pointer = pointer?;
    let found = find_record(tree, tag, pointer);
    if found.is_none() {
        tracing::debug!(tag, pointer, "dangling reference");
    }
    found
}

/// Immediate children of `container` with `tag`, in order.
pub fn find_records<'r>(
    container: &'r RawRecord,
    tag: &'r str,
) -> impl Iterator<Item = &'r RawRecord> + 'r {
    container
        .children
        .iter()
        .filter(move |child| child.tag == tag)
}

/// First immediate child of `container` with `tag`.
pub fn find_child<'r>(container: &'r RawRecord, tag: &str) -> Option<&'r RawRecord> {
    container.children.iter().find(|child| child.tag == tag)
}

/// Value of the first immediate child with `tag`.
pub fn find_value<'r>(container: &'r RawRecord, tag: &str) -> Option<&'r str> {
    find_child(container, tag).and_then(RawRecord::value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RecordTree {
        RecordTree::new(
            RawRecord::default()
                .with_child(RawRecord::new("INDI").with_xref("@I1@").with_value("first"))
                .with_child(RawRecord::new("FAM").with_xref("@I1@"))
                .with_child(RawRecord::new("INDI").with_xref("@I1@").with_value("second"))
                .with_child(RawRecord::new("NOTE").with_value("no xref")),
        )
    }

    #[test]
    fn lookup_is_scoped_by_tag() {
        let tree = tree();
        assert_eq!(find_record(&tree, "INDI", "@I1@").and_then(RawRecord::value), Some("first"));
        assert!(find_record(&tree, "FAM", "@I1@").is_some());
        assert!(find_record(&tree, "SOUR", "@I1@").is_none());
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let tree = tree();
        assert_eq!(tree.index.len(), 2);
        assert_eq!(
            find_record(&tree, "INDI", "@I1@").and_then(RawRecord::value),
            Some("first")
        );
    }

    #[test]
    fn follow_handles_missing_pointer() {
        let tree = tree();
        assert!(follow(&tree, "INDI", None).is_none());
        assert!(follow(&tree, "INDI", Some("@NOPE@")).is_none());
    }
}
