//! Query functions producing the search and surname indices.
//!
//! These are pure functions over already resolved people; callers decide
//! how to accumulate or serialize the results.

use std::collections::BTreeMap;

use gedcom_model::{NameIndexEntry, SurnameEntry};
use gedcom_transform::{compare_names, surname_slug};
use serde::Serialize;

use crate::person::Person;

/// People sharing one surname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurnameGroup {
    pub surname: String,
    pub slug: String,
    pub entries: Vec<SurnameEntry>,
}

impl SurnameGroup {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Search entries for every disclosed person, sorted by name.
///
/// Redacted living people are left out entirely. The sort is stable, so
/// people with equal names keep their input order.
pub fn name_index<'p, 'a: 'p>(people: impl IntoIterator<Item = &'p Person<'a>>) -> Vec<NameIndexEntry> {
    let mut entries: Vec<NameIndexEntry> = people
        .into_iter()
        .filter_map(Person::name_index_entry)
        .collect();
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    entries
}

/// Disclosed people grouped by surname, groups ordered by surname and each
/// group's entries ordered by name. People without a surname are skipped.
pub fn surname_index<'p, 'a: 'p>(people: impl IntoIterator<Item = &'p Person<'a>>) -> Vec<SurnameGroup> {
    let mut groups: BTreeMap<String, Vec<SurnameEntry>> = BTreeMap::new();
    for person in people {
        let surname = person.name().surname.as_str();
        if surname.is_empty() || !person.disclosure().is_disclosed() {
            continue;
        }
        groups
            .entry(surname.to_string())
            .or_default()
            .push(SurnameEntry {
                id: person.pretty_id().to_string(),
                name: person.display_name().to_string(),
                birth: person.display_birth().map(str::to_string),
                url: person.url().to_string(),
            });
    }

    groups
        .into_iter()
        .map(|(surname, mut entries)| {
            entries.sort_by(|a, b| compare_names(&a.name, &b.name));
            SurnameGroup {
                slug: surname_slug(&surname),
                surname,
                entries,
            }
        })
        .collect()
}

/// The `limit` largest groups, most people first, ties by surname.
pub fn top_surnames(groups: &[SurnameGroup], limit: usize) -> Vec<&SurnameGroup> {
    let mut ranked: Vec<&SurnameGroup> = groups.iter().collect();
    ranked.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.surname.cmp(&b.surname))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(surname: &str, count: usize) -> SurnameGroup {
        SurnameGroup {
            surname: surname.to_string(),
            slug: surname_slug(surname),
            entries: (0..count)
                .map(|i| SurnameEntry {
                    id: format!("I{i}"),
                    name: format!("Person {i}"),
                    birth: None,
                    url: format!("/people/I/I{i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn top_surnames_rank_by_count_then_surname() {
        let groups = vec![group("Adams", 1), group("Brown", 3), group("Clark", 3), group("Dunn", 2)];
        let top: Vec<&str> = top_surnames(&groups, 3)
            .into_iter()
            .map(|g| g.surname.as_str())
            .collect();
        assert_eq!(top, vec!["Brown", "Clark", "Dunn"]);
    }

    #[test]
    fn top_surnames_break_ties_by_surname_regardless_of_input_order() {
        let groups = vec![group("Clark", 3), group("Dunn", 1), group("Brown", 3), group("Adams", 1)];
        let top: Vec<&str> = top_surnames(&groups, 4)
            .into_iter()
            .map(|g| g.surname.as_str())
            .collect();
        assert_eq!(top, vec!["Brown", "Clark", "Adams", "Dunn"]);
    }

    #[test]
    fn top_surnames_limit_larger_than_input() {
        let groups = vec![group("Adams", 1)];
        assert_eq!(top_surnames(&groups, 10).len(), 1);
    }
}
