//! Tests for name, identifier and URL utilities.

use std::cmp::Ordering;

use gedcom_transform::{compare_names, person_url, split_name, strip_surname_markers, surname_slug};

#[test]
fn strip_surname_markers_removes_slashes() {
    assert_eq!(strip_surname_markers("Mary Ann /O'Brien/"), "Mary Ann O'Brien");
    assert_eq!(strip_surname_markers("  Solo  "), "Solo");
    assert_eq!(strip_surname_markers(""), "");
}

#[test]
fn split_name_uses_slash_convention() {
    assert_eq!(
        split_name("John /Smith/"),
        ("John".to_string(), "Smith".to_string())
    );
    assert_eq!(split_name("/Smith/"), (String::new(), "Smith".to_string()));
    assert_eq!(
        split_name("John /Smith"),
        ("John".to_string(), "Smith".to_string())
    );
}

#[test]
fn person_url_shards_by_first_character() {
    assert_eq!(person_url("/people", "I1"), "/people/I/I1");
    assert_eq!(person_url("/people/", "P42"), "/people/P/P42");
}

#[test]
fn surname_slug_lowercases_and_hyphenates() {
    assert_eq!(surname_slug("Van Der  Berg"), "van-der-berg");
    assert_eq!(surname_slug("Wilson"), "wilson");
}

#[test]
fn compare_names_is_case_insensitive_first() {
    assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
    assert_eq!(compare_names("Bob", "alice"), Ordering::Greater);
    assert_eq!(compare_names("Ann", "Ann"), Ordering::Equal);
    assert_ne!(compare_names("ann", "Ann"), Ordering::Equal);
}
