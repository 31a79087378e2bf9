//! Text utilities for names, identifiers and URLs.

use std::cmp::Ordering;

/// Remove the `/surname/` markers from a raw `NAME` value.
///
/// Whitespace runs are collapsed and the result is trimmed.
///
/// # Examples
///
/// ```
/// use gedcom_transform::data_utils::strip_surname_markers;
///
/// assert_eq!(strip_surname_markers("John /Smith/"), "John Smith");
/// assert_eq!(strip_surname_markers("/Smith/"), "Smith");
/// assert_eq!(strip_surname_markers("John /Smith/ Jr."), "John Smith Jr.");
/// ```
pub fn strip_surname_markers(value: &str) -> String {
    let without = value.replace('/', " ");
    without.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a raw `NAME` value into `(given, surname)` using the slash convention.
///
/// Text before the first `/` is the given name; text between the first and
/// second `/` is the surname. Without slashes the whole value is the given
/// name.
///
/// # Examples
///
/// ```
/// use gedcom_transform::data_utils::split_name;
///
/// assert_eq!(split_name("John Paul /Smith/"), ("John Paul".to_string(), "Smith".to_string()));
/// assert_eq!(split_name("Madonna"), ("Madonna".to_string(), String::new()));
/// ```
pub fn split_name(value: &str) -> (String, String) {
    match value.split_once('/') {
        Some((given, rest)) => {
            let surname = rest.split('/').next().unwrap_or("");
            (collapse(given), collapse(surname))
        }
        None => (collapse(value), String::new()),
    }
}

/// Public URL for a person: `<prefix>/<first char of id>/<id>`.
///
/// # Examples
///
/// ```
/// use gedcom_transform::data_utils::person_url;
///
/// assert_eq!(person_url("/people", "I12"), "/people/I/I12");
/// ```
pub fn person_url(prefix: &str, pretty_id: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let shard: String = pretty_id.chars().take(1).collect();
    format!("{prefix}/{shard}/{pretty_id}")
}

/// URL slug for a surname: lowercase with whitespace runs replaced by `-`.
pub fn surname_slug(surname: &str) -> String {
    surname
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Ordering for display names: case-insensitive first, then exact text.
///
/// Used with stable sorts so equal keys keep their source order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn collapse(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
