//! Citation and note resolution.

use gedcom_model::{Citation, RawRecord, strip_delimiters, tags};

use crate::accessor::{RecordTree, find_records, find_value, follow};

/// Resolve `SOUR` citation records into citations, in order.
///
/// The source name is the source record's `TITL`, else its `PERI`, else the
/// citation's own inline text, else empty. A dangling source pointer still
/// yields a citation so the page and notes are not lost.
pub fn normalize_citations<'t, I>(tree: &RecordTree, citations: I) -> Vec<Citation>
where
    I: IntoIterator<Item = &'t RawRecord>,
{
    citations
        .into_iter()
        .map(|citation| {
            let source = follow(tree, tags::SOUR, citation.pointer());
            let name = source
                .and_then(|source| {
                    find_value(source, tags::TITL).or_else(|| find_value(source, tags::PERI))
                })
                .or_else(|| citation.value())
                .unwrap_or_default()
                .to_string();

            Citation {
                id: citation.pointer().map(strip_delimiters).unwrap_or_default(),
                name,
                page: find_value(citation, tags::PAGE).map(str::to_string),
                notes: normalize_notes(tree, find_records(citation, tags::NOTE)),
            }
        })
        .collect()
}

/// Resolve `NOTE` references into note text.
///
/// Pointer notes are looked up in the tree; inline notes use their own text.
/// Unresolvable or empty notes are dropped.
pub fn normalize_notes<'t, I>(tree: &RecordTree, notes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'t RawRecord>,
{
    notes
        .into_iter()
        .filter_map(|note| match note.pointer() {
            Some(_) => follow(tree, tags::NOTE, note.pointer()).map(note_text),
            None => Some(note_text(note)),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

/// Text of a note record including `CONT` (new line) and `CONC` (joined) continuations.
pub fn note_text(note: &RawRecord) -> String {
    let mut text = note.value().unwrap_or_default().to_string();
    for child in &note.children {
        match child.tag.as_str() {
            "CONT" => {
                text.push('\n');
                text.push_str(child.value().unwrap_or_default());
            }
            "CONC" => text.push_str(child.value().unwrap_or_default()),
            _ => {}
        }
    }
    text
}
