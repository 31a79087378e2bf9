//! Event normalization.

use gedcom_model::{Event, EventId, EventKind, RawRecord, tags};
use gedcom_transform::normalize_date;

use crate::accessor::{RecordTree, find_records, find_value};
use crate::citations::normalize_citations;

/// Normalize an event record under a caller-assigned id.
///
/// The id is supplied by the caller so that ids stay unique across a
/// person's own events and their family events. Passing `None` for the
/// record yields `None`, which lets optional events be normalized uniformly.
pub fn normalize_event(tree: &RecordTree, event: Option<&RawRecord>, id: EventId) -> Option<Event> {
    let event = event?;
    let date = find_value(event, tags::DATE).unwrap_or_default();

    Some(Event {
        id,
        kind: EventKind::from_tag(&event.tag),
        date: date.to_string(),
        canonical_date: normalize_date(date),
        place: event_place(event),
        citations: normalize_citations(tree, find_records(event, tags::SOUR)),
    })
}

/// The event's own value and its `PLAC`, comma-joined, skipping empty parts.
fn event_place(event: &RawRecord) -> String {
    [event.value(), find_value(event, tags::PLAC)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Index and record of the first child of `container` with `tag`.
pub(crate) fn first_event<'r>(container: &'r RawRecord, tag: &str) -> Option<(usize, &'r RawRecord)> {
    container
        .children
        .iter()
        .enumerate()
        .find(|(_, child)| child.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_skips_absent_parts() {
        let with_both = RawRecord::new("RESI")
            .with_value("Farm")
            .with_child(RawRecord::new("PLAC").with_value("Ohio, USA"));
        assert_eq!(event_place(&with_both), "Farm, Ohio, USA");

        let place_only =
            RawRecord::new("BIRT").with_child(RawRecord::new("PLAC").with_value("Leeds"));
        assert_eq!(event_place(&place_only), "Leeds");
        assert_eq!(event_place(&RawRecord::new("BIRT")), "");
    }
}
