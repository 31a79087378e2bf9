//! Tests for gedcom-model types.

use gedcom_model::{
    CanonicalDate, Disclosure, EventKind, RawRecord, ResolveOptions, Sex, Xref, tags,
};

#[test]
fn raw_record_deserializes_parser_shape() {
    let json = r#"{
        "type": "INDI",
        "data": { "xref_id": "@I1@" },
        "children": [
            { "type": "NAME", "data": { "value": "John /Smith/" }, "children": [] },
            { "type": "FAMS", "data": { "pointer": "@F1@" } }
        ]
    }"#;
    let record: RawRecord = serde_json::from_str(json).expect("parse record");

    assert!(record.is(tags::INDI));
    assert_eq!(record.xref_id(), Some("@I1@"));
    assert_eq!(record.children.len(), 2);
    assert_eq!(record.children[0].value(), Some("John /Smith/"));
    assert_eq!(record.children[1].pointer(), Some("@F1@"));
    assert!(record.children[1].children.is_empty());
}

#[test]
fn raw_record_tolerates_missing_data() {
    let record: RawRecord = serde_json::from_str(r#"{ "type": "HEAD" }"#).expect("parse record");
    assert_eq!(record.xref_id(), None);
    assert_eq!(record.value(), None);
}

#[test]
fn canonical_date_serializes_as_key() {
    let date = CanonicalDate::new(1675, 11, 0).expect("date");
    let json = serde_json::to_string(&date).expect("serialize");
    assert_eq!(json, "\"16751100\"");

    let back: CanonicalDate = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, date);
    assert!(serde_json::from_str::<CanonicalDate>("\"1675110\"").is_err());
}

#[test]
fn canonical_dates_order_chronologically() {
    let year_only: CanonicalDate = "19400000".parse().unwrap();
    let month: CanonicalDate = "19401100".parse().unwrap();
    let full: CanonicalDate = "19401114".parse().unwrap();
    let later: CanonicalDate = "19410101".parse().unwrap();

    assert!(year_only < month);
    assert!(month < full);
    assert!(full < later);
}

#[test]
fn event_kind_labels_and_unknown_tags() {
    assert_eq!(EventKind::from_tag("BIRT").label(), "Birth");
    assert_eq!(EventKind::from_tag("RESI").label(), "Residence");
    let custom = EventKind::from_tag("_MILT");
    assert_eq!(custom, EventKind::Other("_MILT".to_string()));
    assert_eq!(custom.label(), "_MILT");
    assert_eq!(serde_json::to_string(&EventKind::Marriage).unwrap(), "\"MARR\"");
}

#[test]
fn sex_parses_case_insensitively() {
    assert_eq!(Sex::from_value(Some("m")), Sex::Male);
    assert_eq!(Sex::from_value(Some("F")), Sex::Female);
    assert_eq!(Sex::from_value(Some("X")), Sex::Unknown);
    assert_eq!(Sex::from_value(None), Sex::Unknown);
    assert_eq!(Sex::Female.child_role(), "Daughter");
}

#[test]
fn disclosure_keeps_noteworthy_orthogonal() {
    assert_eq!(Disclosure::classify(false, false), Disclosure::Public);
    assert_eq!(Disclosure::classify(false, true), Disclosure::Public);
    assert_eq!(Disclosure::classify(true, true), Disclosure::NoteworthyLiving);
    assert_eq!(Disclosure::classify(true, false), Disclosure::Redacted);
    assert!(Disclosure::NoteworthyLiving.needs_banner());
    assert!(!Disclosure::Redacted.is_disclosed());
}

#[test]
fn xref_pretty_strips_delimiters() {
    let xref = Xref::new("@I12@").expect("xref");
    assert_eq!(xref.pretty(), "I12");
    assert!(Xref::new("  ").is_err());
}

#[test]
fn options_round_trip_with_defaults() {
    let options: ResolveOptions =
        serde_json::from_str(r#"{ "reference_year": 2024 }"#).expect("options");
    assert_eq!(options.reference_year, Some(2024));
    assert_eq!(options.deceased_after_birth_years, 120);
    assert_eq!(options.noteworthy_label, "Noteworthy");
    assert!(options.is_family_event("MARR"));
    assert!(options.is_person_event("OCCU"));
}
