//! Tests for free-text date normalization.

use gedcom_transform::normalization::{DatePrecision, DateQualifier, normalize_date, parse_date};

fn key(value: &str) -> Option<String> {
    normalize_date(value).map(|date| date.to_string())
}

#[test]
fn strips_before_after_about() {
    assert_eq!(key("abt 1930").as_deref(), Some("19300000"));
    assert_eq!(key("aft 1863").as_deref(), Some("18630000"));
    assert_eq!(key("BEF 2012").as_deref(), Some("20120000"));
    assert_eq!(key("before 1 JUL 1733").as_deref(), Some("17330701"));
    assert_eq!(key("About Jan 1940").as_deref(), Some("19400100"));
}

#[test]
fn standard_day_month_year() {
    for (input, expected) in [
        ("14 Nov 1940", "19401114"),
        ("1 JUL 1733", "17330701"),
        ("30 apr 1329", "13290430"),
    ] {
        assert_eq!(key(input).as_deref(), Some(expected), "{input}");
    }
}

#[test]
fn month_and_year_only() {
    for (input, expected) in [
        ("Jan 1940", "19400100"),
        ("JUL 2022", "20220700"),
        ("apr 1654", "16540400"),
        ("September 1801", "18010900"),
        ("MAY 1900", "19000500"),
    ] {
        assert_eq!(key(input).as_deref(), Some(expected), "{input}");
    }
}

#[test]
fn between_uses_the_first_date() {
    assert_eq!(
        key("bet 14 nov 1940 and 20 jun 1941").as_deref(),
        Some("19401114")
    );
    assert_eq!(
        key("BET NOV 1675 AND 13 DEC 1675").as_deref(),
        Some("16751100")
    );
}

#[test]
fn unparseable_is_absent_not_an_error() {
    assert_eq!(key("sometime in spring"), None);
    assert_eq!(key("1940-11-14"), None);
    assert_eq!(key("Foo 1940"), None);
    assert_eq!(key("(estimated)"), None);
}

#[test]
fn parse_date_reports_precision() {
    let parsed = parse_date("aft 5 JUN 1995").expect("parsed");
    assert_eq!(parsed.precision, DatePrecision::Day);
    assert_eq!(parsed.qualifier, Some(DateQualifier::After));

    assert_eq!(
        parse_date("Jun 1995").map(|p| p.precision),
        Some(DatePrecision::Month)
    );
}

#[test]
fn canonical_form_is_stable_under_renormalization() {
    // A canonical year-only key renders back to a bare year that normalizes identically.
    let first = normalize_date("abt 1930").expect("date");
    let again = normalize_date(&first.year().to_string()).expect("date");
    assert_eq!(first, again);
}
