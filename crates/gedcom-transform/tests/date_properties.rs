// Property-based tests for date normalization.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;

use gedcom_transform::normalize_date;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_date() -> impl Strategy<Value = (u16, usize, u8)> {
    (1000u16..=2100, 0usize..12, 1u8..=28)
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn never_panics(input in ".{0,40}") {
        let _ = normalize_date(&input);
    }

    #[test]
    fn canonical_key_is_eight_digits((year, month, day) in arb_date()) {
        let text = format!("{day} {} {year}", MONTHS[month]);
        let key = normalize_date(&text).expect("valid date").to_string();
        prop_assert_eq!(key.len(), 8);
        prop_assert!(key.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(key, format!("{year:04}{:02}{day:02}", month + 1));
    }

    #[test]
    fn ordering_matches_chronology(a in arb_date(), b in arb_date()) {
        let render = |(year, month, day): (u16, usize, u8)| format!("{day} {} {year}", MONTHS[month]);
        let left = normalize_date(&render(a)).expect("valid date");
        let right = normalize_date(&render(b)).expect("valid date");
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
        prop_assert_eq!(left.to_string().cmp(&right.to_string()), a.cmp(&b));
    }

    #[test]
    fn qualifiers_do_not_change_the_key(
        (year, month, day) in arb_date(),
        qualifier in prop::sample::select(vec!["abt", "ABT", "bef", "Before", "aft", "AFTER", "about"]),
    ) {
        let plain = format!("{day} {} {year}", MONTHS[month]);
        let qualified = format!("{qualifier} {plain}");
        prop_assert_eq!(normalize_date(&plain), normalize_date(&qualified));
    }

    #[test]
    fn year_only_sorts_before_any_date_in_that_year((year, month, day) in arb_date()) {
        let year_only = normalize_date(&year.to_string()).expect("year");
        let full = normalize_date(&format!("{day} {} {year}", MONTHS[month])).expect("date");
        prop_assert!(year_only < full);
    }
}
