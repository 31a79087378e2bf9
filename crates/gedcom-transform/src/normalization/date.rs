//! Free-text genealogical date normalization.
//!
//! Genealogical sources record dates loosely ("abt 1930", "Jan 1940",
//! "BET NOV 1675 AND 13 DEC 1675"). This module reduces them to a
//! [`CanonicalDate`] key while keeping the qualifier and precision for
//! display. Unrecognized text is a normal outcome and yields `None`.

use gedcom_model::CanonicalDate;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Qualifier words that change how a date is displayed but not its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateQualifier {
    Before,
    After,
    About,
    /// A `BET .. AND ..` range; the key is the earlier bound.
    Between,
}

impl DateQualifier {
    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "bef" | "before" => Some(DateQualifier::Before),
            "aft" | "after" => Some(DateQualifier::After),
            "abt" | "about" => Some(DateQualifier::About),
            _ => None,
        }
    }
}

/// How much of the date was known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Day, month and year: `YYYYMMDD`
    Day,
    /// Month and year: `YYYYMM00`
    Month,
    /// Year only: `YYYY0000`
    Year,
}

/// Result of parsing a free-text date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub date: CanonicalDate,
    pub precision: DatePrecision,
    pub qualifier: Option<DateQualifier>,
}

/// Normalize a free-text date to its canonical sortable key.
///
/// # Examples
///
/// ```
/// use gedcom_transform::normalization::normalize_date;
///
/// let key = |s: &str| normalize_date(s).map(|d| d.to_string());
/// assert_eq!(key("14 Nov 1940").as_deref(), Some("19401114"));
/// assert_eq!(key("Jan 1940").as_deref(), Some("19400100"));
/// assert_eq!(key("abt 1930").as_deref(), Some("19300000"));
/// assert_eq!(key("BET NOV 1675 AND 13 DEC 1675").as_deref(), Some("16751100"));
/// assert_eq!(key("sometime in spring"), None);
/// ```
pub fn normalize_date(value: &str) -> Option<CanonicalDate> {
    parse_date(value).map(|parsed| parsed.date)
}

/// Parse a free-text date, keeping qualifier and precision.
pub fn parse_date(value: &str) -> Option<ParsedDate> {
    let mut qualifier = None;
    let mut tokens: Vec<&str> = Vec::new();
    for token in value.split_whitespace() {
        match DateQualifier::from_word(token) {
            Some(found) if qualifier.is_none() => qualifier = Some(found),
            Some(_) => {}
            None => tokens.push(token),
        }
    }

    if let Some(lower_bound) = between_lower_bound(&tokens) {
        tokens = lower_bound;
        qualifier = Some(DateQualifier::Between);
    }

    let parsed = match_formats(&tokens).map(|(date, precision)| ParsedDate {
        date,
        precision,
        qualifier,
    });
    if parsed.is_none() && !tokens.is_empty() {
        tracing::trace!(date = value, "unparseable date");
    }
    parsed
}

/// For `BET <a> AND <b>`, the tokens of `<a>`.
fn between_lower_bound<'a>(tokens: &[&'a str]) -> Option<Vec<&'a str>> {
    let (first, rest) = tokens.split_first()?;
    if !first.eq_ignore_ascii_case("bet") {
        return None;
    }
    let and_pos = rest.iter().rposition(|t| t.eq_ignore_ascii_case("and"))?;
    if and_pos == 0 || and_pos + 1 == rest.len() {
        return None;
    }
    Some(rest[..and_pos].to_vec())
}

fn match_formats(tokens: &[&str]) -> Option<(CanonicalDate, DatePrecision)> {
    match tokens {
        // <day> <3-letter month> <year>
        [day, month, year] => {
            let day = parse_day(day)?;
            let month = month_from_abbreviation(month)?;
            let year = parse_year(year)?;
            CanonicalDate::new(year, month, day)
                .ok()
                .map(|date| (date, DatePrecision::Day))
        }
        // <3-letter month> <year> or <full month name> <year>
        [month, year] => {
            let month = month_from_abbreviation(month).or_else(|| month_from_name(month))?;
            let year = parse_year(year)?;
            CanonicalDate::new(year, month, 0)
                .ok()
                .map(|date| (date, DatePrecision::Month))
        }
        [year] => {
            let year = parse_year(year)?;
            CanonicalDate::new(year, 0, 0)
                .ok()
                .map(|date| (date, DatePrecision::Year))
        }
        _ => None,
    }
}

fn parse_year(token: &str) -> Option<u16> {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Day of month `1..=31`; zero is reserved for an unknown day.
fn parse_day(token: &str) -> Option<u8> {
    if (1..=2).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok().filter(|day| (1..=31).contains(day))
    } else {
        None
    }
}

fn month_from_abbreviation(token: &str) -> Option<u8> {
    month_index(&MONTH_ABBREVIATIONS, token)
}

fn month_from_name(token: &str) -> Option<u8> {
    month_index(&MONTH_NAMES, token)
}

/// 1-indexed month number for a case-insensitive match in `table`.
fn month_index(table: &[&str; 12], token: &str) -> Option<u8> {
    let lower = token.to_lowercase();
    table
        .iter()
        .position(|name| *name == lower)
        .and_then(|idx| u8::try_from(idx + 1).ok())
}
