//! Age at an event, computed from canonical dates.

use std::fmt;

use gedcom_model::CanonicalDate;

use super::date::normalize_date;

/// Elapsed years, months and days between two canonical dates.
///
/// Unknown components count as zero, and a negative day difference borrows a
/// 30-day month, so the result is an approximation suited for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Age {
    pub fn between(birth: CanonicalDate, event: CanonicalDate) -> Self {
        let mut years = event.year() - birth.year();
        let mut months = component(event.month()) - component(birth.month());
        let mut days = component(event.day()) - component(birth.day());

        if days < 0 {
            days += 30;
            months -= 1;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }

        Self {
            years,
            months,
            days,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// Renders `"<y>y, <m>m, <d>d"`, omitting zero parts.
impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [(self.years, 'y'), (self.months, 'm'), (self.days, 'd')];
        let rendered: Vec<String> = parts
            .iter()
            .filter(|(value, _)| *value != 0)
            .map(|(value, unit)| format!("{value}{unit}"))
            .collect();
        f.write_str(&rendered.join(", "))
    }
}

/// Age of a person born on `birth` at an event dated with free text.
///
/// `None` when the birth date is unknown or the event date is unparseable.
pub fn age_at_event(birth: Option<CanonicalDate>, event_date: &str) -> Option<Age> {
    let birth = birth?;
    let event = normalize_date(event_date)?;
    Some(Age::between(birth, event))
}

fn component(value: Option<u8>) -> i32 {
    value.map(i32::from).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(key: &str) -> CanonicalDate {
        key.parse().expect("canonical date")
    }

    #[test]
    fn borrows_days_and_months() {
        let age = Age::between(date("19000615"), date("19500510"));
        assert_eq!(
            age,
            Age {
                years: 49,
                months: 10,
                days: 25
            }
        );
        assert_eq!(age.to_string(), "49y, 10m, 25d");
    }

    #[test]
    fn omits_zero_parts() {
        let age = Age::between(date("19000600"), date("19300600"));
        assert_eq!(age.to_string(), "30y");
    }

    #[test]
    fn requires_both_dates() {
        assert_eq!(age_at_event(None, "1 JAN 1950"), None);
        assert_eq!(age_at_event(Some(date("19000101")), "unknown"), None);
        assert_eq!(
            age_at_event(Some(date("19000101")), "1 JAN 1950").map(|a| a.years),
            Some(50)
        );
    }
}
