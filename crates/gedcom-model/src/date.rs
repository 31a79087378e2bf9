use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Fixed-width, sortable date key rendered as `YYYYMMDD`.
///
/// Unknown month or day components are zero: `19300000` is "1930",
/// `19401100` is "November 1940". Ordering is chronological and agrees with
/// lexical ordering of the rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CanonicalDate {
    /// Builds a key from components; `month`/`day` of 0 mean unknown.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ModelError> {
        if year > 9999 || month > 12 || day > 31 || (month == 0 && day != 0) {
            return Err(ModelError::InvalidCanonicalDate(format!(
                "{year:04}{month:02}{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        i32::from(self.year)
    }

    pub fn month(&self) -> Option<u8> {
        (self.month != 0).then_some(self.month)
    }

    pub fn day(&self) -> Option<u8> {
        (self.day != 0).then_some(self.day)
    }

    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CanonicalDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidCanonicalDate(s.to_string());
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = s[0..4].parse().map_err(|_| invalid())?;
        let month = s[4..6].parse().map_err(|_| invalid())?;
        let day = s[6..8].parse().map_err(|_| invalid())?;
        Self::new(year, month, day).map_err(|_| invalid())
    }
}

impl TryFrom<String> for CanonicalDate {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanonicalDate> for String {
    fn from(value: CanonicalDate) -> Self {
        value.to_string()
    }
}
