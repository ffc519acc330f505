use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::{CoreError, CoreResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A calendar travel date entered as `"<Month> <day> <year>"`, e.g. `"May 14 2025"`.
///
/// Parsing is strict: full English month name (any case), a one or two digit
/// day, a four digit year, single spaces and nothing else. Days that do not
/// exist in the given month are rejected instead of rolling over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    pub fn parse(text: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidDateFormat(text.to_string());

        let mut parts = text.split(' ');
        let (month, day, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(d), Some(y), None) => (m, d, y),
            _ => return Err(invalid()),
        };

        let month = MONTH_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(month))
            .ok_or_else(invalid)? as u32
            + 1;
        let day = digits(day, 1..=2).ok_or_else(invalid)?;
        let year = digits(year, 4..=4).ok_or_else(invalid)? as i32;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(TravelDate)
            .ok_or_else(invalid)
    }

    /// Joins separately entered month, day and year the way the booking form
    /// does, then parses the result.
    pub fn from_parts(month: &str, day: &str, year: &str) -> CoreResult<Self> {
        Self::parse(&Self::join(month, day, year))
    }

    pub fn join(month: &str, day: &str, year: &str) -> String {
        format!("{} {} {}", month, day, year)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn digits(text: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl From<TravelDate> for NaiveDate {
    fn from(value: TravelDate) -> Self {
        value.0
    }
}

impl FromStr for TravelDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %-d %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_dates() {
        assert_eq!(TravelDate::parse("May 14 2025").unwrap().date(), ymd(2025, 5, 14));
        assert_eq!(TravelDate::parse("January 1 2024").unwrap().date(), ymd(2024, 1, 1));
        assert_eq!(TravelDate::parse("february 29 2024").unwrap().date(), ymd(2024, 2, 29));
        assert_eq!(TravelDate::parse("December 09 2030").unwrap().date(), ymd(2030, 12, 9));
    }

    #[test]
    fn test_non_existent_dates_are_rejected() {
        for text in ["February 30 2024", "April 31 2024", "February 29 2023", "June 0 2025"] {
            assert!(
                matches!(TravelDate::parse(text), Err(CoreError::InvalidDateFormat(ref t)) if t == text),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        for text in [
            "",
            "May 14",
            "May 14 25",
            "May 14 02025",
            "May  14 2025",
            "May 14 2025 ",
            "May 14 2025x",
            "Mayo 14 2025",
            "Jan 14 2025",
            "5 14 2025",
            "May +4 2025",
            "May 123 2025",
            "2025-05-14",
        ] {
            assert!(TravelDate::parse(text).is_err(), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_from_parts() {
        let date = TravelDate::from_parts("March", "7", "2026").unwrap();
        assert_eq!(date.date(), ymd(2026, 3, 7));
        assert_eq!(date.to_string(), "March 7 2026");

        let err = TravelDate::from_parts("April", "31", "2024").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format: April 31 2024");
    }
}
