// src/calendar.rs
//
// Pure date utilities shared by the assignment model and the resolvers.
// Every date entering a date-keyed map goes through `local_day` first so
// that map lookups never disagree with the calendar the user sees.

use chrono::{DateTime, Datelike, Days, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive upper bound on a SPECIFIC_PERIOD window, in days.
pub const SPECIFIC_PERIOD_MAX_DAYS: i64 = 15;

/// The seven weekday constants used as WEEKLY map keys on the wire.
///
/// Kept as an owned enum (rather than `chrono::Weekday`) so the wire
/// representation is the capitalized English name the HR API sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekdayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekdayName {
    pub fn is_weekend(self) -> bool {
        matches!(self, WeekdayName::Saturday | WeekdayName::Sunday)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekdayName::Monday => "Monday",
            WeekdayName::Tuesday => "Tuesday",
            WeekdayName::Wednesday => "Wednesday",
            WeekdayName::Thursday => "Thursday",
            WeekdayName::Friday => "Friday",
            WeekdayName::Saturday => "Saturday",
            WeekdayName::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Weekday> for WeekdayName {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => WeekdayName::Monday,
            Weekday::Tue => WeekdayName::Tuesday,
            Weekday::Wed => WeekdayName::Wednesday,
            Weekday::Thu => WeekdayName::Thursday,
            Weekday::Fri => WeekdayName::Friday,
            Weekday::Sat => WeekdayName::Saturday,
            Weekday::Sun => WeekdayName::Sunday,
        }
    }
}

/// Weekday of `date` on the local calendar. No UTC conversion happens
/// anywhere in this crate; a date is a local calendar day, full stop.
pub fn weekday_of(date: NaiveDate) -> WeekdayName {
    date.weekday().into()
}

/// Truncates a local timestamp to its calendar day. The single
/// normalization point for source data that still carries a time component.
pub fn local_day(ts: DateTime<Local>) -> NaiveDate {
    ts.date_naive()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    weekday_of(date).is_weekend()
}

/// All dates from `from` to `to` inclusive, ascending. Empty when
/// `to < from`.
pub fn inclusive_range(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    if to < from {
        return Vec::new();
    }
    let mut days = Vec::with_capacity(((to - from).num_days() + 1) as usize);
    let mut current = from;
    while current <= to {
        days.push(current);
        current = match current.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Clamps the end of an inclusive range so it never spans more than
/// [`SPECIFIC_PERIOD_MAX_DAYS`] days: returns `from + 14` when the span is
/// too long, `to` unchanged otherwise. Idempotent.
pub fn clamp_range_end(from: NaiveDate, to: NaiveDate) -> NaiveDate {
    if (to - from).num_days() + 1 > SPECIFIC_PERIOD_MAX_DAYS {
        from + Duration::days(SPECIFIC_PERIOD_MAX_DAYS - 1)
    } else {
        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .unwrap_or_else(|_| panic!("Invalid date string format: {}", date_str))
    }

    #[test]
    fn weekday_of_matches_known_dates() {
        assert_eq!(weekday_of(d("2024-06-03")), WeekdayName::Monday);
        assert_eq!(weekday_of(d("2024-06-08")), WeekdayName::Saturday);
        assert_eq!(weekday_of(d("2024-06-09")), WeekdayName::Sunday);
    }

    #[test]
    fn weekend_classification() {
        assert!(is_weekend(d("2024-06-08")));
        assert!(is_weekend(d("2024-06-09")));
        assert!(!is_weekend(d("2024-06-07")));
    }

    #[test]
    fn inclusive_range_yields_every_day() {
        let days = inclusive_range(d("2024-05-01"), d("2024-05-15"));
        assert_eq!(days.len(), 15);
        assert_eq!(days.first(), Some(&d("2024-05-01")));
        assert_eq!(days.last(), Some(&d("2024-05-15")));
    }

    #[test]
    fn inclusive_range_single_day() {
        assert_eq!(
            inclusive_range(d("2024-05-01"), d("2024-05-01")),
            vec![d("2024-05-01")]
        );
    }

    #[test]
    fn inclusive_range_inverted_is_empty() {
        assert!(inclusive_range(d("2024-05-02"), d("2024-05-01")).is_empty());
    }

    #[test]
    fn clamp_leaves_short_ranges_alone() {
        assert_eq!(
            clamp_range_end(d("2024-05-01"), d("2024-05-15")),
            d("2024-05-15")
        );
        assert_eq!(
            clamp_range_end(d("2024-05-01"), d("2024-05-03")),
            d("2024-05-03")
        );
    }

    #[test]
    fn clamp_cuts_long_ranges_to_fifteen_days() {
        assert_eq!(
            clamp_range_end(d("2024-05-01"), d("2024-05-20")),
            d("2024-05-15")
        );
    }

    #[test]
    fn clamp_is_idempotent() {
        let clamped = clamp_range_end(d("2024-05-01"), d("2024-05-20"));
        assert_eq!(clamp_range_end(d("2024-05-01"), clamped), clamped);
    }
}
