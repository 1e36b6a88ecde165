//! Completion calendar projection: pure functions turning a habit's
//! schedule and completion dates into renderable month/week grids. No
//! clock access anywhere; "today" is always passed in by the caller.

mod grid;
pub use grid::*;

mod schedule;
pub use schedule::*;

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire format for dates, `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDateFormat { value: String },
    #[error("weekday {value} out of range 1..=7")]
    WeekdayOutOfRange { value: u8 },
    #[error("weekly goal {value} out of range 1..=7")]
    WeeklyGoalOutOfRange { value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstDayOfWeek {
    #[default]
    Monday,
    Sunday,
}

impl FirstDayOfWeek {
    pub const fn day_labels(&self) -> [&'static str; 7] {
        match self {
            FirstDayOfWeek::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            FirstDayOfWeek::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        }
    }

    /// 0-based grid column for an ISO weekday (1 = Monday .. 7 = Sunday)
    pub fn column(&self, iso_weekday: u8) -> usize {
        let start = match self {
            FirstDayOfWeek::Monday => 1,
            FirstDayOfWeek::Sunday => 7,
        };
        (iso_weekday as i32 - start as i32).rem_euclid(7) as usize
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| CalendarError::InvalidDateFormat {
        value: value.to_string(),
    })
}

pub fn parse_dates<'a, I>(values: I) -> Result<BTreeSet<NaiveDate>, CalendarError>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().map(parse_date).collect()
}

/// First day of the calendar week containing `date`
pub fn week_start(date: NaiveDate, first_day: FirstDayOfWeek) -> NaiveDate {
    let offset = first_day.column(date.weekday().number_from_monday() as u8);
    date - Days::new(offset as u64)
}

/// The seven days of the calendar week containing `date`, for the
/// habit-card week strip
pub fn current_week(date: NaiveDate, first_day: FirstDayOfWeek) -> [NaiveDate; 7] {
    let start = week_start(date, first_day);
    std::array::from_fn(|i| start + Days::new(i as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(d("2024-01-02"), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["02-01-2024", "2024/01/02", "2024-13-01", "2024-01-32", "yesterday", ""] {
            assert!(
                matches!(
                    parse_date(bad),
                    Err(CalendarError::InvalidDateFormat { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_dates_stops_at_first_bad_value() {
        let err = parse_dates(["2024-01-01", "nope"]).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDateFormat {
                value: "nope".to_string()
            }
        );
    }

    #[test]
    fn columns_shift_with_week_start() {
        // 2024-01-01 is a Monday (ISO weekday 1)
        assert_eq!(FirstDayOfWeek::Monday.column(1), 0);
        assert_eq!(FirstDayOfWeek::Sunday.column(1), 1);
        // Sunday (ISO weekday 7)
        assert_eq!(FirstDayOfWeek::Monday.column(7), 6);
        assert_eq!(FirstDayOfWeek::Sunday.column(7), 0);
    }

    #[test]
    fn labels_start_with_the_chosen_day() {
        assert_eq!(FirstDayOfWeek::Monday.day_labels()[0], "Mon");
        assert_eq!(FirstDayOfWeek::Sunday.day_labels()[0], "Sun");
    }

    #[test]
    fn week_start_respects_preference() {
        // 2024-01-03 is a Wednesday
        let wed = d("2024-01-03");
        assert_eq!(week_start(wed, FirstDayOfWeek::Monday), d("2024-01-01"));
        assert_eq!(week_start(wed, FirstDayOfWeek::Sunday), d("2023-12-31"));

        // A Sunday belongs to the week it starts under sunday-first
        let sun = d("2024-01-07");
        assert_eq!(week_start(sun, FirstDayOfWeek::Monday), d("2024-01-01"));
        assert_eq!(week_start(sun, FirstDayOfWeek::Sunday), d("2024-01-07"));
    }

    #[test]
    fn current_week_is_seven_consecutive_days() {
        let week = current_week(d("2024-01-03"), FirstDayOfWeek::Monday);
        assert_eq!(week[0], d("2024-01-01"));
        assert_eq!(week[6], d("2024-01-07"));
        for pair in week.windows(2) {
            assert_eq!(pair[1], pair[0] + Days::new(1));
        }
    }
}
