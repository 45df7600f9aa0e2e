//! Error types for lunisolar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar/lunar calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year outside the encoded 1900..=2100 tables.
    YearOutOfRange(i32),
    /// Lunar month outside 1..=12.
    MonthOutOfRange(u32),
    /// `is_leap` was set for a month that is not the year's leap insertion.
    NotALeapMonth { year: i32, month: u32 },
    /// Day exceeds the length of the chosen lunar month.
    DayOutOfRange { day: u32, month_days: u32 },
    /// Civil date precedes the first encoded lunar New Year (1900-01-31).
    BeforeFirstNewYear,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} outside 1900..=2100"),
            Self::MonthOutOfRange(m) => write!(f, "lunar month {m} outside 1..=12"),
            Self::NotALeapMonth { year, month } => {
                write!(f, "lunar year {year} has no leap month {month}")
            }
            Self::DayOutOfRange { day, month_days } => {
                write!(f, "lunar day {day} exceeds month length {month_days}")
            }
            Self::BeforeFirstNewYear => {
                write!(f, "civil date precedes the lunar epoch 1900-01-31")
            }
        }
    }
}

impl Error for CalendarError {}
