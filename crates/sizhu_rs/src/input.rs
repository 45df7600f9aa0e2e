//! The chart input record.

use serde::{Deserialize, Serialize};
use sizhu_base::Gender;

use crate::error::ChartError;

/// Calendar the y/m/d fields are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateType {
    Solar,
    Lunar,
}

/// Whether the wall clock is the +08 standard clock or already apparent
/// solar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeType {
    Standard,
    TrueSolar,
}

/// Everything `compute` needs about a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub date_type: DateType,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Lunar input only: the month is the year's leap insertion.
    #[serde(default)]
    pub is_leap_month: bool,
    pub hour: u32,
    pub minute: u32,
    pub time_type: TimeType,
    pub gender: Gender,
    /// Decimal degrees, east positive.
    pub longitude: f64,
    /// The recorded clock already includes the 1986–1991 DST hour.
    #[serde(default)]
    pub dst_confirmed: bool,
    /// 23:00–23:59 belongs to the following day.
    #[serde(default)]
    pub early_rat_split: bool,
}

/// Civil-year range accepted by the engine.
pub const YEAR_MIN: i32 = 1900;
/// Civil-year range accepted by the engine.
pub const YEAR_MAX: i32 = 2100;

fn days_in_civil_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap {
                29
            } else {
                28
            }
        }
    }
}

impl ChartInput {
    /// Structural validation: field ranges and finiteness.
    ///
    /// Lunar month/day/leap consistency is left to the calendar conversion,
    /// which knows the encoded month lengths.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.longitude.is_finite() {
            return Err(ChartError::InvalidInput("longitude is not finite".into()));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::OutOfRange(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(ChartError::OutOfRange(format!(
                "year {} outside {YEAR_MIN}..={YEAR_MAX}",
                self.year
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidInput(format!(
                "month {} outside 1..=12",
                self.month
            )));
        }
        if self.hour > 23 {
            return Err(ChartError::InvalidInput(format!(
                "hour {} outside 0..=23",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(ChartError::InvalidInput(format!(
                "minute {} outside 0..=59",
                self.minute
            )));
        }
        match self.date_type {
            DateType::Solar => {
                if self.is_leap_month {
                    return Err(ChartError::InvalidInput(
                        "isLeapMonth is only meaningful for lunar input".into(),
                    ));
                }
                let max = days_in_civil_month(self.year, self.month);
                if self.day == 0 || self.day > max {
                    return Err(ChartError::InvalidInput(format!(
                        "day {} outside 1..={max} for {}-{:02}",
                        self.day, self.year, self.month
                    )));
                }
            }
            DateType::Lunar => {
                if self.day == 0 || self.day > 30 {
                    return Err(ChartError::InvalidInput(format!(
                        "lunar day {} outside 1..=30",
                        self.day
                    )));
                }
            }
        }
        Ok(())
    }
}
