//! Solar ↔ lunar conversion with leap-month handling.
//!
//! Conversion is pure day-offset arithmetic against the encoded tables: an
//! offset from the lunar New Year is consumed month by month, the leap month
//! (when present) following its ordinary namesake. The pair of operations is
//! bijective over civil 1900-01-31 .. 2100-12-31.

use serde::{Deserialize, Serialize};
use sizhu_time::julian::calendar_to_jd;

use crate::error::CalendarError;
use crate::tables::{
    leap_month, leap_month_days, lunar_month_days, spring_festival, LUNAR_YEAR_MAX,
    LUNAR_YEAR_MIN,
};

/// A date in the Chinese lunisolar calendar.
///
/// `is_leap` may only be set when `month` is the year's encoded leap
/// insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }
}

fn check_lunar_year(year: i32) -> Result<(), CalendarError> {
    if (LUNAR_YEAR_MIN..=LUNAR_YEAR_MAX).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange(year))
    }
}

fn new_year_jd(lunar_year: i32) -> f64 {
    let (m, d) = spring_festival(lunar_year);
    calendar_to_jd(lunar_year, m, d as f64)
}

/// Convert a civil calendar date to its lunar date.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    check_lunar_year(year)?;

    let jd = calendar_to_jd(year, month, day as f64);
    let lunar_year = if jd < new_year_jd(year) { year - 1 } else { year };
    if lunar_year < LUNAR_YEAR_MIN {
        return Err(CalendarError::BeforeFirstNewYear);
    }

    let mut offset = (jd - new_year_jd(lunar_year)).round() as i64;
    let leap = leap_month(lunar_year);

    let mut m = 1u32;
    let mut is_leap = false;
    loop {
        let days = lunar_month_days(lunar_year, m) as i64;
        if offset < days {
            break;
        }
        offset -= days;
        if m == leap {
            let leap_days = leap_month_days(lunar_year) as i64;
            if offset < leap_days {
                is_leap = true;
                break;
            }
            offset -= leap_days;
        }
        m += 1;
    }

    Ok(LunarDate::new(lunar_year, m, offset as u32 + 1, is_leap))
}

/// Convert a lunar date to its civil calendar date `(year, month, day)`.
pub fn lunar_to_solar(lunar: &LunarDate) -> Result<(i32, u32, u32), CalendarError> {
    check_lunar_year(lunar.year)?;
    if !(1..=12).contains(&lunar.month) {
        return Err(CalendarError::MonthOutOfRange(lunar.month));
    }

    let leap = leap_month(lunar.year);
    if lunar.is_leap && lunar.month != leap {
        return Err(CalendarError::NotALeapMonth {
            year: lunar.year,
            month: lunar.month,
        });
    }

    let month_days = if lunar.is_leap {
        leap_month_days(lunar.year)
    } else {
        lunar_month_days(lunar.year, lunar.month)
    };
    if lunar.day == 0 || lunar.day > month_days {
        return Err(CalendarError::DayOutOfRange {
            day: lunar.day,
            month_days,
        });
    }

    let mut offset: i64 = 0;
    for m in 1..lunar.month {
        offset += lunar_month_days(lunar.year, m) as i64;
        if m == leap {
            offset += leap_month_days(lunar.year) as i64;
        }
    }
    if lunar.is_leap {
        offset += lunar_month_days(lunar.year, lunar.month) as i64;
    }

    let jd = new_year_jd(lunar.year) + (offset + lunar.day as i64 - 1) as f64;
    let (y, m, d) = sizhu_time::julian::jd_to_calendar(jd);
    Ok((y, m, d.round() as u32))
}
