//! Civil wall-clock instants in the fixed +08 offset.
//!
//! `CivilTime` is the canonical instant representation used throughout the
//! engine: calendar fields plus an implicit, named +08:00 offset. Every
//! pillar boundary is evaluated against this clock. UTC appears only inside
//! the solar-term solver, which converts through Julian dates explicitly.

use serde::{Deserialize, Serialize};

use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Calendar date/time in the +08 civil clock, sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date of this wall-clock reading (offset ignored: the JD is in
    /// the same +08 frame the fields are in).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Rebuild calendar fields from a +08-frame Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date of this date's midnight.
    pub fn date_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Seconds elapsed since this date's midnight.
    pub fn seconds_of_day(&self) -> f64 {
        self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u32 {
        (self.date_jd() - calendar_to_jd(self.year, 1, 1.0)).round() as u32 + 1
    }

    /// Shift by a (possibly fractional, possibly negative) number of minutes.
    ///
    /// The date part is re-normalized through whole-day arithmetic so the
    /// time-of-day fields keep minute-level exactness.
    pub fn add_minutes(&self, minutes: f64) -> Self {
        let total = self.seconds_of_day() + minutes * 60.0;
        let day_shift = (total / 86_400.0).floor();
        let rem = total - day_shift * 86_400.0;
        let (year, month, day_frac) = jd_to_calendar(self.date_jd() + day_shift);
        let hour = (rem / 3600.0).floor() as u32;
        let minute = ((rem % 3600.0) / 60.0).floor() as u32;
        let second = rem % 60.0;
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour,
            minute,
            second,
        }
    }

    /// Shift by whole days, keeping the time of day.
    pub fn add_days(&self, days: i64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(self.date_jd() + days as f64);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            ..*self
        }
    }

    /// Whole days from `other`'s date to this date (sign follows subtraction).
    pub fn days_since(&self, other: &CivilTime) -> i64 {
        (self.date_jd() - other.date_jd()).round() as i64
    }
}

impl PartialOrd for CivilTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let lhs = (self.year, self.month, self.day, self.hour, self.minute);
        let rhs = (other.year, other.month, other.day, other.hour, other.minute);
        match lhs.cmp(&rhs) {
            std::cmp::Ordering::Equal => self.second.partial_cmp(&other.second),
            ord => Some(ord),
        }
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+08:00",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}+08:00",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_roundtrip() {
        let t = CivilTime::new(1984, 2, 4, 23, 19, 0.0);
        let back = CivilTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (1984, 2, 4));
        assert_eq!((back.hour, back.minute), (23, 19));
        assert!(back.second < 0.01);
    }

    #[test]
    fn ordering_follows_fields() {
        let a = CivilTime::new(1984, 2, 4, 23, 18, 0.0);
        let b = CivilTime::new(1984, 2, 4, 23, 18, 52.0);
        let c = CivilTime::new(1984, 2, 4, 23, 19, 0.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn add_minutes_crosses_midnight() {
        let t = CivilTime::new(2000, 1, 1, 0, 10, 0.0);
        let back = t.add_minutes(-30.0);
        assert_eq!((back.year, back.month, back.day), (1999, 12, 31));
        assert_eq!((back.hour, back.minute), (23, 40));
    }

    #[test]
    fn add_minutes_fractional() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0.0);
        let s = t.add_minutes(-3.5);
        assert_eq!((s.hour, s.minute), (11, 56));
        assert!((s.second - 30.0).abs() < 1e-6);
    }

    #[test]
    fn add_days_over_leap_day() {
        let t = CivilTime::new(2004, 2, 28, 6, 0, 0.0);
        let n = t.add_days(2);
        assert_eq!((n.month, n.day), (3, 1));
        assert_eq!(n.hour, 6);
    }

    #[test]
    fn days_since_signed() {
        let a = CivilTime::new(1900, 1, 31, 0, 0, 0.0);
        let b = CivilTime::new(1900, 2, 2, 23, 0, 0.0);
        assert_eq!(b.days_since(&a), 2);
        assert_eq!(a.days_since(&b), -2);
    }

    #[test]
    fn day_of_year_boundaries() {
        assert_eq!(CivilTime::new(2001, 1, 1, 0, 0, 0.0).day_of_year(), 1);
        assert_eq!(CivilTime::new(2001, 12, 31, 0, 0, 0.0).day_of_year(), 365);
        assert_eq!(CivilTime::new(2004, 12, 31, 0, 0, 0.0).day_of_year(), 366);
    }

    #[test]
    fn display_fixed_offset() {
        let t = CivilTime::new(2024, 3, 5, 10, 24, 0.0);
        assert_eq!(t.to_string(), "2024-03-05T10:24:00+08:00");
    }
}
