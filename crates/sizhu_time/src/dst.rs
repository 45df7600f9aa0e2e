//! Daylight-saving windows of the +08 civil clock, 1986–1991.
//!
//! Mainland China observed DST for six summers. Each window runs from a
//! 02:00 spring start to a 02:00 autumn end, membership being left-closed,
//! right-open. The correction is opt-in: the caller states whether the
//! recorded clock already includes the one-hour shift.

use crate::civil::CivilTime;

/// One DST window, `[start, end)` in the +08 wall clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DstWindow {
    pub start: CivilTime,
    pub end: CivilTime,
}

const fn at_2am(year: i32, month: u32, day: u32) -> CivilTime {
    CivilTime {
        year,
        month,
        day,
        hour: 2,
        minute: 0,
        second: 0.0,
    }
}

/// The six historical windows.
pub static DST_WINDOWS: [DstWindow; 6] = [
    DstWindow { start: at_2am(1986, 5, 4), end: at_2am(1986, 9, 14) },
    DstWindow { start: at_2am(1987, 4, 12), end: at_2am(1987, 9, 13) },
    DstWindow { start: at_2am(1988, 4, 10), end: at_2am(1988, 9, 11) },
    DstWindow { start: at_2am(1989, 4, 16), end: at_2am(1989, 9, 17) },
    DstWindow { start: at_2am(1990, 4, 15), end: at_2am(1990, 9, 16) },
    DstWindow { start: at_2am(1991, 4, 14), end: at_2am(1991, 9, 15) },
];

/// Whether the instant falls inside any DST window.
pub fn is_dst_active(t: &CivilTime) -> bool {
    DST_WINDOWS.iter().any(|w| *t >= w.start && *t < w.end)
}

/// Subtract exactly one hour iff the caller confirmed the clock includes the
/// shift and the instant lies in a window; otherwise the identity.
pub fn apply_dst_correction(t: CivilTime, user_confirmed: bool) -> CivilTime {
    if user_confirmed && is_dst_active(&t) {
        t.add_minutes(-60.0)
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_windows_in_order() {
        assert_eq!(DST_WINDOWS.len(), 6);
        for (i, w) in DST_WINDOWS.iter().enumerate() {
            assert_eq!(w.start.year, 1986 + i as i32);
            assert!(w.start < w.end);
        }
    }

    #[test]
    fn membership_left_closed_right_open() {
        let start = at_2am(1986, 5, 4);
        let end = at_2am(1986, 9, 14);
        assert!(is_dst_active(&start));
        assert!(!is_dst_active(&end));
        assert!(is_dst_active(&CivilTime::new(1986, 7, 1, 15, 30, 0.0)));
        assert!(!is_dst_active(&CivilTime::new(1986, 5, 4, 1, 59, 59.0)));
    }

    #[test]
    fn outside_the_era_is_never_active() {
        assert!(!is_dst_active(&CivilTime::new(1985, 7, 1, 12, 0, 0.0)));
        assert!(!is_dst_active(&CivilTime::new(1992, 7, 1, 12, 0, 0.0)));
        assert!(!is_dst_active(&CivilTime::new(1986, 1, 15, 12, 0, 0.0)));
    }

    #[test]
    fn correction_subtracts_one_hour() {
        let t = CivilTime::new(1986, 7, 1, 15, 30, 0.0);
        let corrected = apply_dst_correction(t, true);
        assert_eq!((corrected.hour, corrected.minute), (14, 30));
        assert_eq!(apply_dst_correction(t, false), t);
    }

    #[test]
    fn correction_is_identity_outside_windows() {
        let t = CivilTime::new(1993, 7, 1, 15, 30, 0.0);
        assert_eq!(apply_dst_correction(t, true), t);
    }
}
