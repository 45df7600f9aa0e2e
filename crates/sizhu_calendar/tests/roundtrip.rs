//! Round-trip properties of the lunisolar conversion.

use proptest::prelude::*;
use sizhu_calendar::{lunar_to_solar, solar_to_lunar, spring_festival, LunarDate};
use sizhu_time::julian::{calendar_to_jd, jd_to_calendar};

/// Exhaustive round trip across every day of the supported range.
///
/// Walks JD by JD from 1900-01-31 to 2100-12-31: solar → lunar → solar must
/// be the identity on every single day.
#[test]
fn exhaustive_roundtrip_1900_2100() {
    let start = calendar_to_jd(1900, 1, 31.0) as i64;
    let end = calendar_to_jd(2100, 12, 31.0) as i64;
    for jd in start..=end {
        let (y, m, d) = jd_to_calendar(jd as f64 + 0.5);
        let day = d.round() as u32;
        let lunar = solar_to_lunar(y, m, day).unwrap_or_else(|e| panic!("{y}-{m}-{day}: {e}"));
        let back = lunar_to_solar(&lunar).unwrap();
        assert_eq!(back, (y, m, day), "via {lunar:?}");
    }
}

#[test]
fn new_year_days_match_table() {
    for year in 1900..=2100 {
        let (m, d) = spring_festival(year);
        let lunar = solar_to_lunar(year, m, d).unwrap();
        assert_eq!(lunar, LunarDate::new(year, 1, 1, false), "new year {year}");
    }
}

proptest! {
    /// Random lunar dates built from the encoded month lengths convert to a
    /// civil date and back unchanged.
    #[test]
    fn lunar_to_solar_roundtrip(
        year in 1900i32..=2099,
        month in 1u32..=12,
        day in 1u32..=29,
        prefer_leap in any::<bool>(),
    ) {
        let is_leap = prefer_leap && sizhu_calendar::leap_month(year) == month;
        let lunar = LunarDate::new(year, month, day, is_leap);
        let (y, m, d) = lunar_to_solar(&lunar).unwrap();
        let back = solar_to_lunar(y, m, d).unwrap();
        prop_assert_eq!(back, lunar);
    }

    /// Random civil dates always convert without panicking and re-encode to
    /// a valid lunar date.
    #[test]
    fn solar_to_lunar_total(
        year in 1901i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let lunar = solar_to_lunar(year, month, day).unwrap();
        prop_assert!((1..=12).contains(&lunar.month));
        prop_assert!((1..=30).contains(&lunar.day));
        if lunar.is_leap {
            prop_assert_eq!(sizhu_calendar::leap_month(lunar.year), lunar.month);
        }
    }
}
