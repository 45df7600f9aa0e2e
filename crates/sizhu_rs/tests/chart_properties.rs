//! Randomized properties of the full pipeline.

use proptest::prelude::*;
use sizhu_rs::*;

fn solar_input(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> ChartInput {
    ChartInput {
        date_type: DateType::Solar,
        year,
        month,
        day,
        is_leap_month: false,
        hour,
        minute,
        time_type: TimeType::Standard,
        gender: Gender::Male,
        longitude: 120.0,
        dst_confirmed: false,
        early_rat_split: false,
    }
}

proptest! {
    /// Every emitted pillar satisfies the sexagenary parity constraint.
    #[test]
    fn sexagenary_constraint(
        year in 1901i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..=23,
        minute in 0u32..=59,
    ) {
        let chart = compute(&solar_input(year, month, day, hour, minute)).unwrap();
        let fp = chart.pillars;
        for p in [fp.year, fp.month, fp.day, fp.hour] {
            prop_assert_eq!(p.stem.index() % 2, p.branch.index() % 2);
        }
        for lp in &chart.luck.periods {
            prop_assert_eq!(lp.pillar.stem.index() % 2, lp.pillar.branch.index() % 2);
        }
    }

    /// The longitude-offset law holds exactly for any longitude.
    #[test]
    fn longitude_offset_law(
        lon in -180.0f64..=180.0,
        day in 1u32..=28,
    ) {
        let mut input = solar_input(2010, 6, day, 12, 0);
        input.longitude = lon;
        let chart = compute(&input).unwrap();
        prop_assert_eq!(chart.reduction.longitude_offset_minutes, (lon - 120.0) * 4.0);
    }

    /// The equation of time stays inside its published bounds.
    #[test]
    fn equation_of_time_bound(
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let chart = compute(&solar_input(2005, month, day, 12, 0)).unwrap();
        let eot = chart.reduction.equation_of_time_minutes;
        prop_assert!((-15.0..=17.0).contains(&eot), "EoT {}", eot);
    }

    /// Sixty days later the day pillar repeats (noon probes keep the
    /// reduced instant inside the same civil day).
    #[test]
    fn day_pillar_sixty_day_cycle(
        year in 1901i32..=2099,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let a = compute(&solar_input(year, month, day, 12, 0)).unwrap();
        let shifted = a.civil.add_days(60);
        let b = compute(&solar_input(
            shifted.year,
            shifted.month,
            shifted.day,
            12,
            0,
        )).unwrap();
        prop_assert_eq!(a.pillars.day, b.pillars.day);
    }

    /// The lunar annotation always round-trips to the civil date.
    #[test]
    fn lunar_annotation_roundtrip(
        year in 1901i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let chart = compute(&solar_input(year, month, day, 10, 30)).unwrap();
        let back = sizhu_calendar::lunar_to_solar(&chart.lunar).unwrap();
        prop_assert_eq!(back, (year, month, day));
    }

    /// Same input, same output: the pipeline is deterministic.
    #[test]
    fn deterministic(
        year in 1901i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..=23,
    ) {
        let input = solar_input(year, month, day, hour, 17);
        prop_assert_eq!(compute(&input).unwrap(), compute(&input).unwrap());
    }

    /// The result record survives a JSON round trip unchanged.
    #[test]
    fn result_record_serde_roundtrip(
        year in 1901i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let chart = compute(&solar_input(year, month, day, 6, 45)).unwrap();
        let json = serde_json::to_string(&chart).unwrap();
        let back: ChartResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(chart, back);
    }
}

/// Opposite sexes run opposite directions for the same birth moment.
#[test]
fn direction_flips_with_gender() {
    let mut input = solar_input(1984, 6, 1, 12, 0);
    let male = compute(&input).unwrap();
    input.gender = Gender::Female;
    let female = compute(&input).unwrap();
    assert_ne!(male.luck.direction, female.luck.direction);
    assert_eq!(male.pillars, female.pillars);
}
