//! Golden pillar derivations for documented charts.
//!
//! The standard instant drives the term boundaries; the true-solar reduced
//! instant drives the day and hour, exactly as the orchestration layer
//! composes them.

use sizhu_base::{four_pillars, FourPillars};
use sizhu_time::{reduce, CivilTime};

fn chart(t: CivilTime, longitude: f64, early_rat: bool) -> FourPillars {
    let reduction = reduce(t, longitude);
    four_pillars(&t, &reduction.reduced, early_rat).unwrap()
}

fn glyphs(fp: &FourPillars) -> (String, String, String, String) {
    (
        fp.year.glyph(),
        fp.month.glyph(),
        fp.day.glyph(),
        fp.hour.glyph(),
    )
}

#[test]
fn lichun_hair_trigger_after() {
    // One minute after Start-of-Spring 1984, early-rat convention on: the
    // year turns to 甲子 and the late-rat hour already belongs to the next
    // day (己巳, opening on 甲子).
    let fp = chart(CivilTime::new(1984, 2, 4, 23, 19, 0.0), 120.0, true);
    assert_eq!(
        glyphs(&fp),
        ("甲子".into(), "丙寅".into(), "己巳".into(), "甲子".into())
    );
}

#[test]
fn lichun_hair_trigger_before() {
    // One minute earlier the year is still 癸亥 and the month still 丑.
    let fp = chart(CivilTime::new(1984, 2, 4, 23, 18, 0.0), 120.0, false);
    assert_eq!(
        glyphs(&fp),
        ("癸亥".into(), "乙丑".into(), "戊辰".into(), "壬子".into())
    );
}

#[test]
fn jingzhe_boundary_beijing() {
    // One minute after Jingzhe 2024 at Beijing's meridian: the month branch
    // must already be 卯 even though the reduced clock sits 26 minutes back.
    let fp = chart(CivilTime::new(2024, 3, 5, 10, 24, 0.0), 116.4, false);
    assert_eq!(fp.year.glyph(), "甲辰");
    assert_eq!(fp.month.glyph(), "丁卯");
    assert_eq!(fp.day.glyph(), "戊辰");
    assert_eq!(fp.hour.glyph(), "丁巳");
}

#[test]
fn y2k_noon() {
    // 2000-01-01 12:00 precedes both Lichun 2000 and Xiaohan 2000: the year
    // pillar stays 己卯 and Daxue 1999 still governs the month.
    let fp = chart(CivilTime::new(2000, 1, 1, 12, 0, 0.0), 120.0, false);
    assert_eq!(
        glyphs(&fp),
        ("己卯".into(), "丙子".into(), "戊午".into(), "戊午".into())
    );
}

#[test]
fn dst_summer_1986() {
    // The 1986-07-01 15:30 wall clock minus the DST hour is 14:30; the
    // pillars derive from the corrected instant.
    let corrected =
        sizhu_time::apply_dst_correction(CivilTime::new(1986, 7, 1, 15, 30, 0.0), true);
    assert_eq!((corrected.hour, corrected.minute), (14, 30));
    let fp = chart(corrected, 120.0, false);
    assert_eq!(
        glyphs(&fp),
        ("丙寅".into(), "甲午".into(), "丙午".into(), "乙未".into())
    );
}

#[test]
fn sexagenary_parity_over_a_year_sweep() {
    for day_offset in (0..365).step_by(7) {
        let t = CivilTime::new(2023, 1, 1, 9, 30, 0.0).add_days(day_offset);
        let fp = chart(t, 110.0, false);
        for p in [fp.year, fp.month, fp.day, fp.hour] {
            assert_eq!(p.stem.index() % 2, p.branch.index() % 2, "{t}");
        }
    }
}

#[test]
fn day_cycle_sixty_day_period() {
    let base = CivilTime::new(1950, 3, 10, 8, 0, 0.0);
    let fp1 = chart(base, 120.0, false);
    let fp2 = chart(base.add_days(60), 120.0, false);
    assert_eq!(fp1.day, fp2.day);
}
