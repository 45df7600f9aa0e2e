//! Luck cycles (大運) and the annual sequence (流年).
//!
//! Direction follows year-stem polarity and sex; the start age is the
//! distance from birth to the adjacent sectional term under the
//! three-days-per-year convention; the ten-year pillars then step through
//! the sexagenary cycle from the month pillar.

use serde::{Deserialize, Serialize};
use sizhu_ephem::prior_and_next_jie;
use sizhu_time::CivilTime;

use crate::error::BaseError;
use crate::ganzhi::{Pillar, Polarity, Stem};

/// Chart subject's sex, as used by the direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Direction of the luck sequence through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
        }
    }

    /// Signed cycle step.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Forward iff (yang year ∧ male) ∨ (yin year ∧ female).
pub fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => {
            LuckDirection::Forward
        }
        _ => LuckDirection::Backward,
    }
}

/// Age at which the first ten-year period begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Distance from birth to the adjacent jie, under three days = one year.
///
/// Forward charts measure to the next jie, backward charts to the previous
/// one. The remainder is apportioned to months and 30-day-basis days.
pub fn start_age(
    birth_standard: &CivilTime,
    direction: LuckDirection,
) -> Result<StartAge, BaseError> {
    let (prior, next) = prior_and_next_jie(birth_standard)?;
    let jie = match direction {
        LuckDirection::Forward => next,
        LuckDirection::Backward => prior,
    };
    let span_days = (jie.instant.to_jd() - birth_standard.to_jd()).abs();

    let year_frac = span_days / 3.0;
    let years = year_frac.floor();
    let month_frac = (year_frac - years) * 12.0;
    let months = month_frac.floor();
    let days = ((month_frac - months) * 30.0).floor();

    Ok(StartAge {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

/// One ten-year luck period, spanning ages `[start_age, end_age)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPeriod {
    pub pillar: Pillar,
    pub start_age: u32,
    pub end_age: u32,
}

/// Number of ten-year periods emitted by default.
pub const DEFAULT_LUCK_PERIODS: usize = 9;

/// The ten-year sequence: `count` pillars stepping from the month pillar in
/// the given direction, the first period opening at `start_age_years`.
pub fn luck_pillars(
    month_pillar: Pillar,
    direction: LuckDirection,
    start_age_years: u32,
    count: usize,
) -> Vec<LuckPeriod> {
    (1..=count as i64)
        .map(|i| LuckPeriod {
            pillar: month_pillar.offset(i * direction.step()),
            start_age: start_age_years + 10 * (i as u32 - 1),
            end_age: start_age_years + 10 * i as u32,
        })
        .collect()
}

/// A calendar year with its sexagenary pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPillar {
    pub year: i32,
    pub pillar: Pillar,
}

/// The annual sequence from `from_year`, `(Y − 4) mod 60` per entry.
pub fn annual_pillars(from_year: i32, count: usize) -> Vec<AnnualPillar> {
    (0..count as i64)
        .map(|i| {
            let year = from_year + i as i32;
            AnnualPillar {
                year,
                pillar: Pillar::from_cycle_index(year as i64 - 4),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_rule_four_cases() {
        assert_eq!(luck_direction(Stem::Jia, Gender::Male), LuckDirection::Forward);
        assert_eq!(luck_direction(Stem::Jia, Gender::Female), LuckDirection::Backward);
        assert_eq!(luck_direction(Stem::Yi, Gender::Male), LuckDirection::Backward);
        assert_eq!(luck_direction(Stem::Yi, Gender::Female), LuckDirection::Forward);
    }

    #[test]
    fn start_age_forward_1984() {
        // Birth 1984-02-04 23:19; next jie is Jingzhe 1984-03-05 17:2x.
        // About 29.75 days → 9 years 11 months.
        let birth = CivilTime::new(1984, 2, 4, 23, 19, 0.0);
        let age = start_age(&birth, LuckDirection::Forward).unwrap();
        assert_eq!(age.years, 9);
        assert_eq!(age.months, 11);
    }

    #[test]
    fn start_age_backward_2000() {
        // Birth 2000-01-01 12:00; previous jie is Daxue 1999-12-07 21:4x.
        // About 24.6 days → 8 years 2 months.
        let birth = CivilTime::new(2000, 1, 1, 12, 0, 0.0);
        let age = start_age(&birth, LuckDirection::Backward).unwrap();
        assert_eq!(age.years, 8);
        assert_eq!(age.months, 2);
    }

    #[test]
    fn birth_on_a_jie_starts_at_zero() {
        // A birth within a minute after the jie leaves ~0 backward distance.
        let birth = CivilTime::new(2024, 3, 5, 10, 23, 0.0);
        let age = start_age(&birth, LuckDirection::Backward).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
    }

    #[test]
    fn luck_sequence_forward() {
        let month = Pillar::from_cycle_index(2); // 丙寅
        let seq = luck_pillars(month, LuckDirection::Forward, 9, DEFAULT_LUCK_PERIODS);
        assert_eq!(seq.len(), 9);
        assert_eq!(seq[0].pillar.glyph(), "丁卯");
        assert_eq!(seq[1].pillar.glyph(), "戊辰");
        assert_eq!(seq[0].start_age, 9);
        assert_eq!(seq[0].end_age, 19);
        assert_eq!(seq[8].start_age, 89);
    }

    #[test]
    fn luck_sequence_backward() {
        let month = Pillar::from_cycle_index(2); // 丙寅
        let seq = luck_pillars(month, LuckDirection::Backward, 8, 3);
        assert_eq!(seq[0].pillar.glyph(), "乙丑");
        assert_eq!(seq[1].pillar.glyph(), "甲子");
        assert_eq!(seq[2].pillar.glyph(), "癸亥");
    }

    #[test]
    fn annual_sequence_known_years() {
        let seq = annual_pillars(2024, 3);
        assert_eq!(seq[0].pillar.glyph(), "甲辰");
        assert_eq!(seq[1].pillar.glyph(), "乙巳");
        assert_eq!(seq[2].pillar.glyph(), "丙午");
        assert_eq!(seq[2].year, 2026);
    }

    #[test]
    fn annual_sequence_1984_is_jiazi() {
        let seq = annual_pillars(1984, 1);
        assert_eq!(seq[0].pillar.glyph(), "甲子");
    }
}
