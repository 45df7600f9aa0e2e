//! Four-pillar derivation from civil instants.
//!
//! Boundaries are astronomical: the year turns at Start-of-Spring, months at
//! the sectional terms. Term comparisons run against the standard +08
//! instant; the true-solar reduced instant governs the hour sector, the
//! 23:00 early-rat split and the day date.

use serde::{Deserialize, Serialize};
use sizhu_ephem::{prior_and_next_jie, solar_term_instant, SolarTerm};
use sizhu_time::CivilTime;

use crate::error::BaseError;
use crate::ganzhi::{Branch, Pillar, Stem};

/// The four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// The four pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The day master (day stem).
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }
}

/// Day-count epoch of the sexagenary day cycle.
pub const DAY_EPOCH: CivilTime = CivilTime {
    year: 1900,
    month: 1,
    day: 31,
    hour: 0,
    minute: 0,
    second: 0.0,
};

/// Cycle index of the epoch day (1900-01-31 = 甲辰).
///
/// Anchored to the continuous historical cycle (1949-10-01 and 2000-01-07
/// are 甲子 days).
pub const DAY_EPOCH_CYCLE_INDEX: i64 = 40;

/// Month branch per sectional term, indexed by `term.index() / 2`
/// (小寒→丑, 立春→寅, …, 大雪→子).
const JIE_MONTH_BRANCH: [Branch; 12] = [
    Branch::Chou, // 小寒
    Branch::Yin,  // 立春
    Branch::Mao,  // 惊蛰
    Branch::Chen, // 清明
    Branch::Si,   // 立夏
    Branch::Wu,   // 芒种
    Branch::Wei,  // 小暑
    Branch::Shen, // 立秋
    Branch::You,  // 白露
    Branch::Xu,   // 寒露
    Branch::Hai,  // 立冬
    Branch::Zi,   // 大雪
];

/// Effective sexagenary year of an instant: the civil year once
/// Start-of-Spring has passed, otherwise the year before.
pub fn effective_year(standard: &CivilTime) -> Result<i32, BaseError> {
    let lichun = solar_term_instant(standard.year, SolarTerm::LiChun)?;
    Ok(if *standard >= lichun {
        standard.year
    } else {
        standard.year - 1
    })
}

/// Year pillar: stem and branch both count from year 4 (甲子).
pub fn year_pillar(standard: &CivilTime) -> Result<Pillar, BaseError> {
    let eff = effective_year(standard)? as i64;
    Ok(Pillar {
        stem: Stem::from_index(eff - 4),
        branch: Branch::from_index(eff - 4),
    })
}

/// Five-Tiger rule: stem of the 寅 month for a given year stem.
fn tiger_base_stem(year_stem: Stem) -> i64 {
    ((year_stem.index() as i64 % 5) * 2 + 2) % 10
}

/// Month pillar: the latest sectional term at or before the instant fixes
/// the branch; the stem follows the Five-Tiger rule from the year stem.
pub fn month_pillar(standard: &CivilTime, year_stem: Stem) -> Result<Pillar, BaseError> {
    let (prior, _) = prior_and_next_jie(standard)?;
    let branch = JIE_MONTH_BRANCH[(prior.term.index() / 2) as usize];
    let month_offset = (branch.index() as i64 - Branch::Yin.index() as i64).rem_euclid(12);
    let stem = Stem::from_index(tiger_base_stem(year_stem) + month_offset);
    Ok(Pillar { stem, branch })
}

/// Day pillar from the reduced instant.
///
/// `early_rat_split` moves 23:00–23:59 into the following day.
pub fn day_pillar(reduced: &CivilTime, early_rat_split: bool) -> Pillar {
    let mut n = reduced.days_since(&DAY_EPOCH) + DAY_EPOCH_CYCLE_INDEX;
    if early_rat_split && reduced.hour >= 23 {
        n += 1;
    }
    Pillar {
        stem: Stem::from_index(n),
        branch: Branch::from_index(n),
    }
}

/// Branch of the two-hour sector containing the reduced instant
/// (23:00–00:59 → 子, 01:00–02:59 → 丑, …).
pub fn hour_branch(reduced: &CivilTime) -> Branch {
    Branch::from_index(((reduced.hour as i64 + 1) / 2) % 12)
}

/// Hour pillar: sector branch plus the Five-Rat stem rule from the day stem.
pub fn hour_pillar(reduced: &CivilTime, day_stem: Stem) -> Pillar {
    let branch = hour_branch(reduced);
    let rat_offset = (day_stem.index() as i64 % 5) * 2;
    Pillar {
        stem: Stem::from_index(branch.index() as i64 + rat_offset),
        branch,
    }
}

/// Derive all four pillars.
///
/// `standard` is the +08 wall clock used for term boundaries; `reduced` is
/// the true-solar instant used for the day and hour.
pub fn four_pillars(
    standard: &CivilTime,
    reduced: &CivilTime,
    early_rat_split: bool,
) -> Result<FourPillars, BaseError> {
    let year = year_pillar(standard)?;
    let month = month_pillar(standard, year.stem)?;
    let day = day_pillar(reduced, early_rat_split);
    let hour = hour_pillar(reduced, day.stem);
    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}
