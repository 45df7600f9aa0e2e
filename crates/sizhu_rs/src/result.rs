//! The self-describing chart result record.

use serde::{Deserialize, Serialize};
use sizhu_base::{
    AnnualPillar, FiveElementAnalysis, FourPillars, HiddenStem, LuckDirection, LuckPeriod,
    Nayin, Palaces, Pillar, PillarPosition, BranchRelationHit, ShenshaHit, StartAge,
    StemRelationHit, TenGod,
};
use sizhu_calendar::LunarDate;
use sizhu_ephem::TermInstant;
use sizhu_time::{CivilTime, TrueSolarReduction};

/// One position's pillar with its ornaments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarOrnaments {
    pub position: PillarPosition,
    pub pillar: Pillar,
    pub nayin: Nayin,
    /// Ordered hidden stems of the branch.
    pub hidden: Vec<HiddenStem>,
    /// Ten god of the visible stem against the day master; absent on the
    /// day position itself.
    pub stem_god: Option<TenGod>,
    /// Ten god of each hidden stem, in table order.
    pub hidden_gods: Vec<TenGod>,
}

/// The luck block: direction, start age, ten-year and annual sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckInfo {
    pub direction: LuckDirection,
    pub start_age: StartAge,
    pub periods: Vec<LuckPeriod>,
    pub annual: Vec<AnnualPillar>,
}

/// Everything `compute` derives from one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    /// The +08 standard instant the chart was cast from (DST already
    /// removed when confirmed).
    pub civil: CivilTime,
    /// Lunar annotation of the civil date.
    pub lunar: LunarDate,
    /// The true-solar reduction actually applied.
    pub reduction: TrueSolarReduction,
    /// Latest sectional term at or before the instant.
    pub governing_jie: TermInstant,
    /// First sectional term after the instant.
    pub next_jie: TermInstant,
    /// The four pillars.
    pub pillars: FourPillars,
    /// Ornaments per position, in year/month/day/hour order.
    pub ornaments: Vec<PillarOrnaments>,
    /// Detected shensha.
    pub shensha: Vec<ShenshaHit>,
    /// Detected branch relations.
    pub branch_relations: Vec<BranchRelationHit>,
    /// Detected stem relations.
    pub stem_relations: Vec<StemRelationHit>,
    /// Luck cycles.
    pub luck: LuckInfo,
    /// The three palaces.
    pub palaces: Palaces,
    /// Five-element tally and day-master strength.
    pub elements: FiveElementAnalysis,
}
