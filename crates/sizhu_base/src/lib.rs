//! Derived Four-Pillars calculations built on the time and ephemeris layers.
//!
//! This crate provides:
//! - Stems, branches, elements and the sexagenary `Pillar` cycle
//! - Hidden stems per branch, with roles and weights
//! - Ten-god classification against the day master
//! - Nayin labels for the sixty pillars
//! - Shensha detection (nine rules)
//! - Branch relations (seven kinds) and stem relations
//! - Year/month/day/hour pillar derivation from civil instants
//! - Luck direction, start age, ten-year and annual sequences
//! - The three palaces
//! - Five-element tally and day-master strength

pub mod elements;
pub mod error;
pub mod ganzhi;
pub mod hidden;
pub mod luck;
pub mod nayin;
pub mod palaces;
pub mod pillars;
pub mod relations;
pub mod shensha;
pub mod ten_gods;

pub use elements::{
    analyze_elements, analyze_elements_default, ElementWeights, FiveElementAnalysis,
    StrengthStatus, StrengthThresholds,
};
pub use error::BaseError;
pub use ganzhi::{
    Branch, Element, Pillar, Polarity, Stem, ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS,
};
pub use hidden::{hidden_stems, primary_stem, HiddenRole, HiddenStem};
pub use luck::{
    annual_pillars, luck_direction, luck_pillars, start_age, AnnualPillar, Gender,
    LuckDirection, LuckPeriod, StartAge, DEFAULT_LUCK_PERIODS,
};
pub use nayin::{nayin, Nayin};
pub use palaces::{ming_gong, palaces, shen_gong, tai_yuan, Palaces};
pub use pillars::{
    day_pillar, effective_year, four_pillars, hour_branch, hour_pillar, month_pillar,
    year_pillar, FourPillars, PillarPosition, ALL_POSITIONS, DAY_EPOCH,
    DAY_EPOCH_CYCLE_INDEX,
};
pub use relations::{
    branch_relations, stem_relations, BranchRelationHit, BranchRelationKind, StemRelationHit,
    StemRelationKind,
};
pub use shensha::{detect_shensha, kongwang_branches, Shensha, ShenshaHit, ALL_SHENSHA};
pub use ten_gods::{ten_god, TenGod};
