//! High-level Four-Pillars chart computation.
//!
//! One call does everything: `compute` takes a normalized input record
//! (civil or lunar birth moment, sex, longitude, convention flags) and
//! returns the full self-describing chart result — pillars, ornaments,
//! relations, luck cycles, palaces and the five-element analysis.
//!
//! # Quick start
//!
//! ```rust
//! use sizhu_rs::*;
//!
//! let input = ChartInput {
//!     date_type: DateType::Solar,
//!     year: 2000, month: 1, day: 1,
//!     is_leap_month: false,
//!     hour: 12, minute: 0,
//!     time_type: TimeType::Standard,
//!     gender: Gender::Male,
//!     longitude: 120.0,
//!     dst_confirmed: false,
//!     early_rat_split: false,
//! };
//! let chart = compute(&input).unwrap();
//! assert_eq!(chart.pillars.day.glyph(), "戊午");
//! ```

pub mod compute;
pub mod error;
pub mod input;
pub mod result;

// Primary re-exports — users should only need `use sizhu_rs::*`.
pub use compute::compute;
pub use error::ChartError;
pub use input::{ChartInput, DateType, TimeType, YEAR_MAX, YEAR_MIN};
pub use result::{ChartResult, LuckInfo, PillarOrnaments};

// Re-export the building-block types the result record is made of, so
// callers don't need to depend on the lower crates directly.
pub use sizhu_base::{
    AnnualPillar, Branch, BranchRelationHit, BranchRelationKind, Element, FiveElementAnalysis,
    FourPillars, Gender, HiddenRole, HiddenStem, LuckDirection, LuckPeriod, Nayin, Palaces,
    Pillar, PillarPosition, Shensha, ShenshaHit, StartAge, Stem, StemRelationHit,
    StemRelationKind, StrengthStatus, TenGod,
};
pub use sizhu_calendar::LunarDate;
pub use sizhu_ephem::{SolarTerm, TermInstant};
pub use sizhu_time::{CivilTime, TrueSolarReduction};
