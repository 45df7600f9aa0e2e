//! Civil time handling for the Four Pillars engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - The `CivilTime` type: wall-clock fields in the fixed +08 offset
//! - The ΔT (TT − UT) piecewise model
//! - Equation of time and true-solar-time reduction
//! - The 1986–1991 DST window table and correction
//!
//! Everything here is pure: no I/O, no state, no ambient configuration.

pub mod civil;
pub mod delta_t;
pub mod dst;
pub mod julian;
pub mod solar_time;

pub use civil::CivilTime;
pub use delta_t::delta_t_seconds;
pub use dst::{apply_dst_correction, is_dst_active, DstWindow, DST_WINDOWS};
pub use julian::{
    calendar_to_jd, jd_to_calendar, jd_to_centuries, DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY,
};
pub use solar_time::{
    already_reduced, equation_of_time_minutes, longitude_offset_minutes, reduce,
    TrueSolarReduction, REFERENCE_MERIDIAN_DEG,
};
