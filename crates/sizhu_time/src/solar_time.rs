//! Equation of time and true-solar-time reduction.
//!
//! The reduction shifts a +08 wall-clock reading onto the apparent solar
//! clock of the birth meridian: a fixed 4 min/° longitude offset from the
//! 120°E reference meridian, plus the equation of time.

use serde::{Deserialize, Serialize};

use crate::civil::CivilTime;

/// Reference meridian of the +08 civil clock, degrees east.
pub const REFERENCE_MERIDIAN_DEG: f64 = 120.0;

/// Equation of time in minutes for a 1-based ordinal day of the year.
///
/// `B = 2π(d − 81)/365.25`; `EoT = 9.87 sin 2B − 7.53 cos B − 1.5 sin B`.
/// Stays within [−15, +17] minutes for every day of the year.
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = std::f64::consts::TAU * (day_of_year as f64 - 81.0) / 365.25;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Mean-to-apparent offset of a meridian, minutes: `(λ − 120) × 4`.
pub fn longitude_offset_minutes(longitude_deg: f64) -> f64 {
    (longitude_deg - REFERENCE_MERIDIAN_DEG) * 4.0
}

/// A true-solar-time reduction, keeping both instants and both components.
///
/// Invariant: `reduced = original + (longitude_offset + equation_of_time)
/// × 60 s`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrueSolarReduction {
    pub original: CivilTime,
    pub reduced: CivilTime,
    pub longitude_offset_minutes: f64,
    pub equation_of_time_minutes: f64,
}

/// Reduce a +08 wall-clock reading to apparent solar time at `longitude_deg`.
pub fn reduce(original: CivilTime, longitude_deg: f64) -> TrueSolarReduction {
    let offset = longitude_offset_minutes(longitude_deg);
    let eot = equation_of_time_minutes(original.day_of_year());
    TrueSolarReduction {
        original,
        reduced: original.add_minutes(offset + eot),
        longitude_offset_minutes: offset,
        equation_of_time_minutes: eot,
    }
}

/// The identity reduction, for inputs already expressed in apparent solar
/// time.
pub fn already_reduced(original: CivilTime) -> TrueSolarReduction {
    TrueSolarReduction {
        original,
        reduced: original,
        longitude_offset_minutes: 0.0,
        equation_of_time_minutes: 0.0,
    }
}
