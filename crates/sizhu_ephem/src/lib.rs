//! Solar ephemeris for the Four Pillars engine.
//!
//! This crate provides:
//! - Reduced VSOP87 Earth heliocentric series
//! - IAU 1980 nutation (63 terms)
//! - Apparent geocentric solar longitude (FK5 + nutation + aberration)
//! - The 24 solar-term instants via Newton iteration, accurate to well
//!   under a minute across 1900–2100
//!
//! All tables are static and every computation is pure. Series sums run in
//! declared order so results are bit-identical across runs.

pub mod error;
pub mod nutation;
pub mod solar;
pub mod terms;
pub mod vsop87;

pub use error::EphemError;
pub use nutation::{fundamental_arguments, nutation, nutation_longitude_deg};
pub use solar::{apparent_solar_longitude_deg, normalize_360};
pub use terms::{
    all_solar_terms, prior_and_next_jie, solar_term_instant, SolarTerm, TermInstant, ALL_TERMS,
    TERM_YEAR_MAX, TERM_YEAR_MIN,
};
pub use vsop87::earth_heliocentric;
