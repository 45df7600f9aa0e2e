//! Chinese lunisolar calendar, 1900–2100.
//!
//! This crate provides:
//! - The encoded lunar year table (leap month, month lengths) and the
//!   spring-festival (lunar New Year) table
//! - `solar_to_lunar` / `lunar_to_solar`, bijective over the encoded range
//!
//! The calendar layer is independent of the astronomy layer: the month
//! structure is fixed by the tables, not recomputed from the Moon.

pub mod error;
pub mod lunisolar;
pub mod tables;

pub use error::CalendarError;
pub use lunisolar::{lunar_to_solar, solar_to_lunar, LunarDate};
pub use tables::{
    leap_month, leap_month_days, lunar_month_days, lunar_year_days, spring_festival,
    LUNAR_YEARS, LUNAR_YEAR_MAX, LUNAR_YEAR_MIN, SPRING_FESTIVALS,
};
