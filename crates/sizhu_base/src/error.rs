//! Error types for pillar and luck derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_ephem::EphemError;

/// Errors from Four-Pillars calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaseError {
    /// Error from the solar-term ephemeris.
    Ephem(EphemError),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephem(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for BaseError {}

impl From<EphemError> for BaseError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}
