//! Error types for ephemeris computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar-term computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested year is outside the supported ephemeris range.
    YearOutOfRange(i32),
    /// The Newton iteration failed to converge.
    NoConvergence(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} outside supported range"),
            Self::NoConvergence(what) => write!(f, "no convergence: {what}"),
        }
    }
}

impl Error for EphemError {}
