//! The user-visible error taxonomy of `compute`.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_base::BaseError;
use sizhu_calendar::CalendarError;
use sizhu_ephem::EphemError;

/// Errors surfaced by chart computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Year outside 1900..=2100 or longitude outside [−180, 180].
    OutOfRange(String),
    /// A lunar date that does not exist in the encoded calendar.
    InvalidLunarDate(String),
    /// Structurally malformed input (field range, non-finite number,
    /// impossible civil date).
    InvalidInput(String),
    /// An internal failure. Reaching this variant is a bug, not a user
    /// outcome.
    Internal(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
            Self::InvalidLunarDate(msg) => write!(f, "invalid lunar date: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::YearOutOfRange(_) | CalendarError::BeforeFirstNewYear => {
                Self::OutOfRange(e.to_string())
            }
            _ => Self::InvalidLunarDate(e.to_string()),
        }
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::YearOutOfRange(_) => Self::OutOfRange(e.to_string()),
            _ => Self::Internal(e.to_string()),
        }
    }
}

impl From<BaseError> for ChartError {
    fn from(e: BaseError) -> Self {
        match e {
            BaseError::Ephem(inner) => inner.into(),
            _ => Self::Internal(e.to_string()),
        }
    }
}
