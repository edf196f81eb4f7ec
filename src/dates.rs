use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::model::DayRange;

/// Rejected booking-date input. Surfaced immediately; never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// A date was not tagged as UTC.
    InvalidTimezone,
    /// The checkout day is not after the arrival day.
    ImpossibleRange,
    /// The arrival day is today or earlier; only future days are bookable.
    PastRange,
}

impl std::fmt::Display for DateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateError::InvalidTimezone => write!(f, "booking dates must be in UTC"),
            DateError::ImpossibleRange => {
                write!(f, "the 'to' date must be at least one day after the 'from' date")
            }
            DateError::PastRange => write!(f, "booking dates must not be in the past"),
        }
    }
}

impl std::error::Error for DateError {}

/// Validate and canonicalize a `(from, to)` datetime pair into a
/// half-open day range, against the current UTC date.
pub fn normalize(
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
) -> Result<DayRange, DateError> {
    normalize_from(from, to, Utc::now().date_naive())
}

/// As [`normalize`], with the current day passed in so callers (and
/// tests) control the clock.
///
/// Checks run in a fixed order: UTC tag, then range shape after
/// truncation, then the past check.
pub fn normalize_from(
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
    today: NaiveDate,
) -> Result<DayRange, DateError> {
    if from.offset().local_minus_utc() != 0 || to.offset().local_minus_utc() != 0 {
        return Err(DateError::InvalidTimezone);
    }
    let from = from.date_naive();
    let to = to.date_naive();
    if to <= from {
        return Err(DateError::ImpossibleRange);
    }
    if from <= today {
        return Err(DateError::PastRange);
    }
    Ok(DayRange::new(from, to))
}
