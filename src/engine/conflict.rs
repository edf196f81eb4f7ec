use crate::limits::MAX_BOOKING_NIGHTS;
use crate::model::{DayRange, RoomState};

use super::EngineError;

/// Reject ranges the engine must never expand into occupancy markers.
pub(crate) fn validate_range(range: &DayRange) -> Result<(), EngineError> {
    if range.to <= range.from {
        return Err(EngineError::ImpossibleRange {
            from: range.from,
            to: range.to,
        });
    }
    if range.num_nights() > MAX_BOOKING_NIGHTS {
        return Err(EngineError::LimitExceeded("date range too wide"));
    }
    Ok(())
}

/// Fail if any occupancy marker exists inside `[range.from, range.to)`.
/// A marker on the checkout day is not a conflict.
pub(crate) fn check_no_conflict(room: &RoomState, range: &DayRange) -> Result<(), EngineError> {
    match room.first_occupied_in(range) {
        Some(date) => Err(EngineError::ConflictingBooking {
            room_number: room.number,
            date,
        }),
        None => Ok(()),
    }
}
