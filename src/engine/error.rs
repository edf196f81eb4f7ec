use chrono::NaiveDate;

use crate::model::{HotelId, RoomNumber};

#[derive(Debug)]
pub enum EngineError {
    NoSuchHotel(HotelId),
    NoSuchRoom {
        hotel_id: HotelId,
        room_number: RoomNumber,
    },
    /// The requested range overlaps a committed booking; carries the
    /// first already-occupied day.
    ConflictingBooking {
        room_number: RoomNumber,
        date: NaiveDate,
    },
    DuplicateRoomNumber(RoomNumber),
    ImpossibleRange {
        from: NaiveDate,
        to: NaiveDate,
    },
    LimitExceeded(&'static str),
    WalError(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NoSuchHotel(id) => write!(f, "no such hotel: {id}"),
            EngineError::NoSuchRoom {
                hotel_id,
                room_number,
            } => write!(f, "no such room: {room_number} in hotel {hotel_id}"),
            EngineError::ConflictingBooking { room_number, date } => {
                write!(f, "room {room_number} is already booked on {date}")
            }
            EngineError::DuplicateRoomNumber(n) => write!(f, "duplicate room number: {n}"),
            EngineError::ImpossibleRange { from, to } => {
                write!(f, "impossible date range: [{from}, {to})")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            EngineError::WalError(e) => write!(f, "WAL error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}
