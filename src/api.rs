use chrono::{DateTime, FixedOffset};

use crate::dates::{self, DateError};
use crate::engine::{EngineError, HotelStore};
use crate::model::*;

/// Minimum hotel name length, after trimming.
pub const MIN_HOTEL_NAME_LEN: usize = 5;

/// Minimum search text length, after trimming.
pub const MIN_SEARCH_LEN: usize = 3;

/// Every hotel is created with exactly this many rooms.
pub const REQUIRED_ROOM_COUNT: usize = 6;

/// Which facade operation failed. Carries the fixed outward-facing
/// message for that operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateHotel,
    FindHotels,
    FindAvailableRooms,
    CreateBooking,
    GetBooking,
}

impl Operation {
    pub fn message(&self) -> &'static str {
        match self {
            Operation::CreateHotel => "failed to create hotel",
            Operation::FindHotels => "failed to search hotels",
            Operation::FindAvailableRooms => "failed to get available rooms",
            Operation::CreateBooking => "failed to create booking",
            Operation::GetBooking => "failed to get booking",
        }
    }
}

/// Why a facade operation failed.
#[derive(Debug)]
pub enum Cause {
    HotelNameTooShort { minimum: usize },
    WrongRoomCount { required: usize },
    SearchTextTooShort { minimum: usize },
    Dates(DateError),
    Engine(EngineError),
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cause::HotelNameTooShort { minimum } => {
                write!(f, "the hotel name must be at least {minimum} characters")
            }
            Cause::WrongRoomCount { required } => {
                write!(f, "the hotel must have exactly {required} rooms")
            }
            Cause::SearchTextTooShort { minimum } => {
                write!(f, "the search text must be at least {minimum} characters")
            }
            Cause::Dates(e) => e.fmt(f),
            Cause::Engine(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Cause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Cause::Dates(e) => Some(e),
            Cause::Engine(e) => Some(e),
            _ => None,
        }
    }
}

/// The error envelope every facade operation fails with: a fixed
/// per-operation message, with the original cause preserved underneath.
/// Message text is presentation only; callers match on `operation` and
/// `cause`.
#[derive(Debug)]
pub struct ApiError {
    pub operation: Operation,
    pub cause: Cause,
}

impl ApiError {
    fn new(operation: Operation, cause: Cause) -> Self {
        Self { operation, cause }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operation.message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// The validated business layer above the store: trims and
/// length-checks text inputs, fixes the room count, and runs booking
/// dates through the normalizer before they reach the engine.
pub struct HotelApi<S> {
    store: S,
}

impl<S: HotelStore> HotelApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create_hotel(
        &self,
        name: &str,
        rooms: &[RoomSpec],
    ) -> Result<HotelId, ApiError> {
        let op = Operation::CreateHotel;
        let name = name.trim();
        if name.chars().count() < MIN_HOTEL_NAME_LEN {
            return Err(ApiError::new(
                op,
                Cause::HotelNameTooShort {
                    minimum: MIN_HOTEL_NAME_LEN,
                },
            ));
        }
        if rooms.len() != REQUIRED_ROOM_COUNT {
            return Err(ApiError::new(
                op,
                Cause::WrongRoomCount {
                    required: REQUIRED_ROOM_COUNT,
                },
            ));
        }
        self.store
            .create_hotel(name, rooms)
            .await
            .map_err(|e| ApiError::new(op, Cause::Engine(e)))
    }

    pub async fn find_hotels(&self, name_or_part: &str) -> Result<Vec<HotelInfo>, ApiError> {
        let op = Operation::FindHotels;
        let text = name_or_part.trim();
        if text.chars().count() < MIN_SEARCH_LEN {
            return Err(ApiError::new(
                op,
                Cause::SearchTextTooShort {
                    minimum: MIN_SEARCH_LEN,
                },
            ));
        }
        self.store
            .find_hotels(text)
            .await
            .map_err(|e| ApiError::new(op, Cause::Engine(e)))
    }

    pub async fn find_available_rooms(
        &self,
        hotel_id: HotelId,
        min_capacity: u32,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<Vec<RoomSpec>, ApiError> {
        let op = Operation::FindAvailableRooms;
        let range = dates::normalize(from, to).map_err(|e| ApiError::new(op, Cause::Dates(e)))?;
        self.store
            .find_available_rooms(hotel_id, min_capacity, range)
            .await
            .map_err(|e| ApiError::new(op, Cause::Engine(e)))
    }

    pub async fn create_booking(
        &self,
        hotel_id: HotelId,
        room_number: RoomNumber,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<BookingId, ApiError> {
        let op = Operation::CreateBooking;
        let range = dates::normalize(from, to).map_err(|e| ApiError::new(op, Cause::Dates(e)))?;
        self.store
            .create_booking(hotel_id, room_number, range)
            .await
            .map_err(|e| ApiError::new(op, Cause::Engine(e)))
    }

    pub async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, ApiError> {
        self.store
            .get_booking(id)
            .await
            .map_err(|e| ApiError::new(Operation::GetBooking, Cause::Engine(e)))
    }
}
