use async_trait::async_trait;

use crate::model::*;

use super::{Engine, EngineError};

/// The store facade: the five operations external callers consume. Any
/// backend that upholds the (room, day) occupancy-uniqueness invariant
/// and inserts a booking with its markers atomically can stand behind
/// this trait.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Create a hotel with its fixed room set; returns the new hotel id.
    async fn create_hotel(&self, name: &str, rooms: &[RoomSpec])
    -> Result<HotelId, EngineError>;

    /// Case-insensitive substring search over hotel names.
    async fn find_hotels(&self, name_fragment: &str) -> Result<Vec<HotelInfo>, EngineError>;

    /// Rooms with capacity at least `min_capacity` and no occupancy
    /// marker in `range`, in room-number order.
    async fn find_available_rooms(
        &self,
        hotel_id: HotelId,
        min_capacity: u32,
        range: DayRange,
    ) -> Result<Vec<RoomSpec>, EngineError>;

    /// Atomically create a booking and its occupancy markers.
    async fn create_booking(
        &self,
        hotel_id: HotelId,
        room_number: RoomNumber,
        range: DayRange,
    ) -> Result<BookingId, EngineError>;

    /// Point lookup of a booking.
    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, EngineError>;
}

#[async_trait]
impl HotelStore for Engine {
    async fn create_hotel(
        &self,
        name: &str,
        rooms: &[RoomSpec],
    ) -> Result<HotelId, EngineError> {
        Engine::create_hotel(self, name, rooms).await
    }

    async fn find_hotels(&self, name_fragment: &str) -> Result<Vec<HotelInfo>, EngineError> {
        Engine::find_hotels(self, name_fragment).await
    }

    async fn find_available_rooms(
        &self,
        hotel_id: HotelId,
        min_capacity: u32,
        range: DayRange,
    ) -> Result<Vec<RoomSpec>, EngineError> {
        Engine::find_available_rooms(self, hotel_id, min_capacity, range).await
    }

    async fn create_booking(
        &self,
        hotel_id: HotelId,
        room_number: RoomNumber,
        range: DayRange,
    ) -> Result<BookingId, EngineError> {
        Engine::create_booking(self, hotel_id, room_number, range).await
    }

    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, EngineError> {
        Ok(Engine::get_booking(self, id))
    }
}
