use crate::model::*;
use crate::observability;

use super::availability::available_rooms;
use super::conflict::validate_range;
use super::{Engine, EngineError, SharedHotelState};

impl Engine {
    /// Case-insensitive substring search over hotel names, ordered by
    /// hotel id.
    pub async fn find_hotels(&self, fragment: &str) -> Result<Vec<HotelInfo>, EngineError> {
        let needle = fragment.to_lowercase();
        let states: Vec<SharedHotelState> =
            self.hotels.iter().map(|e| e.value().clone()).collect();

        let mut out = Vec::new();
        for state in states {
            let guard = state.read().await;
            if guard.name.to_lowercase().contains(&needle) {
                out.push(HotelInfo {
                    id: guard.id,
                    name: guard.name.clone(),
                    rooms: guard.room_specs(),
                });
            }
        }
        out.sort_by_key(|h| h.id);
        Ok(out)
    }

    /// Free rooms for a hotel, minimum capacity, and day range.
    ///
    /// A point-in-time snapshot under the hotel's read lock: a returned
    /// room may be taken by the time a booking attempt runs; correctness
    /// is enforced at booking time, not here. An unknown hotel yields an
    /// empty list.
    pub async fn find_available_rooms(
        &self,
        hotel_id: HotelId,
        min_capacity: u32,
        range: DayRange,
    ) -> Result<Vec<RoomSpec>, EngineError> {
        validate_range(&range)?;
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);
        let hotel = match self.get_hotel(hotel_id) {
            Some(h) => h,
            None => return Ok(Vec::new()),
        };
        let guard = hotel.read().await;
        Ok(available_rooms(&guard, min_capacity, &range))
    }

    /// Point lookup. `None` for an unknown id, never a default booking.
    pub fn get_booking(&self, id: BookingId) -> Option<Booking> {
        self.bookings.get(&id).map(|e| e.value().clone())
    }

    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}
