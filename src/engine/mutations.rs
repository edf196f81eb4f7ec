use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::sync::RwLock;

use crate::limits::*;
use crate::model::*;
use crate::observability;

use super::conflict::{check_no_conflict, validate_range};
use super::{Engine, EngineError};

impl Engine {
    /// Create a hotel and its fixed room set in one operation.
    ///
    /// A duplicate room number anywhere in the request fails the whole
    /// operation with `DuplicateRoomNumber`; no hotel is persisted.
    pub async fn create_hotel(
        &self,
        name: &str,
        rooms: &[RoomSpec],
    ) -> Result<HotelId, EngineError> {
        if name.is_empty() {
            return Err(EngineError::LimitExceeded("hotel name must not be empty"));
        }
        if name.len() > MAX_HOTEL_NAME_LEN {
            return Err(EngineError::LimitExceeded("hotel name too long"));
        }
        if rooms.len() > MAX_ROOMS_PER_HOTEL {
            return Err(EngineError::LimitExceeded("too many rooms"));
        }
        if self.hotels.len() >= MAX_HOTELS {
            return Err(EngineError::LimitExceeded("too many hotels"));
        }

        let mut room_map = BTreeMap::new();
        for spec in rooms {
            let room = RoomState::new(spec.number, spec.capacity);
            if room_map.insert(spec.number, room).is_some() {
                return Err(EngineError::DuplicateRoomNumber(spec.number));
            }
        }

        let id = self.hotel_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let event = Event::HotelCreated {
            id,
            name: name.to_string(),
            rooms: rooms.to_vec(),
        };
        self.wal_append(&event).await?;
        self.hotels.insert(
            id,
            Arc::new(RwLock::new(HotelState::new(id, name.to_string(), room_map))),
        );
        metrics::counter!(observability::HOTELS_CREATED_TOTAL).increment(1);
        tracing::debug!(hotel_id = id, rooms = rooms.len(), "hotel created");
        Ok(id)
    }

    /// Create a booking and its per-night occupancy markers as one
    /// atomic unit.
    ///
    /// The hotel's write lock is held across conflict check, WAL append,
    /// and marker insert, so racing callers on overlapping ranges see
    /// exactly one success and one `ConflictingBooking`. A WAL failure
    /// aborts before any in-memory mutation.
    pub async fn create_booking(
        &self,
        hotel_id: HotelId,
        room_number: RoomNumber,
        range: DayRange,
    ) -> Result<BookingId, EngineError> {
        validate_range(&range)?;
        let hotel = self
            .get_hotel(hotel_id)
            .ok_or(EngineError::NoSuchHotel(hotel_id))?;
        let mut guard = hotel.write().await;

        let room = guard.room(room_number).ok_or(EngineError::NoSuchRoom {
            hotel_id,
            room_number,
        })?;
        if let Err(e) = check_no_conflict(room, &range) {
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            tracing::debug!(hotel_id, room_number, "booking conflict");
            return Err(e);
        }

        let id = self.booking_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let event = Event::BookingCreated {
            id,
            hotel_id,
            room_number,
            range,
        };
        self.wal_append(&event).await?;

        let room = guard.room_mut(room_number).ok_or(EngineError::NoSuchRoom {
            hotel_id,
            room_number,
        })?;
        // The write lock has been held since the conflict check; the
        // range cannot have been taken in between.
        room.occupy(&range)
            .map_err(|date| EngineError::ConflictingBooking { room_number, date })?;

        self.bookings.insert(
            id,
            Booking {
                id,
                hotel_id,
                room_number,
                range,
            },
        );
        metrics::counter!(observability::BOOKINGS_TOTAL).increment(1);
        tracing::debug!(booking_id = id, hotel_id, room_number, "booking created");
        Ok(id)
    }
}
