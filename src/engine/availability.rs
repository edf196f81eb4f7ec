use crate::model::{DayRange, HotelState, RoomSpec};

// ── Availability Algorithm ────────────────────────────────────────

/// Rooms of `hotel` with capacity at least `min_capacity` and no
/// occupancy marker inside the half-open `range`. A marker on the
/// checkout day does not block, so a new stay may begin on the day
/// another one ends.
///
/// Rooms come back in room-number order (BTreeMap iteration); capacity
/// imposes no ordering.
pub fn available_rooms(hotel: &HotelState, min_capacity: u32, range: &DayRange) -> Vec<RoomSpec> {
    hotel
        .rooms
        .values()
        .filter(|room| room.capacity >= min_capacity && room.is_free(range))
        .map(|room| RoomSpec {
            number: room.number,
            capacity: room.capacity,
        })
        .collect()
}
