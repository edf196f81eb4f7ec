use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Surrogate hotel id, assigned from a monotonic sequence. Always > 0.
pub type HotelId = u64;

/// Surrogate booking id, assigned from a monotonic sequence. Always > 0.
pub type BookingId = u64;

/// Room number. Unique within one hotel, not globally.
pub type RoomNumber = u32;

/// Half-open calendar-day range `[from, to)`. The `to` day is the
/// checkout day and is never counted as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DayRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        debug_assert!(from < to, "DayRange from must be before to");
        Self { from, to }
    }

    pub fn num_nights(&self) -> i64 {
        self.to.signed_duration_since(self.from).num_days()
    }

    /// Every occupied day of the range: `from` inclusive, `to` exclusive.
    pub fn nights(self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take_while(move |d| *d < self.to)
    }

    pub fn overlaps(&self, other: &DayRange) -> bool {
        self.from < other.to && other.from < self.to
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.from <= day && day < self.to
    }
}

/// A room number/capacity pair: the inventory unit passed to
/// `create_hotel` and the result row of availability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub number: RoomNumber,
    pub capacity: u32,
}

/// Live state of one room: fixed attributes plus the set of occupied
/// days. The set grows only through the booking transaction and is the
/// sole record of busy state — bookings are never consulted for
/// availability.
#[derive(Debug, Clone)]
pub struct RoomState {
    pub number: RoomNumber,
    pub capacity: u32,
    occupied: BTreeSet<NaiveDate>,
}

impl RoomState {
    pub fn new(number: RoomNumber, capacity: u32) -> Self {
        Self {
            number,
            capacity,
            occupied: BTreeSet::new(),
        }
    }

    /// First occupancy marker inside `[range.from, range.to)`, if any.
    pub fn first_occupied_in(&self, range: &DayRange) -> Option<NaiveDate> {
        self.occupied.range(range.from..range.to).next().copied()
    }

    pub fn is_free(&self, range: &DayRange) -> bool {
        self.first_occupied_in(range).is_none()
    }

    /// Insert one occupancy marker per night of `range`. Fails with the
    /// first already-occupied day, inserting nothing; the (room, day)
    /// pair never repeats.
    pub fn occupy(&mut self, range: &DayRange) -> Result<(), NaiveDate> {
        if let Some(day) = self.first_occupied_in(range) {
            return Err(day);
        }
        for day in range.nights() {
            self.occupied.insert(day);
        }
        Ok(())
    }

    pub fn occupied_days(&self) -> usize {
        self.occupied.len()
    }
}

/// Live state of one hotel. Rooms are keyed by number, so iteration
/// yields them in the stable by-number order queries return.
#[derive(Debug, Clone)]
pub struct HotelState {
    pub id: HotelId,
    pub name: String,
    pub rooms: BTreeMap<RoomNumber, RoomState>,
}

impl HotelState {
    pub fn new(id: HotelId, name: String, rooms: BTreeMap<RoomNumber, RoomState>) -> Self {
        Self { id, name, rooms }
    }

    pub fn room(&self, number: RoomNumber) -> Option<&RoomState> {
        self.rooms.get(&number)
    }

    pub fn room_mut(&mut self, number: RoomNumber) -> Option<&mut RoomState> {
        self.rooms.get_mut(&number)
    }

    pub fn room_specs(&self) -> Vec<RoomSpec> {
        self.rooms
            .values()
            .map(|r| RoomSpec {
                number: r.number,
                capacity: r.capacity,
            })
            .collect()
    }
}

/// An immutable booking record. `range.to` is the checkout day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub hotel_id: HotelId,
    pub room_number: RoomNumber,
    pub range: DayRange,
}

/// The event types — flat, no nesting. This is the WAL record format.
/// Nothing in this store is ever deleted or updated, so there are no
/// tombstone variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    HotelCreated {
        id: HotelId,
        name: String,
        rooms: Vec<RoomSpec>,
    },
    BookingCreated {
        id: BookingId,
        hotel_id: HotelId,
        room_number: RoomNumber,
        range: DayRange,
    },
}

// ── Query result types ───────────────────────────────────────────

/// Snapshot of a hotel as returned by `find_hotels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelInfo {
    pub id: HotelId,
    pub name: String,
    pub rooms: Vec<RoomSpec>,
}
