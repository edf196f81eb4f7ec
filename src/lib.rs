//! Hotel room-inventory and booking-consistency engine.
//!
//! Computes free rooms for half-open calendar-day ranges and creates
//! bookings under a per-hotel critical section so that no room is ever
//! double-booked, with an append-only WAL for durability. [`HotelApi`]
//! layers the business rules (input validation, date normalization, the
//! outward error envelope) on top of the [`HotelStore`] facade.

pub mod api;
pub mod config;
pub mod dates;
pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
mod wal;

pub use api::{ApiError, HotelApi};
pub use config::StoreConfig;
pub use dates::{DateError, normalize};
pub use engine::{Engine, EngineError, HotelStore};
pub use model::{Booking, BookingId, DayRange, HotelId, HotelInfo, RoomNumber, RoomSpec};
