//! Hard caps bounding WAL record size and in-memory growth. Inputs past
//! these limits are rejected before anything is persisted.

pub const MAX_HOTEL_NAME_LEN: usize = 256;

pub const MAX_ROOMS_PER_HOTEL: usize = 1024;

pub const MAX_HOTELS: usize = 100_000;

/// Caps the number of occupancy markers a single booking can produce.
pub const MAX_BOOKING_NIGHTS: i64 = 1_000;
