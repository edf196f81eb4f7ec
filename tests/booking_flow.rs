//! End-to-end flow through `StoreConfig` and `HotelApi` on both
//! backends.

use chrono::{DateTime, FixedOffset, Utc};

use innkeep::api::{Cause, Operation};
use innkeep::{EngineError, HotelApi, RoomSpec, StoreConfig};

fn utc_in_days(n: u64) -> DateTime<FixedOffset> {
    (Utc::now() + chrono::Days::new(n)).fixed_offset()
}

fn california_rooms() -> Vec<RoomSpec> {
    [(101, 2), (102, 3), (103, 1), (201, 2), (202, 1), (203, 5)]
        .into_iter()
        .map(|(number, capacity)| RoomSpec { number, capacity })
        .collect()
}

#[tokio::test]
async fn books_hotel_california_end_to_end() {
    let dir = std::env::temp_dir().join("innkeep_e2e_california");
    let _ = std::fs::remove_dir_all(&dir);

    let config = StoreConfig::from_json(&format!(
        r#"{{"backend":"wal","data_dir":"{}"}}"#,
        dir.display()
    ))
    .unwrap();
    let api = HotelApi::new(config.open().unwrap());

    api.create_hotel("Hotel California", &california_rooms())
        .await
        .unwrap();
    let hotels = api.find_hotels("hotel calif").await.unwrap();
    assert_eq!(hotels.len(), 1);
    let hotel = hotels[0].id;

    // Seven nights starting five days from now, at least two guests
    let from = utc_in_days(5);
    let to = utc_in_days(12);
    let rooms = api.find_available_rooms(hotel, 2, from, to).await.unwrap();
    let capacities: Vec<u32> = rooms.iter().map(|r| r.capacity).collect();
    assert_eq!(capacities, vec![2, 2, 5]);

    let chosen = rooms[0].number;
    let booking_id = api.create_booking(hotel, chosen, from, to).await.unwrap();
    assert!(booking_id > 0);

    // The booked room drops out of the same query
    let rooms = api.find_available_rooms(hotel, 2, from, to).await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert!(rooms.iter().all(|r| r.number != chosen));

    // An overlapping stay in the same room is rejected
    let err = api
        .create_booking(hotel, chosen, utc_in_days(6), utc_in_days(10))
        .await
        .unwrap_err();
    assert_eq!(err.operation, Operation::CreateBooking);
    assert!(matches!(
        err.cause,
        Cause::Engine(EngineError::ConflictingBooking { .. })
    ));

    // Same-day turnover: a stay starting on the checkout day succeeds
    api.create_booking(hotel, chosen, to, utc_in_days(15))
        .await
        .unwrap();

    // Round-trip the original booking
    let booking = api.get_booking(booking_id).await.unwrap().unwrap();
    assert_eq!(booking.hotel_id, hotel);
    assert_eq!(booking.room_number, chosen);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn duplicate_room_numbers_leave_no_hotel_behind() {
    let api = HotelApi::new(StoreConfig::Memory.open().unwrap());

    let mut rooms = california_rooms();
    rooms[3].number = 101; // collides with the first room

    let err = api.create_hotel("Hotel Paradox", &rooms).await.unwrap_err();
    assert_eq!(err.operation, Operation::CreateHotel);
    assert!(matches!(
        err.cause,
        Cause::Engine(EngineError::DuplicateRoomNumber(101))
    ));

    // Nothing was persisted
    assert!(api.find_hotels("paradox").await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_backend_has_identical_semantics() {
    let api = HotelApi::new(StoreConfig::Memory.open().unwrap());

    let hotel = api
        .create_hotel("The Grand Budapest", &california_rooms())
        .await
        .unwrap();
    let booking = api
        .create_booking(hotel, 203, utc_in_days(3), utc_in_days(6))
        .await
        .unwrap();

    let err = api
        .create_booking(hotel, 203, utc_in_days(4), utc_in_days(8))
        .await
        .unwrap_err();
    assert!(matches!(
        err.cause,
        Cause::Engine(EngineError::ConflictingBooking { .. })
    ));

    assert!(api.get_booking(booking).await.unwrap().is_some());
    assert!(api.get_booking(booking + 1).await.unwrap().is_none());
}
