// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog persistence tests: users, hotels, rooms.

use crate::tests::seed_catalog;
use crate::{Persistence, PersistenceError};
use staybook_domain::{HotelStatus, Role, RoomStatus, UserStatus};

#[test]
fn test_user_round_trip() {
    let mut db = Persistence::new_in_memory().unwrap();

    let user_id = db
        .create_user("City Admin", Role::CityAdmin, UserStatus::Active, Some(100))
        .unwrap();

    let user = db.get_user(user_id).unwrap().expect("user exists");
    assert_eq!(user.user_id, user_id);
    assert_eq!(user.display_name, "City Admin");
    assert_eq!(user.role, Role::CityAdmin);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.city_id, Some(100));
}

#[test]
fn test_missing_records_are_none() {
    let mut db = Persistence::new_in_memory().unwrap();

    assert!(db.get_user(42).unwrap().is_none());
    assert!(db.get_hotel(42).unwrap().is_none());
    assert!(db.get_room(42).unwrap().is_none());
    assert!(db.get_booking(42).unwrap().is_none());
}

#[test]
fn test_hotel_round_trip() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded = seed_catalog(&mut db);

    let hotel = db.get_hotel(seeded.hotel_id).unwrap().expect("hotel exists");
    assert_eq!(hotel.owner_id, seeded.owner_id);
    assert_eq!(hotel.city_id, 100);
    assert_eq!(hotel.name, "Seaside Grand");
    assert_eq!(hotel.status, HotelStatus::Approved);
    assert!(hotel.is_visible);
    assert!(hotel.is_publicly_bookable());
}

#[test]
fn test_duplicate_hotel_name_per_owner_and_city_rejected() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded = seed_catalog(&mut db);

    let result = db.create_hotel(
        seeded.owner_id,
        100,
        "Seaside Grand",
        HotelStatus::Pending,
        true,
    );
    assert!(matches!(result, Err(PersistenceError::DuplicateRecord(_))));

    // The same name in a different city is fine.
    let other_city = db.create_hotel(
        seeded.owner_id,
        200,
        "Seaside Grand",
        HotelStatus::Pending,
        true,
    );
    assert!(other_city.is_ok());
}

#[test]
fn test_room_round_trip() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded = seed_catalog(&mut db);

    let room = db.get_room(seeded.room_id).unwrap().expect("room exists");
    assert_eq!(room.hotel_id, seeded.hotel_id);
    assert_eq!(room.name, "Deluxe King");
    assert_eq!(room.base_price, 100);
    assert_eq!(room.currency, "USD");
    assert_eq!(room.capacity, 4);
    assert_eq!(room.status, RoomStatus::Visible);
}

#[test]
fn test_duplicate_room_name_is_case_insensitive() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded = seed_catalog(&mut db);

    let result = db.create_room(
        seeded.hotel_id,
        "DELUXE KING",
        150,
        "USD",
        2,
        RoomStatus::Visible,
    );
    assert!(matches!(result, Err(PersistenceError::DuplicateRecord(_))));

    // The same name under another hotel is fine.
    let other_hotel = db
        .create_hotel(seeded.owner_id, 100, "Harbor View", HotelStatus::Approved, true)
        .unwrap();
    let result = db.create_room(
        other_hotel,
        "Deluxe King",
        150,
        "USD",
        2,
        RoomStatus::Visible,
    );
    assert!(result.is_ok());
}
