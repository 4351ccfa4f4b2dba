// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod catalog_tests;

use crate::Persistence;
use staybook::{BookingDraft, OwnershipChain, PreparedBooking, prepare_booking};
use staybook_domain::{HotelStatus, Role, RoomStatus, UserStatus};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid test date")
}

/// IDs of a freshly seeded owner/customer/hotel/room catalog.
pub struct SeededCatalog {
    pub owner_id: i64,
    pub customer_id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
}

/// Seeds an approved, visible hotel with one visible room (base price 100,
/// capacity 4), plus its owner and one customer.
pub fn seed_catalog(db: &mut Persistence) -> SeededCatalog {
    let owner_id = db
        .create_user("Olive Owner", Role::Owner, UserStatus::Active, None)
        .expect("owner created");
    let customer_id = db
        .create_user("Casey Customer", Role::Customer, UserStatus::Active, None)
        .expect("customer created");
    let hotel_id = db
        .create_hotel(owner_id, 100, "Seaside Grand", HotelStatus::Approved, true)
        .expect("hotel created");
    let room_id = db
        .create_room(hotel_id, "Deluxe King", 100, "USD", 4, RoomStatus::Visible)
        .expect("room created");

    SeededCatalog {
        owner_id,
        customer_id,
        hotel_id,
        room_id,
    }
}

/// Prepares a booking draft through the full core pipeline against the
/// seeded catalog.
pub fn prepared_booking(
    db: &mut Persistence,
    seeded: &SeededCatalog,
    check_in: Date,
    check_out: Date,
) -> PreparedBooking {
    let room = db
        .get_room(seeded.room_id)
        .expect("room query succeeds")
        .expect("room exists");
    let hotel = db
        .get_hotel(seeded.hotel_id)
        .expect("hotel query succeeds")
        .expect("hotel exists");
    let owner = db
        .get_user(seeded.owner_id)
        .expect("owner query succeeds")
        .expect("owner exists");

    let chain = OwnershipChain::assemble(room, hotel, owner).expect("chain assembles");
    let draft = BookingDraft {
        room_id: seeded.room_id,
        check_in,
        check_out,
        adults: 2,
        children: 0,
        guest_name: String::from("Ada Lovelace"),
        phone_number: String::from("+1 555 0100"),
        notes: None,
    };

    prepare_booking(seeded.customer_id, draft, &chain).expect("draft prepares")
}

/// A fixed timestamp for history rows in tests.
pub const TEST_TIMESTAMP: &str = "2025-01-01T00:00:00Z";
