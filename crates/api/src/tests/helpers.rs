// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use staybook::Principal;
use staybook_domain::{HotelStatus, Role, RoomStatus, UserStatus};
use staybook_persistence::Persistence;
use time::macros::datetime;
use time::{Date, Month, OffsetDateTime};

use crate::request_response::{BookingResponse, CreateBookingRequest};
use crate::{create_booking, resolve_principal};

/// A fixed "now" comfortably before every test booking's check-in.
pub const NOW: OffsetDateTime = datetime!(2025-01-01 00:00 UTC);

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid test date")
}

/// IDs of a fully seeded marketplace: one approved visible hotel in city
/// 100 with one visible room (base price 100, capacity 4), plus one
/// principal of every role.
pub struct Seeded {
    pub owner_id: i64,
    pub other_owner_id: i64,
    pub customer_id: i64,
    pub other_customer_id: i64,
    pub city_admin_id: i64,
    pub super_admin_id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
}

pub fn seed(db: &mut Persistence) -> Seeded {
    let owner_id = db
        .create_user("Olive Owner", Role::Owner, UserStatus::Active, None)
        .expect("owner created");
    let other_owner_id = db
        .create_user("Oscar Other", Role::Owner, UserStatus::Active, None)
        .expect("other owner created");
    let customer_id = db
        .create_user("Casey Customer", Role::Customer, UserStatus::Active, None)
        .expect("customer created");
    let other_customer_id = db
        .create_user("Quinn Stranger", Role::Customer, UserStatus::Active, None)
        .expect("other customer created");
    let city_admin_id = db
        .create_user("Ada Admin", Role::CityAdmin, UserStatus::Active, Some(100))
        .expect("city admin created");
    let super_admin_id = db
        .create_user("Sam Root", Role::SuperAdmin, UserStatus::Active, None)
        .expect("super admin created");
    let hotel_id = db
        .create_hotel(owner_id, 100, "Seaside Grand", HotelStatus::Approved, true)
        .expect("hotel created");
    let room_id = db
        .create_room(hotel_id, "Deluxe King", 100, "USD", 4, RoomStatus::Visible)
        .expect("room created");

    Seeded {
        owner_id,
        other_owner_id,
        customer_id,
        other_customer_id,
        city_admin_id,
        super_admin_id,
        hotel_id,
        room_id,
    }
}

pub fn principal(db: &mut Persistence, user_id: i64) -> Principal {
    resolve_principal(db, user_id).expect("principal resolves")
}

pub fn booking_request(room_id: i64, check_in: Date, check_out: Date) -> CreateBookingRequest {
    CreateBookingRequest {
        room_id,
        check_in,
        check_out,
        adults: 2,
        children: 0,
        guest_name: String::from("Ada Lovelace"),
        phone_number: String::from("+1 555 0100"),
        notes: None,
    }
}

/// Creates a booking as the given customer for March 10-12, 2025.
pub fn create_default_booking(db: &mut Persistence, seeded: &Seeded) -> BookingResponse {
    let customer = principal(db, seeded.customer_id);
    create_booking(
        db,
        &customer,
        booking_request(
            seeded.room_id,
            date(2025, Month::March, 10),
            date(2025, Month::March, 12),
        ),
        NOW,
    )
    .expect("booking created")
}
