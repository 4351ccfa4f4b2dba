// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared builders for core tests.

use crate::OwnershipChain;
use staybook_domain::{
    Booking, BookingStatus, Hotel, HotelStatus, Role, Room, RoomStatus, User, UserStatus,
};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid test date")
}

pub fn owner_user(user_id: i64) -> User {
    User {
        user_id,
        display_name: format!("Owner {user_id}"),
        role: Role::Owner,
        status: UserStatus::Active,
        city_id: None,
    }
}

pub fn customer_user(user_id: i64) -> User {
    User {
        user_id,
        display_name: format!("Customer {user_id}"),
        role: Role::Customer,
        status: UserStatus::Active,
        city_id: None,
    }
}

pub fn approved_hotel(hotel_id: i64, owner_id: i64, city_id: i64) -> Hotel {
    Hotel {
        hotel_id,
        owner_id,
        city_id,
        name: format!("Hotel {hotel_id}"),
        status: HotelStatus::Approved,
        is_visible: true,
    }
}

pub fn visible_room(room_id: i64, hotel_id: i64, base_price: i64, capacity: u32) -> Room {
    Room {
        room_id,
        hotel_id,
        name: format!("Room {room_id}"),
        base_price,
        currency: String::from("USD"),
        capacity,
        status: RoomStatus::Visible,
    }
}

/// A resolvable, bookable chain: room 1 in hotel 1 owned by user 10.
pub fn bookable_chain() -> OwnershipChain {
    OwnershipChain::assemble(
        visible_room(1, 1, 100, 4),
        approved_hotel(1, 10, 100),
        owner_user(10),
    )
    .expect("test chain assembles")
}

pub fn pending_booking(booking_id: i64, user_id: i64, owner_id: i64) -> Booking {
    Booking {
        booking_id,
        user_id,
        owner_id,
        room_id: 1,
        hotel_id: 1,
        check_in: date(2025, Month::March, 10),
        check_out: date(2025, Month::March, 12),
        adults: 2,
        children: 0,
        guest_name: String::from("Ada Lovelace"),
        phone_number: String::from("+1 555 0100"),
        notes: None,
        price: 200,
        currency: String::from("USD"),
        status: BookingStatus::Pending,
    }
}
