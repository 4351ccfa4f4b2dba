// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod booking_status;
mod error;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{BookingInterval, DateRange, find_conflict};
pub use booking_status::BookingStatus;
pub use error::DomainError;
pub use pricing::total_price;
pub use types::{Booking, Hotel, HotelStatus, Role, Room, RoomStatus, User, UserStatus};
pub use validation::{
    validate_base_price, validate_capacity, validate_guest_name, validate_hotel_name,
    validate_party_size, validate_phone_number, validate_room_name,
};
