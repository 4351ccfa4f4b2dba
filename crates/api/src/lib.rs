// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Staybook hospitality backend.
//!
//! Transport-independent operations over the booking engine: principal
//! resolution, request/response DTOs, the time-window policy for customer
//! cancellations and edits, and explicit translation of domain, core, and
//! persistence errors into the `ApiError` contract.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;
mod window_policy;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use auth::resolve_principal;
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    cancel_booking, create_booking, create_hotel, create_room, get_booking, list_bookings,
    set_booking_status, update_booking,
};
pub use request_response::{
    BookingResponse, CreateBookingRequest, CreateHotelRequest, CreateHotelResponse,
    CreateRoomRequest, CreateRoomResponse, ListBookingsRequest, ListBookingsResponse,
    UpdateBookingRequest,
};
pub use window_policy::{BookingWindowError, BookingWindowPolicy, hours_until_check_in};
