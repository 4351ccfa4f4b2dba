// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use staybook_domain::Booking;
use time::Date;

/// API request to create a new booking.
///
/// `owner_id` and `hotel_id` are deliberately absent: they are always
/// derived from `room_id` by the ownership resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: i64,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Name the reservation is held under.
    pub guest_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// API request to edit a pending booking. `None` leaves the field
/// unchanged; `notes` distinguishes "leave alone" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBookingRequest {
    /// Move the booking to a different room.
    pub room_id: Option<i64>,
    /// New check-in date.
    pub check_in: Option<Date>,
    /// New check-out date.
    pub check_out: Option<Date>,
    /// New adult count.
    pub adults: Option<u32>,
    /// New child count.
    pub children: Option<u32>,
    /// New guest name.
    pub guest_name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New notes (`Some(None)` clears them).
    pub notes: Option<Option<String>>,
}

/// A booking as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingResponse {
    /// Canonical booking ID.
    pub booking_id: i64,
    /// The customer who made the booking.
    pub user_id: i64,
    /// The hotel owner, derived from the room's hotel.
    pub owner_id: i64,
    /// The booked room.
    pub room_id: i64,
    /// The room's hotel, derived from the room.
    pub hotel_id: i64,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Name the reservation is held under.
    pub guest_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Total price in minor currency units.
    pub price: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Lifecycle status.
    pub status: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            user_id: booking.user_id,
            owner_id: booking.owner_id,
            room_id: booking.room_id,
            hotel_id: booking.hotel_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            adults: booking.adults,
            children: booking.children,
            guest_name: booking.guest_name,
            phone_number: booking.phone_number,
            notes: booking.notes,
            price: booking.price,
            currency: booking.currency,
            status: booking.status.as_str().to_string(),
        }
    }
}

/// API request to list bookings within the caller's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBookingsRequest {
    /// The 1-based page to return.
    pub page: u32,
    /// Bookings per page; capped server-side.
    pub per_page: u32,
    /// Optional status filter (snake_case status string).
    pub status: Option<String>,
}

/// API response for a booking listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListBookingsResponse {
    /// The page of bookings, oldest first.
    pub bookings: Vec<BookingResponse>,
    /// The 1-based page returned.
    pub page: u32,
    /// The effective page size after capping.
    pub per_page: u32,
    /// Total bookings in the caller's scope.
    pub total_count: i64,
    /// Total pages at the effective page size.
    pub total_pages: i64,
}

/// API request to create a hotel listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHotelRequest {
    /// The owning user. Must hold the `owner` role.
    pub owner_id: i64,
    /// The city this hotel belongs to.
    pub city_id: i64,
    /// Hotel name, unique per (owner, city).
    pub name: String,
}

/// API response for a successful hotel creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateHotelResponse {
    /// The canonical hotel ID.
    pub hotel_id: i64,
    /// The owning user.
    pub owner_id: i64,
    /// The city the hotel belongs to.
    pub city_id: i64,
    /// The hotel name.
    pub name: String,
    /// The moderation status (new hotels start pending).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to create a room within a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoomRequest {
    /// The hotel this room belongs to.
    pub hotel_id: i64,
    /// Room name, unique per hotel (case-insensitive).
    pub name: String,
    /// Nightly base price in minor currency units.
    pub base_price: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Maximum number of guests.
    pub capacity: u32,
}

/// API response for a successful room creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateRoomResponse {
    /// The canonical room ID.
    pub room_id: i64,
    /// The hotel the room belongs to.
    pub hotel_id: i64,
    /// The room name.
    pub name: String,
    /// Nightly base price in minor currency units.
    pub base_price: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Maximum number of guests.
    pub capacity: u32,
    /// A success message.
    pub message: String,
}
