// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Check-out does not strictly follow check-in.
    InvalidDateRange {
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Phone number is empty or invalid.
    InvalidPhoneNumber(String),
    /// Hotel name is empty or invalid.
    InvalidHotelName(String),
    /// Room name is empty or invalid.
    InvalidRoomName(String),
    /// Party composition is invalid (at least one adult required).
    InvalidPartySize {
        /// The requested number of adults.
        adults: u32,
        /// The requested number of children.
        children: u32,
    },
    /// Party does not fit in the room.
    PartyExceedsCapacity {
        /// Total guest count requested.
        party: u32,
        /// The room's capacity.
        capacity: u32,
    },
    /// Nightly base price must be non-negative.
    InvalidBasePrice {
        /// The invalid price value, in minor currency units.
        price: i64,
    },
    /// Room capacity must be positive.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: u32,
    },
    /// Total price computation overflowed.
    PriceOverflow {
        /// The nightly base price.
        base_price: i64,
        /// The number of nights.
        nights: i64,
    },
    /// User role string is not recognized.
    InvalidRole(String),
    /// User status string is not recognized.
    InvalidUserStatus(String),
    /// Hotel status string is not recognized.
    InvalidHotelStatus(String),
    /// Room status string is not recognized.
    InvalidRoomStatus(String),
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Booking status transition is not permitted by the lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// The resolved hotel owner does not hold the owner role.
    OwnerRoleMismatch {
        /// The resolved user's ID.
        user_id: i64,
        /// The role that user actually holds.
        role: String,
    },
    /// The hotel is not publicly bookable.
    HotelNotBookable {
        /// The hotel's ID.
        hotel_id: i64,
        /// Why the hotel is not bookable.
        reason: String,
    },
    /// The room is hidden and cannot accept bookings.
    RoomNotBookable {
        /// The room's ID.
        room_id: i64,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out ({check_out}) must be strictly after check-in ({check_in})"
                )
            }
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidPhoneNumber(msg) => write!(f, "Invalid phone number: {msg}"),
            Self::InvalidHotelName(msg) => write!(f, "Invalid hotel name: {msg}"),
            Self::InvalidRoomName(msg) => write!(f, "Invalid room name: {msg}"),
            Self::InvalidPartySize { adults, children } => {
                write!(
                    f,
                    "Invalid party: {adults} adults, {children} children. At least one adult is required"
                )
            }
            Self::PartyExceedsCapacity { party, capacity } => {
                write!(
                    f,
                    "Party of {party} exceeds room capacity of {capacity}"
                )
            }
            Self::InvalidBasePrice { price } => {
                write!(f, "Invalid base price: {price}. Must be non-negative")
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be greater than 0")
            }
            Self::PriceOverflow { base_price, nights } => {
                write!(
                    f,
                    "Price computation overflowed: base price {base_price} over {nights} nights"
                )
            }
            Self::InvalidRole(s) => write!(f, "Invalid role: {s}"),
            Self::InvalidUserStatus(s) => write!(f, "Invalid user status: {s}"),
            Self::InvalidHotelStatus(s) => write!(f, "Invalid hotel status: {s}"),
            Self::InvalidRoomStatus(s) => write!(f, "Invalid room status: {s}"),
            Self::InvalidBookingStatus(s) => write!(f, "Invalid booking status: {s}"),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition booking from '{from}' to '{to}': {reason}")
            }
            Self::OwnerRoleMismatch { user_id, role } => {
                write!(
                    f,
                    "User {user_id} referenced as hotel owner holds role '{role}', not 'owner'"
                )
            }
            Self::HotelNotBookable { hotel_id, reason } => {
                write!(f, "Hotel {hotel_id} is not bookable: {reason}")
            }
            Self::RoomNotBookable { room_id } => {
                write!(f, "Room {room_id} is hidden and cannot accept bookings")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
