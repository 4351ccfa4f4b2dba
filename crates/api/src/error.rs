// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staybook::CoreError;
use staybook_domain::DomainError;
use staybook_persistence::PersistenceError;
use time::Date;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is not valid for the resource's current state.
    InvalidState {
        /// A human-readable description of the state problem.
        message: String,
    },
    /// The requested range overlaps an active booking.
    Conflict {
        /// The contested room.
        room_id: i64,
        /// The conflicting booking's check-in date (inclusive).
        check_in: Date,
        /// The conflicting booking's check-out date (exclusive).
        check_out: Date,
    },
    /// The principal is not permitted to perform the action.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// Why the action was denied.
        reason: String,
    },
    /// The booking lifecycle does not permit the requested transition.
    InvalidTransition {
        /// The booking's current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::NotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidState { message } => {
                write!(f, "Invalid state: {message}")
            }
            Self::Conflict {
                room_id,
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Room {room_id} is already booked from {check_in} to {check_out}"
                )
            }
            Self::Forbidden { action, reason } => {
                write!(f, "Forbidden action '{action}': {reason}")
            }
            Self::InvalidTransition { from, to, message } => {
                write!(f, "Cannot transition booking from '{from}' to '{to}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateRange {
            check_in,
            check_out,
        } => ApiError::Validation {
            field: String::from("check_out"),
            message: format!("Check-out ({check_out}) must be strictly after check-in ({check_in})"),
        },
        DomainError::InvalidGuestName(msg) => ApiError::Validation {
            field: String::from("guest_name"),
            message: msg,
        },
        DomainError::InvalidPhoneNumber(msg) => ApiError::Validation {
            field: String::from("phone_number"),
            message: msg,
        },
        DomainError::InvalidHotelName(msg) | DomainError::InvalidRoomName(msg) => {
            ApiError::Validation {
                field: String::from("name"),
                message: msg,
            }
        }
        DomainError::InvalidPartySize { adults, children } => ApiError::Validation {
            field: String::from("adults"),
            message: format!(
                "Invalid party: {adults} adults, {children} children. At least one adult is required"
            ),
        },
        DomainError::PartyExceedsCapacity { party, capacity } => ApiError::Validation {
            field: String::from("adults"),
            message: format!("Party of {party} exceeds room capacity of {capacity}"),
        },
        DomainError::InvalidBasePrice { price } => ApiError::Validation {
            field: String::from("base_price"),
            message: format!("Invalid base price: {price}. Must be non-negative"),
        },
        DomainError::InvalidCapacity { capacity } => ApiError::Validation {
            field: String::from("capacity"),
            message: format!("Invalid capacity: {capacity}. Must be greater than 0"),
        },
        DomainError::PriceOverflow { base_price, nights } => ApiError::Validation {
            field: String::from("check_out"),
            message: format!(
                "Price computation overflowed: base price {base_price} over {nights} nights"
            ),
        },
        DomainError::InvalidRole(s) => ApiError::Validation {
            field: String::from("role"),
            message: format!("Invalid role: {s}"),
        },
        DomainError::InvalidUserStatus(s) => ApiError::Validation {
            field: String::from("status"),
            message: format!("Invalid user status: {s}"),
        },
        DomainError::InvalidHotelStatus(s) => ApiError::Validation {
            field: String::from("status"),
            message: format!("Invalid hotel status: {s}"),
        },
        DomainError::InvalidRoomStatus(s) => ApiError::Validation {
            field: String::from("status"),
            message: format!("Invalid room status: {s}"),
        },
        DomainError::InvalidBookingStatus(s) => ApiError::Validation {
            field: String::from("status"),
            message: format!("Invalid booking status: {s}"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidTransition {
            from,
            to,
            message: reason,
        },
        DomainError::OwnerRoleMismatch { user_id, role } => ApiError::InvalidState {
            message: format!(
                "User {user_id} referenced as hotel owner holds role '{role}', not 'owner'"
            ),
        },
        DomainError::HotelNotBookable { hotel_id, reason } => ApiError::InvalidState {
            message: format!("Hotel {hotel_id} is not bookable: {reason}"),
        },
        DomainError::RoomNotBookable { room_id } => ApiError::InvalidState {
            message: format!("Room {room_id} is hidden and cannot accept bookings"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::Validation {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Forbidden { action, reason } => ApiError::Forbidden { action, reason },
    }
}

/// Translates a persistence error into an API error.
///
/// Booking conflicts become `Conflict`; duplicate catalog names become
/// `Validation`. Lock contention is retried inside persistence and is never
/// mapped here, so any other error surfaces as `Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::BookingConflict {
            room_id,
            check_in,
            check_out,
        } => ApiError::Conflict {
            room_id,
            check_in,
            check_out,
        },
        PersistenceError::DuplicateRecord(msg) => ApiError::Validation {
            field: String::from("name"),
            message: msg,
        },
        PersistenceError::NotFound(msg) => ApiError::NotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => ApiError::Internal {
            message: format!("Persistence error: {other}"),
        },
    }
}
