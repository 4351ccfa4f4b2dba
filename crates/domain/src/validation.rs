// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structural field validation.
//!
//! These checks run first in the booking pipeline, before any referential
//! resolution or availability scan touches the store.

use crate::error::DomainError;

/// Maximum length for guest, hotel, and room names.
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for phone numbers.
const MAX_PHONE_LENGTH: usize = 32;

/// Validates the name a reservation is held under.
///
/// # Errors
///
/// Returns an error if the name is empty, whitespace-only, or too long.
pub fn validate_guest_name(name: &str) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidGuestName(String::from(
            "guest name cannot be empty",
        )));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidGuestName(format!(
            "guest name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a contact phone number.
///
/// Accepts digits plus common separators; this is a structural check, not
/// a carrier-level validation.
///
/// # Errors
///
/// Returns an error if the number is empty, too long, or contains
/// characters outside the accepted set.
pub fn validate_phone_number(phone: &str) -> Result<(), DomainError> {
    let trimmed: &str = phone.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidPhoneNumber(String::from(
            "phone number cannot be empty",
        )));
    }
    if trimmed.len() > MAX_PHONE_LENGTH {
        return Err(DomainError::InvalidPhoneNumber(format!(
            "phone number cannot exceed {MAX_PHONE_LENGTH} characters"
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(DomainError::InvalidPhoneNumber(String::from(
            "phone number contains invalid characters",
        )));
    }
    Ok(())
}

/// Validates a hotel name.
///
/// # Errors
///
/// Returns an error if the name is empty, whitespace-only, or too long.
pub fn validate_hotel_name(name: &str) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidHotelName(String::from(
            "hotel name cannot be empty",
        )));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidHotelName(format!(
            "hotel name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a room name.
///
/// Uniqueness per hotel is case-insensitive and enforced by the store; this
/// check covers the field itself.
///
/// # Errors
///
/// Returns an error if the name is empty, whitespace-only, or too long.
pub fn validate_room_name(name: &str) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidRoomName(String::from(
            "room name cannot be empty",
        )));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidRoomName(format!(
            "room name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates the party composition against the room's capacity.
///
/// At least one adult is required; children may be zero. The total party
/// must fit in the room.
///
/// # Errors
///
/// Returns an error if no adult is present or the party exceeds capacity.
pub fn validate_party_size(adults: u32, children: u32, capacity: u32) -> Result<(), DomainError> {
    if adults == 0 {
        return Err(DomainError::InvalidPartySize { adults, children });
    }
    let party: u32 = adults.saturating_add(children);
    if party > capacity {
        return Err(DomainError::PartyExceedsCapacity { party, capacity });
    }
    Ok(())
}

/// Validates a room's nightly base price.
///
/// # Errors
///
/// Returns an error if the price is negative.
pub const fn validate_base_price(price: i64) -> Result<(), DomainError> {
    if price < 0 {
        return Err(DomainError::InvalidBasePrice { price });
    }
    Ok(())
}

/// Validates a room's guest capacity.
///
/// # Errors
///
/// Returns an error if the capacity is zero.
pub const fn validate_capacity(capacity: u32) -> Result<(), DomainError> {
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}
