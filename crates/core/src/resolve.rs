// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ownership-chain resolution.
//!
//! A booking's `owner_id` and `hotel_id` are always derived by walking
//! `room → hotel → owner` against fresh store lookups. The chain is
//! assembled here so the derivation and its integrity checks live in one
//! place; it is never cached between operations.

use crate::error::CoreError;
use staybook_domain::{DomainError, Hotel, Role, Room, RoomStatus, User};

/// A fully resolved `room → hotel → owner` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipChain {
    /// The room being booked.
    pub room: Room,
    /// The room's hotel.
    pub hotel: Hotel,
    /// The hotel's owner.
    pub owner: User,
}

impl OwnershipChain {
    /// Assembles the chain from records the caller looked up by following
    /// `room.hotel_id` and `hotel.owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the records do not link to
    /// each other, or if the resolved owner does not hold the `owner` role.
    pub fn assemble(room: Room, hotel: Hotel, owner: User) -> Result<Self, CoreError> {
        if room.hotel_id != hotel.hotel_id {
            return Err(CoreError::DomainViolation(DomainError::RoomNotBookable {
                room_id: room.room_id,
            }));
        }
        if hotel.owner_id != owner.user_id || owner.role != Role::Owner {
            return Err(CoreError::DomainViolation(DomainError::OwnerRoleMismatch {
                user_id: owner.user_id,
                role: owner.role.as_str().to_string(),
            }));
        }
        Ok(Self { room, hotel, owner })
    }

    /// Checks that the chain may accept a new booking.
    ///
    /// The hotel must be approved and visible, and the room must be
    /// visible. A visible room under a hidden or unapproved hotel is not
    /// bookable.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the hotel or room is not
    /// bookable.
    pub fn ensure_bookable(&self) -> Result<(), CoreError> {
        if !self.hotel.is_publicly_bookable() {
            let reason: String = if self.hotel.is_visible {
                format!("hotel status is '{}'", self.hotel.status.as_str())
            } else {
                String::from("hotel is hidden by its owner")
            };
            return Err(CoreError::DomainViolation(DomainError::HotelNotBookable {
                hotel_id: self.hotel.hotel_id,
                reason,
            }));
        }
        if self.room.status != RoomStatus::Visible {
            return Err(CoreError::DomainViolation(DomainError::RoomNotBookable {
                room_id: self.room.room_id,
            }));
        }
        Ok(())
    }
}
