// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical entity types shared across the system.
//!
//! Roles and statuses are stored as snake_case strings in persistence and
//! round-trip through the enums defined here.

use crate::availability::DateRange;
use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// User roles.
///
/// A user's role is immutable business context for every other entity's
/// authorization checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform-wide administrator, unrestricted.
    SuperAdmin,
    /// Administrator scoped to a single city.
    CityAdmin,
    /// Hotel owner.
    Owner,
    /// Booking customer.
    Customer,
}

impl Role {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::CityAdmin => "city_admin",
            Self::Owner => "owner",
            Self::Customer => "customer",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "city_admin" => Ok(Self::CityAdmin),
            "owner" => Ok(Self::Owner),
            "customer" => Ok(Self::Customer),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// User account statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// The account is active.
    Active,
    /// The account has been deactivated.
    Inactive,
    /// The account is awaiting approval.
    PendingApproval,
}

impl UserStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::PendingApproval => "pending_approval",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending_approval" => Ok(Self::PendingApproval),
            _ => Err(DomainError::InvalidUserStatus(s.to_string())),
        }
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Hotel moderation statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelStatus {
    /// Awaiting moderation.
    Pending,
    /// Approved for listing.
    Approved,
    /// Rejected by moderation.
    Rejected,
}

impl HotelStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidHotelStatus(s.to_string())),
        }
    }
}

impl FromStr for HotelStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Room visibility statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Listed and bookable (subject to the parent hotel's visibility).
    Visible,
    /// Hidden from listings and not bookable.
    Hidden,
}

impl RoomStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            _ => Err(DomainError::InvalidRoomStatus(s.to_string())),
        }
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Canonical user ID.
    pub user_id: i64,
    /// Display name.
    pub display_name: String,
    /// The user's role.
    pub role: Role,
    /// The account status.
    pub status: UserStatus,
    /// Assigned city, required for city admins.
    pub city_id: Option<i64>,
}

impl User {
    /// Returns true if the account may act on the platform.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }
}

/// A hotel listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    /// Canonical hotel ID.
    pub hotel_id: i64,
    /// The owning user. Must hold the `owner` role.
    pub owner_id: i64,
    /// The city this hotel belongs to.
    pub city_id: i64,
    /// Hotel name, unique per (owner, city).
    pub name: String,
    /// Moderation status.
    pub status: HotelStatus,
    /// Owner-controlled visibility flag, independent of moderation.
    pub is_visible: bool,
}

impl Hotel {
    /// Returns true if the hotel may accept new bookings.
    ///
    /// A hotel is publicly bookable only when it is both approved and
    /// visible; either flag alone is not sufficient.
    #[must_use]
    pub const fn is_publicly_bookable(&self) -> bool {
        matches!(self.status, HotelStatus::Approved) && self.is_visible
    }
}

/// A room within a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Canonical room ID.
    pub room_id: i64,
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
    /// Visibility status.
    pub status: RoomStatus,
}

/// A booking.
///
/// `owner_id` and `hotel_id` are denormalized from the room's ownership
/// chain at creation/modification time and are never caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
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
    /// Number of adults (at least 1).
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Name the reservation is held under.
    pub guest_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Total price, derived as base price times nights.
    pub price: i64,
    /// ISO 4217 currency code, copied from the room.
    pub currency: String,
    /// Lifecycle status.
    pub status: BookingStatus,
}

impl Booking {
    /// Returns the booking's half-open date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored dates are inverted, which indicates
    /// a corrupt record rather than caller input.
    pub fn range(&self) -> Result<DateRange, DomainError> {
        DateRange::new(self.check_in, self.check_out)
    }
}
