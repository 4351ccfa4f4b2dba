// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking preparation pipeline.
//!
//! Turning a request into a persistable booking runs four ordered stages:
//!
//! 1. Structural validation — field shapes, date ordering.
//! 2. Referential resolution — the ownership chain must be bookable.
//! 3. Business-rule validation — party composition against room capacity.
//! 4. Derived-field computation — price, currency, denormalized owner and
//!    hotel IDs.
//!
//! Availability is deliberately not checked here: the conflict scan must
//! run inside the same write transaction as the insert/update, so it
//! belongs to the persistence layer.

use crate::error::CoreError;
use crate::resolve::OwnershipChain;
use staybook_domain::{
    Booking, BookingStatus, DateRange, total_price, validate_guest_name, validate_party_size,
    validate_phone_number,
};
use time::Date;

/// The caller-supplied fields of a new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
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

/// Caller-supplied changes to an existing booking. `None` leaves the field
/// unchanged; `notes` distinguishes "leave alone" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingChanges {
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

impl BookingChanges {
    /// Returns true if the changes move the booking to another room.
    #[must_use]
    pub fn changes_room(&self, booking: &Booking) -> bool {
        self.room_id.is_some_and(|id| id != booking.room_id)
    }

    /// Returns true if the changes touch the booked date range.
    #[must_use]
    pub fn changes_dates(&self, booking: &Booking) -> bool {
        self.check_in.is_some_and(|d| d != booking.check_in)
            || self.check_out.is_some_and(|d| d != booking.check_out)
    }

    /// Returns true if the availability scan must be re-run for these
    /// changes.
    #[must_use]
    pub fn requires_availability_recheck(&self, booking: &Booking) -> bool {
        self.changes_room(booking) || self.changes_dates(booking)
    }
}

/// A validated booking ready to be written, with all derived fields
/// computed. `owner_id` and `hotel_id` come from the resolved chain, never
/// from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBooking {
    /// The customer making the booking.
    pub user_id: i64,
    /// Derived: the hotel's owner.
    pub owner_id: i64,
    /// The booked room.
    pub room_id: i64,
    /// Derived: the room's hotel.
    pub hotel_id: i64,
    /// The validated date range.
    pub range: DateRange,
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
    /// Derived: base price times nights.
    pub price: i64,
    /// Derived: the room's currency.
    pub currency: String,
}

/// The outcome of a requested status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The booking is already in the requested status; nothing to write.
    NoOp,
    /// A legal transition to apply.
    Transition {
        /// The current status.
        from: BookingStatus,
        /// The status to move to.
        to: BookingStatus,
    },
}

/// Runs the full preparation pipeline for a new booking.
///
/// `chain` must have been resolved from `draft.room_id` immediately before
/// this call.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if any stage rejects the draft.
pub fn prepare_booking(
    customer_id: i64,
    draft: BookingDraft,
    chain: &OwnershipChain,
) -> Result<PreparedBooking, CoreError> {
    // Stage 1: structural.
    validate_guest_name(&draft.guest_name)?;
    validate_phone_number(&draft.phone_number)?;
    let range: DateRange = DateRange::new(draft.check_in, draft.check_out)?;

    // Stage 2: referential.
    chain.ensure_bookable()?;

    // Stage 3: business rules.
    validate_party_size(draft.adults, draft.children, chain.room.capacity)?;

    // Stage 4: derived fields.
    let price: i64 = total_price(chain.room.base_price, &range)?;

    Ok(PreparedBooking {
        user_id: customer_id,
        owner_id: chain.hotel.owner_id,
        room_id: chain.room.room_id,
        hotel_id: chain.hotel.hotel_id,
        range,
        adults: draft.adults,
        children: draft.children,
        guest_name: draft.guest_name,
        phone_number: draft.phone_number,
        notes: draft.notes,
        price,
        currency: chain.room.currency.clone(),
    })
}

/// Runs the preparation pipeline for an edit to a pending booking.
///
/// `chain` must match the booking's target room: the caller re-resolves it
/// when `changes.changes_room(booking)` is true, otherwise passes the
/// chain for the booking's current room. Bookability is only re-checked
/// when the booking moves rooms; an edit to an existing booking does not
/// fail because its hotel has since been hidden.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if any stage rejects the merged
/// booking.
pub fn prepare_update(
    booking: &Booking,
    changes: BookingChanges,
    chain: &OwnershipChain,
) -> Result<PreparedBooking, CoreError> {
    let moved_rooms: bool = changes.changes_room(booking);

    let guest_name: String = changes.guest_name.unwrap_or_else(|| booking.guest_name.clone());
    let phone_number: String = changes
        .phone_number
        .unwrap_or_else(|| booking.phone_number.clone());
    let notes: Option<String> = changes.notes.unwrap_or_else(|| booking.notes.clone());
    let adults: u32 = changes.adults.unwrap_or(booking.adults);
    let children: u32 = changes.children.unwrap_or(booking.children);
    let check_in: Date = changes.check_in.unwrap_or(booking.check_in);
    let check_out: Date = changes.check_out.unwrap_or(booking.check_out);

    // Stage 1: structural.
    validate_guest_name(&guest_name)?;
    validate_phone_number(&phone_number)?;
    let range: DateRange = DateRange::new(check_in, check_out)?;

    // Stage 2: referential.
    if moved_rooms {
        chain.ensure_bookable()?;
    }

    // Stage 3: business rules.
    validate_party_size(adults, children, chain.room.capacity)?;

    // Stage 4: derived fields, recomputed against the (possibly new) room.
    let price: i64 = total_price(chain.room.base_price, &range)?;

    Ok(PreparedBooking {
        user_id: booking.user_id,
        owner_id: chain.hotel.owner_id,
        room_id: chain.room.room_id,
        hotel_id: chain.hotel.hotel_id,
        range,
        adults,
        children,
        guest_name,
        phone_number,
        notes,
        price,
        currency: chain.room.currency.clone(),
    })
}

/// Validates a requested status change against the lifecycle graph.
///
/// A request for the booking's current status is an idempotent no-op and
/// never consults the graph.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the transition is not permitted.
pub fn prepare_status_change(
    booking: &Booking,
    new_status: BookingStatus,
) -> Result<StatusChange, CoreError> {
    if booking.status == new_status {
        return Ok(StatusChange::NoOp);
    }
    booking.status.validate_transition(new_status)?;
    Ok(StatusChange::Transition {
        from: booking.status,
        to: new_status,
    })
}
