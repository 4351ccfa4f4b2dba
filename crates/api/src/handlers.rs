// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking and catalog operations.
//!
//! Every handler takes the persistence layer and an already-resolved
//! `Principal`. Time-gated handlers take `now` explicitly so the window
//! policy is testable without clock control.

use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use staybook::{
    BookingAction, BookingChanges, BookingDraft, ListScope, OwnershipChain, Principal,
    StatusChange, can_act, can_create_booking, can_manage_content, list_scope, prepare_booking,
    prepare_status_change, prepare_update,
};
use staybook_domain::{
    Booking, BookingStatus, DomainError, Hotel, HotelStatus, Role, Room, RoomStatus, User,
    validate_base_price, validate_capacity, validate_hotel_name, validate_room_name,
};
use staybook_persistence::{Persistence, PersistenceError};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    BookingResponse, CreateBookingRequest, CreateHotelRequest, CreateHotelResponse,
    CreateRoomRequest, CreateRoomResponse, ListBookingsRequest, ListBookingsResponse,
    UpdateBookingRequest,
};
use crate::window_policy::BookingWindowPolicy;

/// Upper bound on the listing page size.
const MAX_PER_PAGE: u32 = 100;

/// Formats a timestamp for booking history rows.
fn format_timestamp(now: OffsetDateTime) -> Result<String, ApiError> {
    now.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

/// Translates a guarded booking-write failure. A stale status means a
/// concurrent writer moved the booking first, so the transition the caller
/// attempted is no longer valid from the booking's actual status.
fn translate_guarded_write_error(err: PersistenceError, to: BookingStatus) -> ApiError {
    match err {
        PersistenceError::StaleBookingStatus { actual, .. } => ApiError::InvalidTransition {
            from: actual,
            to: to.as_str().to_string(),
            message: String::from("The booking status changed concurrently"),
        },
        other => translate_persistence_error(other),
    }
}

/// Fetches a booking or reports it missing.
fn fetch_booking(persistence: &mut Persistence, booking_id: i64) -> Result<Booking, ApiError> {
    persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id} does not exist"),
        })
}

/// Resolves the `room → hotel → owner` chain for a room, fresh from the
/// store.
fn resolve_chain(persistence: &mut Persistence, room_id: i64) -> Result<OwnershipChain, ApiError> {
    let room: Room = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        })?;

    let hotel: Hotel = persistence
        .get_hotel(room.hotel_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("Hotel"),
            message: format!("Hotel {} does not exist", room.hotel_id),
        })?;

    let owner: User = persistence
        .get_user(hotel.owner_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("User"),
            message: format!("Hotel owner {} does not exist", hotel.owner_id),
        })?;

    OwnershipChain::assemble(room, hotel, owner).map_err(translate_core_error)
}

/// Creates a new pending booking.
///
/// The request is prepared through the ordered validation pipeline; the
/// availability re-check runs inside the persistence write transaction.
///
/// # Errors
///
/// Returns `Forbidden` for non-customer principals, `NotFound` if the room
/// chain is incomplete, `Validation`/`InvalidState` if the pipeline rejects
/// the draft, or `Conflict` if the range overlaps an active booking.
pub fn create_booking(
    persistence: &mut Persistence,
    principal: &Principal,
    request: CreateBookingRequest,
    now: OffsetDateTime,
) -> Result<BookingResponse, ApiError> {
    can_create_booking(principal).map_err(translate_core_error)?;

    let chain: OwnershipChain = resolve_chain(persistence, request.room_id)?;

    let draft: BookingDraft = BookingDraft {
        room_id: request.room_id,
        check_in: request.check_in,
        check_out: request.check_out,
        adults: request.adults,
        children: request.children,
        guest_name: request.guest_name,
        phone_number: request.phone_number,
        notes: request.notes,
    };
    let prepared = prepare_booking(principal.user_id(), draft, &chain).map_err(translate_core_error)?;

    let changed_at: String = format_timestamp(now)?;
    let booking_id: i64 = persistence
        .create_booking(&prepared, &changed_at)
        .map_err(translate_persistence_error)?;

    info!(
        booking_id,
        room_id = prepared.room_id,
        user_id = prepared.user_id,
        "Booking created"
    );

    Ok(fetch_booking(persistence, booking_id)?.into())
}

/// Retrieves a single booking.
///
/// # Errors
///
/// Returns `NotFound` if the booking does not exist, or `Forbidden` if the
/// principal may not view it.
pub fn get_booking(
    persistence: &mut Persistence,
    principal: &Principal,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking = fetch_booking(persistence, booking_id)?;
    can_act(principal, BookingAction::View, &booking).map_err(translate_core_error)?;
    Ok(booking.into())
}

/// Edits a pending booking.
///
/// Only the owning customer may edit, only while the booking is pending,
/// and only while more than the edit window remains before check-in. The
/// price is recomputed and availability re-checked when the room or dates
/// change.
///
/// # Errors
///
/// Returns `Forbidden`, `NotFound`, `InvalidTransition` (non-pending
/// booking or closed window), `Validation`, or `Conflict`.
pub fn update_booking(
    persistence: &mut Persistence,
    principal: &Principal,
    booking_id: i64,
    request: UpdateBookingRequest,
    now: OffsetDateTime,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking = fetch_booking(persistence, booking_id)?;
    can_act(principal, BookingAction::Edit, &booking).map_err(translate_core_error)?;

    if booking.status != BookingStatus::Pending {
        return Err(ApiError::InvalidTransition {
            from: booking.status.as_str().to_string(),
            to: BookingStatus::Pending.as_str().to_string(),
            message: String::from("Only pending bookings can be edited"),
        });
    }
    BookingWindowPolicy::default()
        .check_editable(booking.check_in, now)
        .map_err(|err| ApiError::InvalidTransition {
            from: booking.status.as_str().to_string(),
            to: BookingStatus::Pending.as_str().to_string(),
            message: err.to_string(),
        })?;

    let changes: BookingChanges = BookingChanges {
        room_id: request.room_id,
        check_in: request.check_in,
        check_out: request.check_out,
        adults: request.adults,
        children: request.children,
        guest_name: request.guest_name,
        phone_number: request.phone_number,
        notes: request.notes,
    };
    let recheck_availability: bool = changes.requires_availability_recheck(&booking);

    // The chain is re-resolved against the target room so a room move is
    // re-priced and re-validated against the new room's hotel.
    let target_room_id: i64 = changes.room_id.unwrap_or(booking.room_id);
    let chain: OwnershipChain = resolve_chain(persistence, target_room_id)?;
    let prepared = prepare_update(&booking, changes, &chain).map_err(translate_core_error)?;

    let updated_at: String = format_timestamp(now)?;
    persistence
        .update_booking(booking_id, &prepared, recheck_availability, &updated_at)
        .map_err(|err| translate_guarded_write_error(err, BookingStatus::Pending))?;

    info!(booking_id, recheck_availability, "Booking updated");

    Ok(fetch_booking(persistence, booking_id)?.into())
}

/// Cancels a booking on behalf of its customer.
///
/// Cancelling an already-cancelled booking is an idempotent no-op. A live
/// cancellation is gated on the cancellation window.
///
/// # Errors
///
/// Returns `Forbidden`, `NotFound`, or `InvalidTransition` (closed window
/// or terminal rejected booking).
pub fn cancel_booking(
    persistence: &mut Persistence,
    principal: &Principal,
    booking_id: i64,
    now: OffsetDateTime,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking = fetch_booking(persistence, booking_id)?;
    can_act(principal, BookingAction::Cancel, &booking).map_err(translate_core_error)?;

    match prepare_status_change(&booking, BookingStatus::Cancelled)
        .map_err(translate_core_error)?
    {
        StatusChange::NoOp => Ok(booking.into()),
        StatusChange::Transition { from, to } => {
            BookingWindowPolicy::default()
                .check_cancellable(booking.check_in, now)
                .map_err(|err| ApiError::InvalidTransition {
                    from: from.as_str().to_string(),
                    to: to.as_str().to_string(),
                    message: err.to_string(),
                })?;

            let changed_at: String = format_timestamp(now)?;
            persistence
                .set_booking_status(booking_id, from, to, principal.user_id(), &changed_at)
                .map_err(|err| translate_guarded_write_error(err, to))?;

            info!(booking_id, "Booking cancelled");

            Ok(fetch_booking(persistence, booking_id)?.into())
        }
    }
}

/// Confirms or rejects a booking on behalf of the hotel owner or a super
/// admin.
///
/// Requesting the booking's current status is an idempotent no-op.
/// Cancellation is a customer action and is not reachable here. Status
/// changes never re-run availability checks.
///
/// # Errors
///
/// Returns `Forbidden`, `NotFound`, or `InvalidTransition`.
pub fn set_booking_status(
    persistence: &mut Persistence,
    principal: &Principal,
    booking_id: i64,
    new_status: BookingStatus,
    now: OffsetDateTime,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking = fetch_booking(persistence, booking_id)?;
    can_act(principal, BookingAction::ChangeStatus, &booking).map_err(translate_core_error)?;

    if new_status == BookingStatus::Cancelled {
        return Err(ApiError::Forbidden {
            action: String::from("change_booking_status"),
            reason: String::from("cancellation is a customer action"),
        });
    }

    match prepare_status_change(&booking, new_status).map_err(translate_core_error)? {
        StatusChange::NoOp => Ok(booking.into()),
        StatusChange::Transition { from, to } => {
            let changed_at: String = format_timestamp(now)?;
            persistence
                .set_booking_status(booking_id, from, to, principal.user_id(), &changed_at)
                .map_err(|err| translate_guarded_write_error(err, to))?;

            info!(
                booking_id,
                from = from.as_str(),
                to = to.as_str(),
                "Booking status changed"
            );

            Ok(fetch_booking(persistence, booking_id)?.into())
        }
    }
}

/// Lists bookings within the principal's scope, oldest first.
///
/// The scope is derived from the principal: customers see their own
/// bookings, owners see bookings against their hotels, city admins see
/// bookings in their city, super admins see everything.
///
/// # Errors
///
/// Returns `Validation` for an unknown status filter, or `Internal` if the
/// query fails.
pub fn list_bookings(
    persistence: &mut Persistence,
    principal: &Principal,
    request: ListBookingsRequest,
) -> Result<ListBookingsResponse, ApiError> {
    let scope: ListScope = list_scope(principal);

    let status: Option<BookingStatus> = match request.status.as_deref() {
        Some(s) => Some(BookingStatus::from_str(s).map_err(translate_domain_error)?),
        None => None,
    };

    let page: u32 = request.page.max(1);
    let per_page: u32 = request.per_page.clamp(1, MAX_PER_PAGE);
    let offset: i64 = i64::from(page - 1) * i64::from(per_page);

    let bookings = persistence
        .list_bookings(&scope, status, i64::from(per_page), offset)
        .map_err(translate_persistence_error)?;
    let total_count: i64 = persistence
        .count_bookings(&scope, status)
        .map_err(translate_persistence_error)?;
    let total_pages: i64 = if total_count == 0 {
        0
    } else {
        (total_count - 1) / i64::from(per_page) + 1
    };

    Ok(ListBookingsResponse {
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
        page,
        per_page,
        total_count,
        total_pages,
    })
}

/// Creates a hotel listing. New hotels start pending moderation and
/// visible.
///
/// # Errors
///
/// Returns `Forbidden` unless the principal owns the listing or is a super
/// admin, `NotFound` if the owner does not exist, `InvalidState` if the
/// referenced owner does not hold the owner role, or `Validation` for a
/// bad or duplicate name.
pub fn create_hotel(
    persistence: &mut Persistence,
    principal: &Principal,
    request: CreateHotelRequest,
) -> Result<CreateHotelResponse, ApiError> {
    can_manage_content(principal, request.owner_id).map_err(translate_core_error)?;
    validate_hotel_name(&request.name).map_err(translate_domain_error)?;

    let owner: User = persistence
        .get_user(request.owner_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("User"),
            message: format!("User {} does not exist", request.owner_id),
        })?;
    if owner.role != Role::Owner {
        return Err(translate_domain_error(DomainError::OwnerRoleMismatch {
            user_id: owner.user_id,
            role: owner.role.as_str().to_string(),
        }));
    }

    let status: HotelStatus = HotelStatus::Pending;
    let hotel_id: i64 = persistence
        .create_hotel(request.owner_id, request.city_id, &request.name, status, true)
        .map_err(translate_persistence_error)?;

    info!(hotel_id, owner_id = request.owner_id, "Hotel created");

    Ok(CreateHotelResponse {
        hotel_id,
        owner_id: request.owner_id,
        city_id: request.city_id,
        name: request.name.clone(),
        status: status.as_str().to_string(),
        message: format!("Successfully created hotel '{}'", request.name),
    })
}

/// Creates a room within a hotel. New rooms start visible.
///
/// # Errors
///
/// Returns `NotFound` if the hotel does not exist, `Forbidden` unless the
/// principal owns the hotel or is a super admin, or `Validation` for a bad
/// name, price, capacity, or a duplicate name.
pub fn create_room(
    persistence: &mut Persistence,
    principal: &Principal,
    request: CreateRoomRequest,
) -> Result<CreateRoomResponse, ApiError> {
    let hotel: Hotel = persistence
        .get_hotel(request.hotel_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("Hotel"),
            message: format!("Hotel {} does not exist", request.hotel_id),
        })?;
    can_manage_content(principal, hotel.owner_id).map_err(translate_core_error)?;

    validate_room_name(&request.name).map_err(translate_domain_error)?;
    validate_base_price(request.base_price).map_err(translate_domain_error)?;
    validate_capacity(request.capacity).map_err(translate_domain_error)?;

    let room_id: i64 = persistence
        .create_room(
            request.hotel_id,
            &request.name,
            request.base_price,
            &request.currency,
            request.capacity,
            RoomStatus::Visible,
        )
        .map_err(translate_persistence_error)?;

    info!(room_id, hotel_id = request.hotel_id, "Room created");

    Ok(CreateRoomResponse {
        room_id,
        hotel_id: request.hotel_id,
        name: request.name.clone(),
        base_price: request.base_price,
        currency: request.currency.clone(),
        capacity: request.capacity,
        message: format!("Successfully created room '{}'", request.name),
    })
}
