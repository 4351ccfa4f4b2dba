// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle and time-window enforcement tests.

use staybook_domain::BookingStatus;
use staybook_persistence::Persistence;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::error::ApiError;
use crate::request_response::UpdateBookingRequest;
use crate::tests::helpers::{NOW, Seeded, create_default_booking, date, principal, seed};
use crate::{cancel_booking, set_booking_status, update_booking};

/// `now` positioned the given number of hours before midnight UTC on the
/// check-in date.
fn hours_before(check_in: Date, hours: i64) -> OffsetDateTime {
    check_in.midnight().assume_utc() - Duration::hours(hours)
}

#[test]
fn test_owner_confirms_pending_booking() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let owner = principal(&mut db, seeded.owner_id);

    let confirmed = set_booking_status(
        &mut db,
        &owner,
        booking.booking_id,
        BookingStatus::Confirmed,
        NOW,
    )
    .unwrap();
    assert_eq!(confirmed.status, "confirmed");
}

#[test]
fn test_owner_rejects_pending_booking() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let owner = principal(&mut db, seeded.owner_id);

    let rejected = set_booking_status(
        &mut db,
        &owner,
        booking.booking_id,
        BookingStatus::Rejected,
        NOW,
    )
    .unwrap();
    assert_eq!(rejected.status, "rejected");
}

#[test]
fn test_repeated_confirm_is_idempotent_noop() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let owner = principal(&mut db, seeded.owner_id);

    set_booking_status(&mut db, &owner, booking.booking_id, BookingStatus::Confirmed, NOW).unwrap();
    let again = set_booking_status(
        &mut db,
        &owner,
        booking.booking_id,
        BookingStatus::Confirmed,
        NOW,
    )
    .unwrap();
    assert_eq!(again.status, "confirmed");

    // The no-op writes no history row: creation plus one transition.
    let events = db.list_booking_events(booking.booking_id).unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn test_cancelled_booking_cannot_be_confirmed() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);

    let customer = principal(&mut db, seeded.customer_id);
    cancel_booking(&mut db, &customer, booking.booking_id, NOW).unwrap();

    let owner = principal(&mut db, seeded.owner_id);
    let result = set_booking_status(
        &mut db,
        &owner,
        booking.booking_id,
        BookingStatus::Confirmed,
        NOW,
    );
    assert!(matches!(result, Err(ApiError::InvalidTransition { .. })));
}

#[test]
fn test_owner_cannot_cancel_through_status_change() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let owner = principal(&mut db, seeded.owner_id);

    let result = set_booking_status(
        &mut db,
        &owner,
        booking.booking_id,
        BookingStatus::Cancelled,
        NOW,
    );
    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_cancel_outside_window_succeeds() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let customer = principal(&mut db, seeded.customer_id);

    // 30 hours before check-in: more than 24 remain.
    let now = hours_before(date(2025, Month::March, 10), 30);
    let cancelled = cancel_booking(&mut db, &customer, booking.booking_id, now).unwrap();
    assert_eq!(cancelled.status, "cancelled");
}

#[test]
fn test_cancel_inside_window_is_rejected() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let customer = principal(&mut db, seeded.customer_id);

    let now = hours_before(date(2025, Month::March, 10), 10);
    let result = cancel_booking(&mut db, &customer, booking.booking_id, now);
    match result {
        Err(ApiError::InvalidTransition { from, to, .. }) => {
            assert_eq!(from, "pending");
            assert_eq!(to, "cancelled");
        }
        other => panic!("Expected InvalidTransition, got: {other:?}"),
    }
}

#[test]
fn test_confirmed_booking_remains_cancellable() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);

    let owner = principal(&mut db, seeded.owner_id);
    set_booking_status(&mut db, &owner, booking.booking_id, BookingStatus::Confirmed, NOW).unwrap();

    let customer = principal(&mut db, seeded.customer_id);
    let cancelled = cancel_booking(&mut db, &customer, booking.booking_id, NOW).unwrap();
    assert_eq!(cancelled.status, "cancelled");
}

#[test]
fn test_repeated_cancel_is_idempotent_even_inside_window() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let customer = principal(&mut db, seeded.customer_id);

    cancel_booking(&mut db, &customer, booking.booking_id, NOW).unwrap();

    // The no-op path returns the unchanged booking without a window check.
    let now = hours_before(date(2025, Month::March, 10), 1);
    let again = cancel_booking(&mut db, &customer, booking.booking_id, now).unwrap();
    assert_eq!(again.status, "cancelled");
}

#[test]
fn test_edit_outside_window_reprices() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let customer = principal(&mut db, seeded.customer_id);

    let request = UpdateBookingRequest {
        check_out: Some(date(2025, Month::March, 15)),
        ..UpdateBookingRequest::default()
    };
    let updated = update_booking(&mut db, &customer, booking.booking_id, request, NOW).unwrap();

    assert_eq!(updated.check_out, date(2025, Month::March, 15));
    // 5 nights at base price 100.
    assert_eq!(updated.price, 500);
    assert_eq!(updated.status, "pending");
}

#[test]
fn test_edit_inside_window_is_rejected() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let customer = principal(&mut db, seeded.customer_id);

    // 30 hours out: still cancellable, no longer editable.
    let now = hours_before(date(2025, Month::March, 10), 30);
    let request = UpdateBookingRequest {
        check_out: Some(date(2025, Month::March, 15)),
        ..UpdateBookingRequest::default()
    };
    let result = update_booking(&mut db, &customer, booking.booking_id, request, now);
    assert!(matches!(result, Err(ApiError::InvalidTransition { .. })));
}

#[test]
fn test_confirmed_booking_cannot_be_edited() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);

    let owner = principal(&mut db, seeded.owner_id);
    set_booking_status(&mut db, &owner, booking.booking_id, BookingStatus::Confirmed, NOW).unwrap();

    let customer = principal(&mut db, seeded.customer_id);
    let request = UpdateBookingRequest {
        guest_name: Some(String::from("New Name")),
        ..UpdateBookingRequest::default()
    };
    let result = update_booking(&mut db, &customer, booking.booking_id, request, NOW);
    match result {
        Err(ApiError::InvalidTransition { from, to, .. }) => {
            assert_eq!(from, "confirmed");
            assert_eq!(to, "pending");
        }
        other => panic!("Expected InvalidTransition, got: {other:?}"),
    }
}

#[test]
fn test_edit_moving_rooms_reprices_against_new_room() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);
    let customer = principal(&mut db, seeded.customer_id);

    let suite_id = db
        .create_room(
            seeded.hotel_id,
            "Presidential Suite",
            250,
            "USD",
            4,
            staybook_domain::RoomStatus::Visible,
        )
        .unwrap();

    let request = UpdateBookingRequest {
        room_id: Some(suite_id),
        ..UpdateBookingRequest::default()
    };
    let updated = update_booking(&mut db, &customer, booking.booking_id, request, NOW).unwrap();

    assert_eq!(updated.room_id, suite_id);
    // 2 nights at base price 250.
    assert_eq!(updated.price, 500);
}

#[test]
fn test_edit_onto_occupied_room_is_conflict() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let booking = create_default_booking(&mut db, &seeded);

    // A second booking holding March 14-16 on the same room.
    let stranger = principal(&mut db, seeded.other_customer_id);
    crate::create_booking(
        &mut db,
        &stranger,
        crate::tests::helpers::booking_request(
            seeded.room_id,
            date(2025, Month::March, 14),
            date(2025, Month::March, 16),
        ),
        NOW,
    )
    .unwrap();

    let customer = principal(&mut db, seeded.customer_id);
    let request = UpdateBookingRequest {
        check_in: Some(date(2025, Month::March, 13)),
        check_out: Some(date(2025, Month::March, 15)),
        ..UpdateBookingRequest::default()
    };
    let result = update_booking(&mut db, &customer, booking.booking_id, request, NOW);
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}
