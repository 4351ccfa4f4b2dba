// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking writes.
//!
//! Creating or re-dating a booking is check-then-act, so the availability
//! scan is re-run inside the same immediate transaction that performs the
//! write. `SQLite`'s immediate transaction takes the database write lock up
//! front, so the scan sees every committed writer and two overlapping
//! requests serialize into one success and one `BookingConflict`.

use crate::data_models::{NewBooking, NewBookingEvent, format_date, to_i32};
use crate::diesel_schema::{booking_events, bookings};
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite;
use diesel::prelude::*;
use diesel::SqliteConnection;
use staybook::PreparedBooking;
use staybook_domain::{BookingInterval, BookingStatus, find_conflict};
use tracing::{info, warn};

/// How many times a write is retried when the database is locked.
const LOCK_RETRY_ATTEMPTS: u32 = 3;

/// Delay between lock-contention retries.
const LOCK_RETRY_BACKOFF: std::time::Duration = std::time::Duration::from_millis(50);

/// Runs a write operation with a bounded retry on transient `SQLite` lock
/// contention.
///
/// Lock contention at the transaction boundary is a scheduling artifact,
/// never an availability conflict, so it is retried here instead of being
/// surfaced to callers.
///
/// # Errors
///
/// Returns the operation's error once the retry budget is exhausted, or
/// immediately for any non-contention error.
pub fn with_write_retry<T, F>(mut op: F) -> Result<T, PersistenceError>
where
    F: FnMut() -> Result<T, PersistenceError>,
{
    let mut attempt: u32 = 0;
    loop {
        match op() {
            Err(err) if err.is_lock_contention() && attempt < LOCK_RETRY_ATTEMPTS => {
                attempt += 1;
                warn!(attempt, "Database locked, retrying write");
                std::thread::sleep(LOCK_RETRY_BACKOFF);
            }
            other => return other,
        }
    }
}

/// Builds the error for a guarded write that matched no row: the booking's
/// status moved under a concurrent writer between the caller's read and this
/// transaction.
fn stale_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    expected: BookingStatus,
) -> PersistenceError {
    match bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(bookings::status)
        .first::<String>(conn)
    {
        Ok(actual) => PersistenceError::StaleBookingStatus {
            booking_id,
            expected: expected.as_str().to_string(),
            actual,
        },
        Err(err) => err.into(),
    }
}

fn scan_for_conflict(
    conn: &mut SqliteConnection,
    prepared: &PreparedBooking,
    exclude_booking_id: Option<i64>,
) -> Result<(), PersistenceError> {
    let intervals: Vec<BookingInterval> =
        queries::bookings::list_room_intervals(conn, prepared.room_id)?;

    if let Some(conflict) = find_conflict(&prepared.range, &intervals, exclude_booking_id) {
        return Err(PersistenceError::BookingConflict {
            room_id: prepared.room_id,
            check_in: conflict.range.check_in(),
            check_out: conflict.range.check_out(),
        });
    }
    Ok(())
}

/// Inserts a new pending booking, re-checking availability inside the same
/// immediate transaction. A history row records the creation.
///
/// `changed_at` is an ISO 8601 timestamp supplied by the caller.
///
/// # Errors
///
/// Returns `BookingConflict` if the range overlaps an active booking, or
/// another error if the write fails.
pub fn create_booking(
    conn: &mut SqliteConnection,
    prepared: &PreparedBooking,
    changed_at: &str,
) -> Result<i64, PersistenceError> {
    conn.immediate_transaction(|conn| {
        scan_for_conflict(conn, prepared, None)?;

        let record = NewBooking {
            user_id: prepared.user_id,
            owner_id: prepared.owner_id,
            room_id: prepared.room_id,
            hotel_id: prepared.hotel_id,
            check_in: format_date(prepared.range.check_in())?,
            check_out: format_date(prepared.range.check_out())?,
            adults: to_i32(prepared.adults, "adults")?,
            children: to_i32(prepared.children, "children")?,
            guest_name: prepared.guest_name.clone(),
            phone_number: prepared.phone_number.clone(),
            notes: prepared.notes.clone(),
            price: prepared.price,
            currency: prepared.currency.clone(),
            status: BookingStatus::Pending.as_str().to_string(),
        };

        diesel::insert_into(bookings::table)
            .values(&record)
            .execute(conn)?;

        let booking_id: i64 = sqlite::get_last_insert_rowid(conn)?;

        let event = NewBookingEvent {
            booking_id,
            previous_status: None,
            new_status: BookingStatus::Pending.as_str().to_string(),
            changed_by: prepared.user_id,
            changed_at: changed_at.to_string(),
        };
        diesel::insert_into(booking_events::table)
            .values(&event)
            .execute(conn)?;

        info!(booking_id, "Booking created");
        Ok(booking_id)
    })
}

/// Rewrites a pending booking's fields, optionally re-checking availability
/// (required whenever the room or dates changed) inside the transaction.
///
/// The UPDATE is guarded on `status = 'pending'` so an edit that raced a
/// concurrent status change cannot rewrite a confirmed or terminal booking.
///
/// # Errors
///
/// Returns `BookingConflict` if the new range overlaps another active
/// booking, `StaleBookingStatus` if the booking is no longer pending, or
/// another error if the write fails.
pub fn update_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    prepared: &PreparedBooking,
    recheck_availability: bool,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction(|conn| {
        if recheck_availability {
            scan_for_conflict(conn, prepared, Some(booking_id))?;
        }

        let affected: usize = diesel::update(
            bookings::table
                .filter(bookings::booking_id.eq(booking_id))
                .filter(bookings::status.eq(BookingStatus::Pending.as_str())),
        )
        .set((
            bookings::room_id.eq(prepared.room_id),
            bookings::owner_id.eq(prepared.owner_id),
            bookings::hotel_id.eq(prepared.hotel_id),
            bookings::check_in.eq(format_date(prepared.range.check_in())?),
            bookings::check_out.eq(format_date(prepared.range.check_out())?),
            bookings::adults.eq(to_i32(prepared.adults, "adults")?),
            bookings::children.eq(to_i32(prepared.children, "children")?),
            bookings::guest_name.eq(&prepared.guest_name),
            bookings::phone_number.eq(&prepared.phone_number),
            bookings::notes.eq(&prepared.notes),
            bookings::price.eq(prepared.price),
            bookings::currency.eq(&prepared.currency),
            bookings::updated_at.eq(updated_at),
        ))
        .execute(conn)?;

        if affected == 0 {
            return Err(stale_status(conn, booking_id, BookingStatus::Pending));
        }

        info!(booking_id, "Booking updated");
        Ok(())
    })
}

/// Moves a booking to a new status and appends a history row in the same
/// transaction.
///
/// The transition must already have been validated against the lifecycle
/// graph. The UPDATE is guarded on `status = previous_status` so a
/// transition that raced a concurrent status change cannot resurrect a
/// terminal booking.
///
/// # Errors
///
/// Returns `StaleBookingStatus` if the booking's status is no longer
/// `previous_status`, or another error if the write fails.
pub fn set_booking_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    previous_status: BookingStatus,
    new_status: BookingStatus,
    changed_by: i64,
    changed_at: &str,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction(|conn| {
        let affected: usize = diesel::update(
            bookings::table
                .filter(bookings::booking_id.eq(booking_id))
                .filter(bookings::status.eq(previous_status.as_str())),
        )
        .set((
            bookings::status.eq(new_status.as_str()),
            bookings::updated_at.eq(changed_at),
        ))
        .execute(conn)?;

        if affected == 0 {
            return Err(stale_status(conn, booking_id, previous_status));
        }

        let event = NewBookingEvent {
            booking_id,
            previous_status: Some(previous_status.as_str().to_string()),
            new_status: new_status.as_str().to_string(),
            changed_by,
            changed_at: changed_at.to_string(),
        };
        diesel::insert_into(booking_events::table)
            .values(&event)
            .execute(conn)?;

        info!(
            booking_id,
            from = previous_status.as_str(),
            to = new_status.as_str(),
            "Booking status changed"
        );
        Ok(())
    })
}
