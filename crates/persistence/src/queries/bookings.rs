// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking reads: single records, occupancy intervals, scoped listings.

use crate::data_models::{BookingEventRow, BookingRow, IntervalRow};
use crate::diesel_schema::{booking_events, bookings};
use crate::error::PersistenceError;
use crate::queries::catalog;
use diesel::prelude::*;
use diesel::SqliteConnection;
use staybook::ListScope;
use staybook_domain::{Booking, BookingInterval, BookingStatus};

/// Retrieves a booking by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored record is corrupt.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<Booking>, PersistenceError> {
    let row: Option<BookingRow> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()?;

    row.map(Booking::try_from).transpose()
}

/// Loads the occupancy intervals of every booking for a room.
///
/// Status filtering happens in the availability checker, not here, so the
/// scan sees terminal bookings too and never misses a row on a status
/// parse mismatch.
///
/// # Errors
///
/// Returns an error if the query fails or a stored record is corrupt.
pub fn list_room_intervals(
    conn: &mut SqliteConnection,
    room_id: i64,
) -> Result<Vec<BookingInterval>, PersistenceError> {
    let rows: Vec<IntervalRow> = bookings::table
        .filter(bookings::room_id.eq(room_id))
        .select((
            bookings::booking_id,
            bookings::check_in,
            bookings::check_out,
            bookings::status,
        ))
        .load::<IntervalRow>(conn)?;

    rows.into_iter().map(BookingInterval::try_from).collect()
}

/// Lists bookings within a principal's scope, oldest first.
///
/// The city scope is resolved to the set of hotel IDs in that city before
/// filtering; bookings do not store a city.
///
/// # Errors
///
/// Returns an error if the query fails or a stored record is corrupt.
pub fn list_bookings(
    conn: &mut SqliteConnection,
    scope: &ListScope,
    status: Option<BookingStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Booking>, PersistenceError> {
    let mut query = bookings::table.into_boxed();

    match scope {
        ListScope::All => {}
        ListScope::Customer(user_id) => {
            query = query.filter(bookings::user_id.eq(*user_id));
        }
        ListScope::Owner(owner_id) => {
            query = query.filter(bookings::owner_id.eq(*owner_id));
        }
        ListScope::City(city_id) => {
            let hotel_ids: Vec<i64> = catalog::list_hotel_ids_in_city(conn, *city_id)?;
            query = query.filter(bookings::hotel_id.eq_any(hotel_ids));
        }
    }

    if let Some(status) = status {
        query = query.filter(bookings::status.eq(status.as_str()));
    }

    let rows: Vec<BookingRow> = query
        .order(bookings::booking_id.asc())
        .limit(limit)
        .offset(offset)
        .load::<BookingRow>(conn)?;

    rows.into_iter().map(Booking::try_from).collect()
}

/// Counts bookings within a principal's scope.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_bookings(
    conn: &mut SqliteConnection,
    scope: &ListScope,
    status: Option<BookingStatus>,
) -> Result<i64, PersistenceError> {
    let mut query = bookings::table.into_boxed();

    match scope {
        ListScope::All => {}
        ListScope::Customer(user_id) => {
            query = query.filter(bookings::user_id.eq(*user_id));
        }
        ListScope::Owner(owner_id) => {
            query = query.filter(bookings::owner_id.eq(*owner_id));
        }
        ListScope::City(city_id) => {
            let hotel_ids: Vec<i64> = catalog::list_hotel_ids_in_city(conn, *city_id)?;
            query = query.filter(bookings::hotel_id.eq_any(hotel_ids));
        }
    }

    if let Some(status) = status {
        query = query.filter(bookings::status.eq(status.as_str()));
    }

    Ok(query.count().get_result::<i64>(conn)?)
}

/// Lists the status-transition history of a booking, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_booking_events(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Vec<BookingEventRow>, PersistenceError> {
    Ok(booking_events::table
        .filter(booking_events::booking_id.eq(booking_id))
        .order(booking_events::event_id.asc())
        .load::<BookingEventRow>(conn)?)
}
