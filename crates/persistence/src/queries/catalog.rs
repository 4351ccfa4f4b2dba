// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lookups for users, hotels, and rooms.

use crate::data_models::{HotelRow, RoomRow, UserRow};
use crate::diesel_schema::{hotels, rooms, users};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;
use staybook_domain::{Hotel, Room, User};

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored record is corrupt.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<User>, PersistenceError> {
    let row: Option<UserRow> = users::table
        .filter(users::user_id.eq(user_id))
        .first::<UserRow>(conn)
        .optional()?;

    row.map(User::try_from).transpose()
}

/// Retrieves a hotel by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored record is corrupt.
pub fn get_hotel(
    conn: &mut SqliteConnection,
    hotel_id: i64,
) -> Result<Option<Hotel>, PersistenceError> {
    let row: Option<HotelRow> = hotels::table
        .filter(hotels::hotel_id.eq(hotel_id))
        .first::<HotelRow>(conn)
        .optional()?;

    row.map(Hotel::try_from).transpose()
}

/// Retrieves a room by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored record is corrupt.
pub fn get_room(
    conn: &mut SqliteConnection,
    room_id: i64,
) -> Result<Option<Room>, PersistenceError> {
    let row: Option<RoomRow> = rooms::table
        .filter(rooms::room_id.eq(room_id))
        .first::<RoomRow>(conn)
        .optional()?;

    row.map(Room::try_from).transpose()
}

/// Lists the IDs of all hotels located in a city.
///
/// Used to resolve a city admin's listing scope; bookings do not store a
/// city, so the hotel set is derived on every listing.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_hotel_ids_in_city(
    conn: &mut SqliteConnection,
    city_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(hotels::table
        .filter(hotels::city_id.eq(city_id))
        .select(hotels::hotel_id)
        .load::<i64>(conn)?)
}
