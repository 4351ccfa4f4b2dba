// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writes for users, hotels, and rooms.

use crate::data_models::{NewHotel, NewRoom, NewUser, to_i32};
use crate::diesel_schema::{hotels, rooms, users};
use crate::error::PersistenceError;
use crate::sqlite;
use diesel::prelude::*;
use diesel::SqliteConnection;
use staybook_domain::{HotelStatus, Role, RoomStatus, UserStatus};
use tracing::info;

/// Creates a user record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    display_name: &str,
    role: Role,
    status: UserStatus,
    city_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating user '{}' with role: {}",
        display_name,
        role.as_str()
    );

    let record = NewUser {
        display_name,
        role: role.as_str(),
        status: status.as_str(),
        city_id,
    };

    diesel::insert_into(users::table)
        .values(&record)
        .execute(conn)?;

    sqlite::get_last_insert_rowid(conn)
}

/// Creates a hotel record.
///
/// The `(owner_id, name, city_id)` uniqueness constraint surfaces as
/// `DuplicateRecord`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_hotel(
    conn: &mut SqliteConnection,
    owner_id: i64,
    city_id: i64,
    name: &str,
    status: HotelStatus,
    is_visible: bool,
) -> Result<i64, PersistenceError> {
    info!("Creating hotel '{}' for owner {}", name, owner_id);

    let record = NewHotel {
        owner_id,
        city_id,
        name,
        status: status.as_str(),
        is_visible: i32::from(is_visible),
    };

    diesel::insert_into(hotels::table)
        .values(&record)
        .execute(conn)?;

    sqlite::get_last_insert_rowid(conn)
}

/// Creates a room record.
///
/// Room names are unique per hotel case-insensitively (enforced by the
/// schema's `COLLATE NOCASE` column).
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_room(
    conn: &mut SqliteConnection,
    hotel_id: i64,
    name: &str,
    base_price: i64,
    currency: &str,
    capacity: u32,
    status: RoomStatus,
) -> Result<i64, PersistenceError> {
    info!("Creating room '{}' in hotel {}", name, hotel_id);

    let record = NewRoom {
        hotel_id,
        name,
        base_price,
        currency,
        capacity: to_i32(capacity, "capacity")?,
        status: status.as_str(),
    };

    diesel::insert_into(rooms::table)
        .values(&record)
        .execute(conn)?;

    sqlite::get_last_insert_rowid(conn)
}
