// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Staybook hospitality backend.
//!
//! This crate stores the marketplace catalog (users, hotels, rooms) and the
//! bookings against it. It is built on Diesel over `SQLite`.
//!
//! ## Concurrency model
//!
//! `SQLite` allows one writer at a time. Every booking write that depends on
//! an availability check runs inside an immediate transaction: the write
//! lock is taken up front, the conflict scan runs against all committed
//! bookings, and the insert/update commits before any other writer can
//! start. Transient `database is locked` errors at the transaction boundary
//! are retried with a bounded backoff and never surfaced as conflicts.
//!
//! ## Testing
//!
//! In-memory databases get a unique name per instance via an atomic
//! counter, so tests are isolated without time-based naming collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use staybook::{ListScope, PreparedBooking};
use staybook_domain::{
    Booking, BookingInterval, BookingStatus, Hotel, HotelStatus, Role, Room, RoomStatus, User,
    UserStatus,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::BookingEventRow;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the marketplace catalog and bookings.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Creates a user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_user(
        &mut self,
        display_name: &str,
        role: Role,
        status: UserStatus,
        city_id: Option<i64>,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_user(&mut self.conn, display_name, role, status, city_id)
    }

    /// Creates a hotel record.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecord` if the owner already has a hotel with this
    /// name in this city, or another error if the insert fails.
    pub fn create_hotel(
        &mut self,
        owner_id: i64,
        city_id: i64,
        name: &str,
        status: HotelStatus,
        is_visible: bool,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_hotel(&mut self.conn, owner_id, city_id, name, status, is_visible)
    }

    /// Creates a room record.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecord` if the hotel already has a room with this
    /// name (case-insensitively), or another error if the insert fails.
    pub fn create_room(
        &mut self,
        hotel_id: i64,
        name: &str,
        base_price: i64,
        currency: &str,
        capacity: u32,
        status: RoomStatus,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_room(
            &mut self.conn,
            hotel_id,
            name,
            base_price,
            currency,
            capacity,
            status,
        )
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored record is corrupt.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        queries::catalog::get_user(&mut self.conn, user_id)
    }

    /// Retrieves a hotel by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored record is corrupt.
    pub fn get_hotel(&mut self, hotel_id: i64) -> Result<Option<Hotel>, PersistenceError> {
        queries::catalog::get_hotel(&mut self.conn, hotel_id)
    }

    /// Retrieves a room by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored record is corrupt.
    pub fn get_room(&mut self, room_id: i64) -> Result<Option<Room>, PersistenceError> {
        queries::catalog::get_room(&mut self.conn, room_id)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Inserts a new pending booking, re-checking availability inside the
    /// write transaction.
    ///
    /// # Errors
    ///
    /// Returns `BookingConflict` if the range overlaps an active booking
    /// for the room, or another error if the write fails.
    pub fn create_booking(
        &mut self,
        prepared: &PreparedBooking,
        changed_at: &str,
    ) -> Result<i64, PersistenceError> {
        let conn = &mut self.conn;
        mutations::bookings::with_write_retry(|| {
            mutations::bookings::create_booking(conn, prepared, changed_at)
        })
    }

    /// Rewrites a booking's fields, re-checking availability when the room
    /// or dates changed.
    ///
    /// # Errors
    ///
    /// Returns `BookingConflict` if the new range overlaps another active
    /// booking, or another error if the write fails.
    pub fn update_booking(
        &mut self,
        booking_id: i64,
        prepared: &PreparedBooking,
        recheck_availability: bool,
        updated_at: &str,
    ) -> Result<(), PersistenceError> {
        let conn = &mut self.conn;
        mutations::bookings::with_write_retry(|| {
            mutations::bookings::update_booking(
                conn,
                booking_id,
                prepared,
                recheck_availability,
                updated_at,
            )
        })
    }

    /// Moves a booking to a new status and appends a history row.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_booking_status(
        &mut self,
        booking_id: i64,
        previous_status: BookingStatus,
        new_status: BookingStatus,
        changed_by: i64,
        changed_at: &str,
    ) -> Result<(), PersistenceError> {
        let conn = &mut self.conn;
        mutations::bookings::with_write_retry(|| {
            mutations::bookings::set_booking_status(
                conn,
                booking_id,
                previous_status,
                new_status,
                changed_by,
                changed_at,
            )
        })
    }

    /// Retrieves a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored record is corrupt.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)
    }

    /// Loads the occupancy intervals of every booking for a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored record is corrupt.
    pub fn list_room_intervals(
        &mut self,
        room_id: i64,
    ) -> Result<Vec<BookingInterval>, PersistenceError> {
        queries::bookings::list_room_intervals(&mut self.conn, room_id)
    }

    /// Lists bookings within a principal's scope, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored record is corrupt.
    pub fn list_bookings(
        &mut self,
        scope: &ListScope,
        status: Option<BookingStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings(&mut self.conn, scope, status, limit, offset)
    }

    /// Counts bookings within a principal's scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings(
        &mut self,
        scope: &ListScope,
        status: Option<BookingStatus>,
    ) -> Result<i64, PersistenceError> {
        queries::bookings::count_bookings(&mut self.conn, scope, status)
    }

    /// Lists the status-transition history of a booking, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_booking_events(
        &mut self,
        booking_id: i64,
    ) -> Result<Vec<BookingEventRow>, PersistenceError> {
        queries::bookings::list_booking_events(&mut self.conn, booking_id)
    }
}
