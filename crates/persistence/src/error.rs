// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested record was not found.
    NotFound(String),
    /// A unique constraint was violated.
    DuplicateRecord(String),
    /// A stored record failed to parse back into its domain type.
    CorruptRecord(String),
    /// A concurrent writer moved the booking's status before the guarded
    /// write could apply.
    StaleBookingStatus {
        /// The booking whose status moved.
        booking_id: i64,
        /// The status the caller read before writing.
        expected: String,
        /// The status found at write time.
        actual: String,
    },
    /// The requested range overlaps an active booking for the room.
    BookingConflict {
        /// The contested room.
        room_id: i64,
        /// The conflicting booking's check-in date.
        check_in: Date,
        /// The conflicting booking's check-out date.
        check_out: Date,
    },
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DuplicateRecord(msg) => write!(f, "Duplicate record: {msg}"),
            Self::CorruptRecord(msg) => write!(f, "Corrupt record: {msg}"),
            Self::StaleBookingStatus {
                booking_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Booking {booking_id} status is '{actual}', expected '{expected}'"
                )
            }
            Self::BookingConflict {
                room_id,
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Room {room_id} is already booked from {check_in} to {check_out}"
                )
            }
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::DuplicateRecord(info.message().to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl PersistenceError {
    /// Returns true if the error is a transient `SQLite` write-lock failure
    /// that should be retried rather than surfaced.
    #[must_use]
    pub fn is_lock_contention(&self) -> bool {
        matches!(self, Self::DatabaseError(msg) if msg.contains("database is locked"))
    }
}
