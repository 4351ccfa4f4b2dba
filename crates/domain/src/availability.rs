// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range availability checking.
//!
//! Booking ranges are half-open `[check_in, check_out)` intervals: the
//! check-out date is exclusive, so one booking's check-out day may equal
//! the next booking's check-in day on the same room without conflict.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// A validated half-open date range.
///
/// Construction guarantees `check_out > check_in`, so the range always
/// spans at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    check_in: Date,
    check_out: Date,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `check_out` does not
    /// strictly exceed `check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidDateRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// The inclusive check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// The exclusive check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Number of nights spanned by the range. Always positive.
    #[must_use]
    pub fn nights(&self) -> i64 {
        i64::from(self.check_out.to_julian_day() - self.check_in.to_julian_day())
    }

    /// Half-open overlap test: `[a, b)` and `[c, d)` overlap iff
    /// `a < d && c < b`.
    ///
    /// Touching endpoints (one range's check-out equals the other's
    /// check-in) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// A booking's occupancy interval, as seen by the availability checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingInterval {
    /// The booking's ID, used for self-exclusion on updates.
    pub booking_id: i64,
    /// The booked range.
    pub range: DateRange,
    /// The booking's lifecycle status.
    pub status: BookingStatus,
}

/// Finds the first existing booking that conflicts with a candidate range.
///
/// Only bookings in an active status (pending or confirmed) block the
/// range; cancelled and rejected bookings never conflict.
/// `exclude_booking_id` lets an update check availability without
/// conflicting with itself.
#[must_use]
pub fn find_conflict<'a>(
    candidate: &DateRange,
    existing: &'a [BookingInterval],
    exclude_booking_id: Option<i64>,
) -> Option<&'a BookingInterval> {
    existing.iter().find(|interval| {
        if Some(interval.booking_id) == exclude_booking_id {
            return false;
        }
        interval.status.is_active() && candidate.overlaps(&interval.range)
    })
}
