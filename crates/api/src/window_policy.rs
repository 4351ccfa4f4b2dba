// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking time-window policy.
//!
//! Customers may cancel or edit only while check-in is far enough away.
//! Time remaining is measured from `now` (UTC) to midnight UTC at the start
//! of the check-in date; dates are date-only, so midnight is the earliest
//! moment a guest could arrive. The window comparison is exact; whole hours
//! appear only in error messages.

use thiserror::Error;
use time::{Date, Duration, OffsetDateTime};

/// Booking window policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingWindowError {
    /// The cancellation window has closed.
    #[error(
        "Cancellation window closed: {hours_remaining} hours until check-in, more than {required} required"
    )]
    CancellationWindowClosed { hours_remaining: i64, required: i64 },

    /// The edit window has closed.
    #[error(
        "Edit window closed: {hours_remaining} hours until check-in, more than {required} required"
    )]
    EditWindowClosed { hours_remaining: i64, required: i64 },
}

/// Booking window policy configuration.
pub struct BookingWindowPolicy {
    /// Minimum hours before check-in for a customer cancellation.
    pub cancel_window_hours: i64,
    /// Minimum hours before check-in for a customer edit.
    pub edit_window_hours: i64,
}

impl Default for BookingWindowPolicy {
    fn default() -> Self {
        Self {
            cancel_window_hours: 24,
            edit_window_hours: 48,
        }
    }
}

/// Whole hours from `now` to midnight UTC at the start of the check-in date.
///
/// Negative once the check-in date has begun.
#[must_use]
pub fn hours_until_check_in(check_in: Date, now: OffsetDateTime) -> i64 {
    let check_in_midnight: OffsetDateTime = check_in.midnight().assume_utc();
    (check_in_midnight - now).whole_hours()
}

impl BookingWindowPolicy {
    /// Validates that a booking may still be cancelled by its customer.
    ///
    /// # Errors
    ///
    /// Returns `CancellationWindowClosed` unless strictly more than
    /// `cancel_window_hours` remain before check-in.
    pub fn check_cancellable(
        &self,
        check_in: Date,
        now: OffsetDateTime,
    ) -> Result<(), BookingWindowError> {
        let remaining: Duration = check_in.midnight().assume_utc() - now;
        if remaining > Duration::hours(self.cancel_window_hours) {
            Ok(())
        } else {
            Err(BookingWindowError::CancellationWindowClosed {
                hours_remaining: remaining.whole_hours(),
                required: self.cancel_window_hours,
            })
        }
    }

    /// Validates that a booking may still be edited by its customer.
    ///
    /// # Errors
    ///
    /// Returns `EditWindowClosed` unless strictly more than
    /// `edit_window_hours` remain before check-in.
    pub fn check_editable(
        &self,
        check_in: Date,
        now: OffsetDateTime,
    ) -> Result<(), BookingWindowError> {
        let remaining: Duration = check_in.midnight().assume_utc() - now;
        if remaining > Duration::hours(self.edit_window_hours) {
            Ok(())
        } else {
            Err(BookingWindowError::EditWindowClosed {
                hours_remaining: remaining.whole_hours(),
                required: self.edit_window_hours,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::Duration;
    use time::Month;

    fn check_in() -> Date {
        Date::from_calendar_date(2025, Month::March, 10).expect("valid test date")
    }

    fn hours_before(hours: i64) -> OffsetDateTime {
        check_in().midnight().assume_utc() - Duration::hours(hours)
    }

    #[test]
    fn test_hours_until_check_in() {
        assert_eq!(hours_until_check_in(check_in(), hours_before(30)), 30);
        assert_eq!(hours_until_check_in(check_in(), hours_before(0)), 0);
        assert_eq!(hours_until_check_in(check_in(), hours_before(-5)), -5);
    }

    #[test]
    fn test_cancellable_outside_window() {
        let policy: BookingWindowPolicy = BookingWindowPolicy::default();
        assert!(policy.check_cancellable(check_in(), hours_before(30)).is_ok());
    }

    #[test]
    fn test_not_cancellable_inside_window() {
        let policy: BookingWindowPolicy = BookingWindowPolicy::default();

        let result = policy.check_cancellable(check_in(), hours_before(10));
        assert_eq!(
            result,
            Err(BookingWindowError::CancellationWindowClosed {
                hours_remaining: 10,
                required: 24,
            })
        );
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let policy: BookingWindowPolicy = BookingWindowPolicy::default();

        // Exactly 24 hours remaining is too late.
        assert!(policy.check_cancellable(check_in(), hours_before(24)).is_err());
        assert!(policy.check_cancellable(check_in(), hours_before(25)).is_ok());
    }

    #[test]
    fn test_partial_hours_are_not_truncated_away() {
        let policy: BookingWindowPolicy = BookingWindowPolicy::default();

        // 24 hours 50 minutes remain: strictly more than 24 hours.
        let outside = hours_before(24) - Duration::minutes(50);
        assert!(policy.check_cancellable(check_in(), outside).is_ok());

        // 23 hours 50 minutes remain: inside the window.
        let inside = hours_before(23) - Duration::minutes(50);
        assert!(policy.check_cancellable(check_in(), inside).is_err());
    }

    #[test]
    fn test_editable_requires_wider_window() {
        let policy: BookingWindowPolicy = BookingWindowPolicy::default();

        // 30 hours out: cancellable but no longer editable.
        assert!(policy.check_cancellable(check_in(), hours_before(30)).is_ok());
        assert_eq!(
            policy.check_editable(check_in(), hours_before(30)),
            Err(BookingWindowError::EditWindowClosed {
                hours_remaining: 30,
                required: 48,
            })
        );

        assert!(policy.check_editable(check_in(), hours_before(49)).is_ok());
    }

    #[test]
    fn test_past_check_in_is_closed() {
        let policy: BookingWindowPolicy = BookingWindowPolicy::default();
        assert!(policy.check_cancellable(check_in(), hours_before(-1)).is_err());
        assert!(policy.check_editable(check_in(), hours_before(-1)).is_err());
    }
}
