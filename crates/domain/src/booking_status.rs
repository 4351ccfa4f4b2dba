// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status tracking and transition logic.
//!
//! This module defines the booking lifecycle graph only. Who may trigger a
//! transition and the time-window guards are enforced by the access-control
//! layer and the api boundary respectively; the graph here is the set of
//! structurally legal moves.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created by a customer, awaiting the hotel owner's decision.
    Pending,
    /// Accepted by the hotel owner or a super admin.
    Confirmed,
    /// Withdrawn by the owning customer.
    Cancelled,
    /// Declined by the hotel owner or a super admin.
    Rejected,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Rejected)
    }

    /// Returns true if a booking in this status blocks the room's dates.
    ///
    /// Cancelled and rejected bookings never participate in availability
    /// conflicts.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Validates that a transition from this status to another is
    /// structurally permitted.
    ///
    /// A same-status "transition" is not validated here; callers treat it
    /// as an idempotent no-op before consulting the graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Pending => matches!(
                new_status,
                Self::Confirmed | Self::Rejected | Self::Cancelled
            ),
            Self::Confirmed => matches!(new_status, Self::Cancelled),
            Self::Cancelled | Self::Rejected => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Rejected,
        ];

        for status in statuses {
            let s = status.as_str();
            match BookingStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = BookingStatus::parse_str("checked_in");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(BookingStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_active_states_block_availability() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Rejected.is_active());
    }

    #[test]
    fn test_valid_transitions_from_pending() {
        let current = BookingStatus::Pending;

        assert!(
            current
                .validate_transition(BookingStatus::Confirmed)
                .is_ok()
        );
        assert!(current.validate_transition(BookingStatus::Rejected).is_ok());
        assert!(
            current
                .validate_transition(BookingStatus::Cancelled)
                .is_ok()
        );
    }

    #[test]
    fn test_confirmed_only_cancels() {
        let current = BookingStatus::Confirmed;

        assert!(
            current
                .validate_transition(BookingStatus::Cancelled)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(BookingStatus::Pending)
                .is_err()
        );
        assert!(
            current
                .validate_transition(BookingStatus::Rejected)
                .is_err()
        );
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        for terminal in [BookingStatus::Cancelled, BookingStatus::Rejected] {
            assert!(
                terminal
                    .validate_transition(BookingStatus::Pending)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(BookingStatus::Confirmed)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(BookingStatus::Cancelled)
                    .is_err()
            );
        }
    }
}
