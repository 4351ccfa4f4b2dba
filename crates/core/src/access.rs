// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access control.
//!
//! All booking authorization flows through the single `can_act` dispatcher.
//! Listing is handled separately as a scope derivation because it narrows a
//! query rather than gating a single record.

use crate::error::CoreError;
use crate::principal::Principal;
use staybook_domain::Booking;

/// Actions a principal can attempt on an existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    /// Read a single booking.
    View,
    /// Edit the booking's dates, room, party, or contact fields.
    Edit,
    /// Cancel the booking.
    Cancel,
    /// Confirm or reject the booking.
    ChangeStatus,
}

impl BookingAction {
    /// Returns the action name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view_booking",
            Self::Edit => "edit_booking",
            Self::Cancel => "cancel_booking",
            Self::ChangeStatus => "change_booking_status",
        }
    }
}

/// The scope a principal's booking listing is narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// All bookings, unscoped.
    All,
    /// Bookings whose hotel belongs to this city.
    City(i64),
    /// Bookings against hotels owned by this user.
    Owner(i64),
    /// Bookings made by this user.
    Customer(i64),
}

/// Checks whether a principal may perform an action on a booking.
///
/// - View: the booking's customer, the hotel owner, or a super admin.
/// - Edit and Cancel: the booking's customer only.
/// - `ChangeStatus`: the hotel owner or a super admin.
///
/// The owner comparison uses the booking's denormalized `owner_id`, so no
/// chain resolution is needed to authorize.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the action is not permitted.
pub fn can_act(
    principal: &Principal,
    action: BookingAction,
    booking: &Booking,
) -> Result<(), CoreError> {
    let allowed: bool = match action {
        BookingAction::View => match principal {
            Principal::SuperAdmin { .. } => true,
            Principal::Customer { user_id } => *user_id == booking.user_id,
            Principal::Owner { user_id } => *user_id == booking.owner_id,
            Principal::CityAdmin { .. } => false,
        },
        BookingAction::Edit | BookingAction::Cancel => match principal {
            Principal::Customer { user_id } => *user_id == booking.user_id,
            _ => false,
        },
        BookingAction::ChangeStatus => match principal {
            Principal::SuperAdmin { .. } => true,
            Principal::Owner { user_id } => *user_id == booking.owner_id,
            _ => false,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden {
            action: action.as_str().to_string(),
            reason: format!(
                "{} {} may not act on booking {}",
                principal.role().as_str(),
                principal.user_id(),
                booking.booking_id
            ),
        })
    }
}

/// Checks whether a principal may create a booking. Customers only.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for any non-customer principal.
pub fn can_create_booking(principal: &Principal) -> Result<(), CoreError> {
    match principal {
        Principal::Customer { .. } => Ok(()),
        _ => Err(CoreError::Forbidden {
            action: String::from("create_booking"),
            reason: format!(
                "only customers may create bookings, not {}",
                principal.role().as_str()
            ),
        }),
    }
}

/// Checks whether a principal may create or modify content (hotels, rooms)
/// belonging to `owner_id`.
///
/// Owners may manage their own content; super admins are unrestricted;
/// customers and city admins are denied.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the principal may not manage the
/// content.
pub fn can_manage_content(principal: &Principal, owner_id: i64) -> Result<(), CoreError> {
    match principal {
        Principal::SuperAdmin { .. } => Ok(()),
        Principal::Owner { user_id } if *user_id == owner_id => Ok(()),
        _ => Err(CoreError::Forbidden {
            action: String::from("manage_content"),
            reason: format!(
                "{} {} may not manage content owned by user {owner_id}",
                principal.role().as_str(),
                principal.user_id()
            ),
        }),
    }
}

/// Derives the listing scope for a principal.
///
/// The city scope is resolved downstream into the set of hotel IDs in that
/// city; the scope itself never stores hotel data.
#[must_use]
pub const fn list_scope(principal: &Principal) -> ListScope {
    match principal {
        Principal::SuperAdmin { .. } => ListScope::All,
        Principal::CityAdmin { city_id, .. } => ListScope::City(*city_id),
        Principal::Owner { user_id } => ListScope::Owner(*user_id),
        Principal::Customer { user_id } => ListScope::Customer(*user_id),
    }
}
