// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The tagged principal type.
//!
//! Every operation receives a `Principal` rather than a raw role string.
//! The variants carry exactly the scope data their role needs, so a city
//! admin without an assigned city cannot be represented at all.

use crate::error::CoreError;
use staybook_domain::{Role, User};

/// An authenticated caller, resolved from the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    /// A booking customer.
    Customer {
        /// The customer's user ID.
        user_id: i64,
    },
    /// A hotel owner.
    Owner {
        /// The owner's user ID.
        user_id: i64,
    },
    /// An administrator scoped to a single city.
    CityAdmin {
        /// The admin's user ID.
        user_id: i64,
        /// The city the admin is assigned to.
        city_id: i64,
    },
    /// A platform-wide administrator.
    SuperAdmin {
        /// The admin's user ID.
        user_id: i64,
    },
}

impl Principal {
    /// Builds a principal from a resolved user record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Forbidden` if the account is not active, or if
    /// the user is a city admin without an assigned city.
    pub fn from_user(user: &User) -> Result<Self, CoreError> {
        if !user.is_active() {
            return Err(CoreError::Forbidden {
                action: String::from("authenticate"),
                reason: format!("user {} is not active", user.user_id),
            });
        }

        match user.role {
            Role::Customer => Ok(Self::Customer {
                user_id: user.user_id,
            }),
            Role::Owner => Ok(Self::Owner {
                user_id: user.user_id,
            }),
            Role::CityAdmin => {
                let Some(city_id) = user.city_id else {
                    return Err(CoreError::Forbidden {
                        action: String::from("authenticate"),
                        reason: format!("city admin {} has no assigned city", user.user_id),
                    });
                };
                Ok(Self::CityAdmin {
                    user_id: user.user_id,
                    city_id,
                })
            }
            Role::SuperAdmin => Ok(Self::SuperAdmin {
                user_id: user.user_id,
            }),
        }
    }

    /// The principal's user ID.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        match self {
            Self::Customer { user_id }
            | Self::Owner { user_id }
            | Self::CityAdmin { user_id, .. }
            | Self::SuperAdmin { user_id } => *user_id,
        }
    }

    /// The role this principal holds.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Customer { .. } => Role::Customer,
            Self::Owner { .. } => Role::Owner,
            Self::CityAdmin { .. } => Role::CityAdmin,
            Self::SuperAdmin { .. } => Role::SuperAdmin,
        }
    }
}
