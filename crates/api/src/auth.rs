// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal resolution.
//!
//! Credential storage and session issuance live outside this system; a
//! caller arrives as a user ID that has already been authenticated. This
//! module resolves that ID against the user table into the tagged
//! `Principal` the engine authorizes with.

use staybook::Principal;
use staybook_domain::User;
use staybook_persistence::Persistence;

use crate::error::{ApiError, translate_core_error};

/// Resolves an authenticated user ID into a principal.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `user_id` - The authenticated caller's user ID
///
/// # Errors
///
/// Returns `NotFound` if no such user exists, `Forbidden` if the account is
/// inactive or a city admin has no assigned city, or `Internal` if the
/// lookup fails.
pub fn resolve_principal(
    persistence: &mut Persistence,
    user_id: i64,
) -> Result<Principal, ApiError> {
    let user: User = persistence
        .get_user(user_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to query user {user_id}: {e}"),
        })?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("User"),
            message: format!("User {user_id} does not exist"),
        })?;

    Principal::from_user(&user).map_err(translate_core_error)
}
