// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod access;
mod error;
mod pipeline;
mod principal;
mod resolve;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use access::{BookingAction, ListScope, can_act, can_create_booking, can_manage_content, list_scope};
pub use error::CoreError;
pub use pipeline::{
    BookingChanges, BookingDraft, PreparedBooking, StatusChange, prepare_booking,
    prepare_status_change, prepare_update,
};
pub use principal::Principal;
pub use resolve::OwnershipChain;
