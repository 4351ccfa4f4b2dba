// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking price derivation.

use crate::availability::DateRange;
use crate::error::DomainError;

/// Computes the total price for a stay.
///
/// `total = base_price × nights`, where the number of nights comes from the
/// validated half-open range (always positive). The base price must already
/// have passed field validation (non-negative).
///
/// The price is never caller-settable; the service layer recomputes it
/// whenever the room or the dates of a booking change.
///
/// # Errors
///
/// Returns `DomainError::PriceOverflow` if the multiplication overflows
/// `i64`.
pub fn total_price(base_price: i64, range: &DateRange) -> Result<i64, DomainError> {
    let nights: i64 = range.nights();
    base_price
        .checked_mul(nights)
        .ok_or(DomainError::PriceOverflow { base_price, nights })
}
