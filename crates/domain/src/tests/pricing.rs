// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking price derivation.

use crate::{DateRange, DomainError, total_price};
use time::{Date, Month};

fn range(in_day: u8, out_day: u8) -> DateRange {
    DateRange::new(
        Date::from_calendar_date(2025, Month::January, in_day).expect("valid test date"),
        Date::from_calendar_date(2025, Month::January, out_day).expect("valid test date"),
    )
    .expect("valid test range")
}

#[test]
fn test_price_is_base_price_times_nights() {
    // base price 100, 2025-01-01 to 2025-01-04 is 3 nights.
    let total = total_price(100, &range(1, 4)).expect("price computes");
    assert_eq!(total, 300);
}

#[test]
fn test_single_night_price() {
    let total = total_price(7500, &range(10, 11)).expect("price computes");
    assert_eq!(total, 7500);
}

#[test]
fn test_zero_base_price_is_free() {
    let total = total_price(0, &range(1, 4)).expect("price computes");
    assert_eq!(total, 0);
}

#[test]
fn test_price_is_deterministic() {
    let r = range(1, 4);
    let first = total_price(100, &r).expect("price computes");
    let second = total_price(100, &r).expect("price computes");
    assert_eq!(first, second);
}

#[test]
fn test_price_overflow_is_reported() {
    let result = total_price(i64::MAX, &range(1, 4));
    match result {
        Err(DomainError::PriceOverflow { base_price, nights }) => {
            assert_eq!(base_price, i64::MAX);
            assert_eq!(nights, 3);
        }
        other => panic!("Expected PriceOverflow, got: {other:?}"),
    }
}
