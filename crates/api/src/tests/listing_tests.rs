// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Listing scope and pagination tests.

use staybook_domain::{HotelStatus, Role, RoomStatus, UserStatus};
use staybook_persistence::Persistence;
use time::Month;

use crate::error::ApiError;
use crate::request_response::ListBookingsRequest;
use crate::tests::helpers::{
    NOW, Seeded, booking_request, create_default_booking, date, principal, seed,
};
use crate::{create_booking, list_bookings};

fn list_request() -> ListBookingsRequest {
    ListBookingsRequest {
        page: 1,
        per_page: 50,
        status: None,
    }
}

#[test]
fn test_customer_sees_only_own_bookings() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    create_default_booking(&mut db, &seeded);

    let stranger = principal(&mut db, seeded.other_customer_id);
    create_booking(
        &mut db,
        &stranger,
        booking_request(
            seeded.room_id,
            date(2025, Month::April, 1),
            date(2025, Month::April, 3),
        ),
        NOW,
    )
    .unwrap();

    let customer = principal(&mut db, seeded.customer_id);
    let response = list_bookings(&mut db, &customer, list_request()).unwrap();
    assert_eq!(response.total_count, 1);
    assert_eq!(response.bookings.len(), 1);
    assert_eq!(response.bookings[0].user_id, seeded.customer_id);
}

#[test]
fn test_owner_sees_bookings_against_own_hotels_only() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    create_default_booking(&mut db, &seeded);

    let owner = principal(&mut db, seeded.owner_id);
    let response = list_bookings(&mut db, &owner, list_request()).unwrap();
    assert_eq!(response.total_count, 1);

    let other_owner = principal(&mut db, seeded.other_owner_id);
    let response = list_bookings(&mut db, &other_owner, list_request()).unwrap();
    assert_eq!(response.total_count, 0);
}

#[test]
fn test_city_admin_scope_follows_hotel_city() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    create_default_booking(&mut db, &seeded);

    // Seeded hotel is in city 100.
    let city_admin = principal(&mut db, seeded.city_admin_id);
    let response = list_bookings(&mut db, &city_admin, list_request()).unwrap();
    assert_eq!(response.total_count, 1);

    let other_admin_id = db
        .create_user("Bea Admin", Role::CityAdmin, UserStatus::Active, Some(200))
        .unwrap();
    let other_admin = principal(&mut db, other_admin_id);
    let response = list_bookings(&mut db, &other_admin, list_request()).unwrap();
    assert_eq!(response.total_count, 0);
}

#[test]
fn test_super_admin_sees_everything() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    create_default_booking(&mut db, &seeded);

    // A booking in a different city by a different customer.
    let far_hotel = db
        .create_hotel(seeded.other_owner_id, 300, "Mountain Lodge", HotelStatus::Approved, true)
        .unwrap();
    let far_room = db
        .create_room(far_hotel, "Cabin", 120, "USD", 4, RoomStatus::Visible)
        .unwrap();
    let stranger = principal(&mut db, seeded.other_customer_id);
    create_booking(
        &mut db,
        &stranger,
        booking_request(far_room, date(2025, Month::April, 1), date(2025, Month::April, 3)),
        NOW,
    )
    .unwrap();

    let super_admin = principal(&mut db, seeded.super_admin_id);
    let response = list_bookings(&mut db, &super_admin, list_request()).unwrap();
    assert_eq!(response.total_count, 2);
}

#[test]
fn test_status_filter() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    create_default_booking(&mut db, &seeded);

    let customer = principal(&mut db, seeded.customer_id);

    let mut request = list_request();
    request.status = Some(String::from("confirmed"));
    let response = list_bookings(&mut db, &customer, request).unwrap();
    assert_eq!(response.total_count, 0);

    let mut request = list_request();
    request.status = Some(String::from("pending"));
    let response = list_bookings(&mut db, &customer, request).unwrap();
    assert_eq!(response.total_count, 1);
}

#[test]
fn test_unknown_status_filter_is_validation_error() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let customer = principal(&mut db, seeded.customer_id);

    let mut request = list_request();
    request.status = Some(String::from("tentative"));
    let result = list_bookings(&mut db, &customer, request);
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_pagination_is_finite_and_ordered() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let customer = principal(&mut db, seeded.customer_id);

    // Three non-overlapping bookings on the same room.
    for (from, to) in [(10, 12), (12, 14), (14, 16)] {
        create_booking(
            &mut db,
            &customer,
            booking_request(
                seeded.room_id,
                date(2025, Month::March, from),
                date(2025, Month::March, to),
            ),
            NOW,
        )
        .unwrap();
    }

    let page_one = list_bookings(
        &mut db,
        &customer,
        ListBookingsRequest {
            page: 1,
            per_page: 2,
            status: None,
        },
    )
    .unwrap();
    assert_eq!(page_one.bookings.len(), 2);
    assert_eq!(page_one.total_count, 3);
    assert_eq!(page_one.total_pages, 2);

    let page_two = list_bookings(
        &mut db,
        &customer,
        ListBookingsRequest {
            page: 2,
            per_page: 2,
            status: None,
        },
    )
    .unwrap();
    assert_eq!(page_two.bookings.len(), 1);

    // Oldest first: the last page holds the most recent booking.
    assert_eq!(page_two.bookings[0].check_in, date(2025, Month::March, 14));

    // An exact division yields no phantom trailing page.
    let exact = list_bookings(
        &mut db,
        &customer,
        ListBookingsRequest {
            page: 1,
            per_page: 3,
            status: None,
        },
    )
    .unwrap();
    assert_eq!(exact.total_pages, 1);
}

#[test]
fn test_per_page_is_capped() {
    let mut db = Persistence::new_in_memory().unwrap();
    let seeded: Seeded = seed(&mut db);
    let customer = principal(&mut db, seeded.customer_id);

    let response = list_bookings(
        &mut db,
        &customer,
        ListBookingsRequest {
            page: 1,
            per_page: 10_000,
            status: None,
        },
    )
    .unwrap();
    assert_eq!(response.per_page, 100);
    assert_eq!(response.total_pages, 0);
}
