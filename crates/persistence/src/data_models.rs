// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row and insert structs mapping the schema to domain types.
//!
//! Roles, statuses, and dates are stored as text; every read converts back
//! through the domain parsers so a corrupt row surfaces as a typed error
//! instead of leaking raw strings.

use crate::error::PersistenceError;
use diesel::prelude::*;
use staybook_domain::{Booking, BookingInterval, DateRange, Hotel, Room, User};
use time::Date;
use time::format_description::BorrowedFormatItem;

/// Storage format for dates: ISO 8601 calendar dates.
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Parses a stored `YYYY-MM-DD` date column.
pub(crate) fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("invalid stored date '{value}': {e}")))
}

/// Formats a date for storage.
pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::Other(format!("failed to format date: {e}")))
}

fn to_u32(value: i32, field: &str) -> Result<u32, PersistenceError> {
    u32::try_from(value).map_err(|_| {
        PersistenceError::CorruptRecord(format!("negative stored value for {field}: {value}"))
    })
}

pub(crate) fn to_i32(value: u32, field: &str) -> Result<i32, PersistenceError> {
    i32::try_from(value)
        .map_err(|_| PersistenceError::Other(format!("value too large for {field}: {value}")))
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &str) -> Result<T, PersistenceError>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        PersistenceError::CorruptRecord(format!("invalid stored {field} '{value}': {e}"))
    })
}

/// A row from the `users` table.
#[derive(Debug, Clone, Queryable)]
pub struct UserRow {
    pub user_id: i64,
    pub display_name: String,
    pub role: String,
    pub status: String,
    pub city_id: Option<i64>,
    pub created_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.user_id,
            display_name: row.display_name,
            role: parse_field(&row.role, "role")?,
            status: parse_field(&row.status, "user status")?,
            city_id: row.city_id,
        })
    }
}

/// A row from the `hotels` table.
#[derive(Debug, Clone, Queryable)]
pub struct HotelRow {
    pub hotel_id: i64,
    pub owner_id: i64,
    pub city_id: i64,
    pub name: String,
    pub status: String,
    pub is_visible: i32,
    pub created_at: String,
}

impl TryFrom<HotelRow> for Hotel {
    type Error = PersistenceError;

    fn try_from(row: HotelRow) -> Result<Self, Self::Error> {
        Ok(Self {
            hotel_id: row.hotel_id,
            owner_id: row.owner_id,
            city_id: row.city_id,
            name: row.name,
            status: parse_field(&row.status, "hotel status")?,
            is_visible: row.is_visible != 0,
        })
    }
}

/// A row from the `rooms` table.
#[derive(Debug, Clone, Queryable)]
pub struct RoomRow {
    pub room_id: i64,
    pub hotel_id: i64,
    pub name: String,
    pub base_price: i64,
    pub currency: String,
    pub capacity: i32,
    pub status: String,
    pub created_at: String,
}

impl TryFrom<RoomRow> for Room {
    type Error = PersistenceError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Self {
            room_id: row.room_id,
            hotel_id: row.hotel_id,
            name: row.name,
            base_price: row.base_price,
            currency: row.currency,
            capacity: to_u32(row.capacity, "capacity")?,
            status: parse_field(&row.status, "room status")?,
        })
    }
}

/// A row from the `bookings` table.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub user_id: i64,
    pub owner_id: i64,
    pub room_id: i64,
    pub hotel_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub adults: i32,
    pub children: i32,
    pub guest_name: String,
    pub phone_number: String,
    pub notes: Option<String>,
    pub price: i64,
    pub currency: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            booking_id: row.booking_id,
            user_id: row.user_id,
            owner_id: row.owner_id,
            room_id: row.room_id,
            hotel_id: row.hotel_id,
            check_in: parse_date(&row.check_in)?,
            check_out: parse_date(&row.check_out)?,
            adults: to_u32(row.adults, "adults")?,
            children: to_u32(row.children, "children")?,
            guest_name: row.guest_name,
            phone_number: row.phone_number,
            notes: row.notes,
            price: row.price,
            currency: row.currency,
            status: parse_field(&row.status, "booking status")?,
        })
    }
}

/// The occupancy projection of a booking row, used by the in-transaction
/// availability scan.
#[derive(Debug, Clone, Queryable)]
pub struct IntervalRow {
    pub booking_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
}

impl TryFrom<IntervalRow> for BookingInterval {
    type Error = PersistenceError;

    fn try_from(row: IntervalRow) -> Result<Self, Self::Error> {
        let check_in: Date = parse_date(&row.check_in)?;
        let check_out: Date = parse_date(&row.check_out)?;
        let range: DateRange = DateRange::new(check_in, check_out).map_err(|e| {
            PersistenceError::CorruptRecord(format!(
                "booking {} has an invalid stored range: {e}",
                row.booking_id
            ))
        })?;
        Ok(Self {
            booking_id: row.booking_id,
            range,
            status: parse_field(&row.status, "booking status")?,
        })
    }
}

/// Insert struct for the `users` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::users)]
pub struct NewUser<'a> {
    pub display_name: &'a str,
    pub role: &'a str,
    pub status: &'a str,
    pub city_id: Option<i64>,
}

/// Insert struct for the `hotels` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::hotels)]
pub struct NewHotel<'a> {
    pub owner_id: i64,
    pub city_id: i64,
    pub name: &'a str,
    pub status: &'a str,
    pub is_visible: i32,
}

/// Insert struct for the `rooms` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::rooms)]
pub struct NewRoom<'a> {
    pub hotel_id: i64,
    pub name: &'a str,
    pub base_price: i64,
    pub currency: &'a str,
    pub capacity: i32,
    pub status: &'a str,
}

/// Insert struct for the `bookings` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::bookings)]
pub struct NewBooking {
    pub user_id: i64,
    pub owner_id: i64,
    pub room_id: i64,
    pub hotel_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub adults: i32,
    pub children: i32,
    pub guest_name: String,
    pub phone_number: String,
    pub notes: Option<String>,
    pub price: i64,
    pub currency: String,
    pub status: String,
}

/// Insert struct for the `booking_events` history table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::booking_events)]
pub struct NewBookingEvent {
    pub booking_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_by: i64,
    pub changed_at: String,
}

/// A booking status transition read back from the history table.
#[derive(Debug, Clone, Queryable)]
pub struct BookingEventRow {
    pub event_id: i64,
    pub booking_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_by: i64,
    pub changed_at: String,
}
