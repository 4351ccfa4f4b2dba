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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::info;

use staybook::Principal;
use staybook_api::{
    ApiError, BookingResponse, CreateBookingRequest, CreateHotelRequest, CreateHotelResponse,
    CreateRoomRequest, CreateRoomResponse, ListBookingsRequest, ListBookingsResponse,
    UpdateBookingRequest, cancel_booking, create_booking, create_hotel, create_room, get_booking,
    list_bookings, resolve_principal, set_booking_status, update_booking,
};
use staybook_domain::BookingStatus;
use staybook_persistence::Persistence;

/// Staybook Server - HTTP server for the Staybook hospitality backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the catalog and bookings.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request for creating a booking.
///
/// `user_id` identifies the authenticated caller; credential checking
/// happens upstream of this server.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The authenticated caller's user ID.
    user_id: i64,
    /// The room to book.
    room_id: i64,
    /// Check-in date (ISO 8601, inclusive).
    check_in: String,
    /// Check-out date (ISO 8601, exclusive).
    check_out: String,
    /// Number of adults.
    adults: u32,
    /// Number of children.
    children: u32,
    /// Name the reservation is held under.
    guest_name: String,
    /// Contact phone number.
    phone_number: String,
    /// Free-form notes.
    notes: Option<String>,
}

/// API request for editing a pending booking. Absent fields are left
/// unchanged; `clear_notes` removes the notes entirely.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateBookingApiRequest {
    /// The authenticated caller's user ID.
    user_id: i64,
    /// Move the booking to a different room.
    room_id: Option<i64>,
    /// New check-in date (ISO 8601).
    check_in: Option<String>,
    /// New check-out date (ISO 8601).
    check_out: Option<String>,
    /// New adult count.
    adults: Option<u32>,
    /// New child count.
    children: Option<u32>,
    /// New guest name.
    guest_name: Option<String>,
    /// New phone number.
    phone_number: Option<String>,
    /// New notes.
    notes: Option<String>,
    /// Clear the notes entirely.
    #[serde(default)]
    clear_notes: bool,
}

/// API request for cancelling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelBookingApiRequest {
    /// The authenticated caller's user ID.
    user_id: i64,
}

/// API request for confirming or rejecting a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SetBookingStatusApiRequest {
    /// The authenticated caller's user ID.
    user_id: i64,
    /// The requested status (snake_case status string).
    status: String,
}

/// API request for creating a hotel.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateHotelApiRequest {
    /// The authenticated caller's user ID.
    user_id: i64,
    /// The owning user.
    owner_id: i64,
    /// The city this hotel belongs to.
    city_id: i64,
    /// Hotel name.
    name: String,
}

/// API request for creating a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateRoomApiRequest {
    /// The authenticated caller's user ID.
    user_id: i64,
    /// The hotel this room belongs to.
    hotel_id: i64,
    /// Room name.
    name: String,
    /// Nightly base price in minor currency units.
    base_price: i64,
    /// ISO 4217 currency code.
    currency: String,
    /// Maximum number of guests.
    capacity: u32,
}

/// Query parameters identifying the authenticated caller.
#[derive(Debug, Deserialize)]
struct CallerQuery {
    /// The authenticated caller's user ID.
    user_id: i64,
}

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
struct ListBookingsQuery {
    /// The authenticated caller's user ID.
    user_id: i64,
    /// The 1-based page to return.
    page: Option<u32>,
    /// Bookings per page.
    per_page: Option<u32>,
    /// Optional status filter.
    status: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidState { .. } | ApiError::InvalidTransition { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses an ISO 8601 date string from the wire.
fn parse_date(field: &str, value: &str) -> Result<Date, HttpError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid date for field '{field}': {e}"),
    })
}

/// Parses a booking status string from the wire.
fn parse_status(value: &str) -> Result<BookingStatus, HttpError> {
    BookingStatus::from_str(value).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    })
}

/// Handler for POST `/bookings` endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        user_id = req.user_id,
        room_id = req.room_id,
        "Handling create_booking request"
    );

    let request: CreateBookingRequest = CreateBookingRequest {
        room_id: req.room_id,
        check_in: parse_date("check_in", &req.check_in)?,
        check_out: parse_date("check_out", &req.check_out)?,
        adults: req.adults,
        children: req.children,
        guest_name: req.guest_name,
        phone_number: req.phone_number,
        notes: req.notes,
    };

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, req.user_id)?;
    let response: BookingResponse = create_booking(
        &mut persistence,
        &principal,
        request,
        OffsetDateTime::now_utc(),
    )?;

    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Query(query): Query<CallerQuery>,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, query.user_id)?;
    let response: BookingResponse = get_booking(&mut persistence, &principal, booking_id)?;

    Ok(Json(response))
}

/// Handler for PATCH `/bookings/{booking_id}` endpoint.
async fn handle_update_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdateBookingApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        user_id = req.user_id,
        booking_id, "Handling update_booking request"
    );

    let check_in: Option<Date> = match req.check_in.as_deref() {
        Some(s) => Some(parse_date("check_in", s)?),
        None => None,
    };
    let check_out: Option<Date> = match req.check_out.as_deref() {
        Some(s) => Some(parse_date("check_out", s)?),
        None => None,
    };
    let notes: Option<Option<String>> = if req.clear_notes {
        Some(None)
    } else {
        req.notes.map(Some)
    };

    let request: UpdateBookingRequest = UpdateBookingRequest {
        room_id: req.room_id,
        check_in,
        check_out,
        adults: req.adults,
        children: req.children,
        guest_name: req.guest_name,
        phone_number: req.phone_number,
        notes,
    };

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, req.user_id)?;
    let response: BookingResponse = update_booking(
        &mut persistence,
        &principal,
        booking_id,
        request,
        OffsetDateTime::now_utc(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/cancel` endpoint.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<CancelBookingApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        user_id = req.user_id,
        booking_id, "Handling cancel_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, req.user_id)?;
    let response: BookingResponse = cancel_booking(
        &mut persistence,
        &principal,
        booking_id,
        OffsetDateTime::now_utc(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/status` endpoint.
async fn handle_set_booking_status(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<SetBookingStatusApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        user_id = req.user_id,
        booking_id,
        status = %req.status,
        "Handling set_booking_status request"
    );

    let new_status: BookingStatus = parse_status(&req.status)?;

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, req.user_id)?;
    let response: BookingResponse = set_booking_status(
        &mut persistence,
        &principal,
        booking_id,
        new_status,
        OffsetDateTime::now_utc(),
    )?;

    Ok(Json(response))
}

/// Handler for GET `/bookings` endpoint.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    let request: ListBookingsRequest = ListBookingsRequest {
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(50),
        status: query.status,
    };

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, query.user_id)?;
    let response: ListBookingsResponse = list_bookings(&mut persistence, &principal, request)?;

    Ok(Json(response))
}

/// Handler for POST `/hotels` endpoint.
async fn handle_create_hotel(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateHotelApiRequest>,
) -> Result<Json<CreateHotelResponse>, HttpError> {
    info!(
        user_id = req.user_id,
        owner_id = req.owner_id,
        "Handling create_hotel request"
    );

    let request: CreateHotelRequest = CreateHotelRequest {
        owner_id: req.owner_id,
        city_id: req.city_id,
        name: req.name,
    };

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, req.user_id)?;
    let response: CreateHotelResponse = create_hotel(&mut persistence, &principal, request)?;

    Ok(Json(response))
}

/// Handler for POST `/rooms` endpoint.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateRoomApiRequest>,
) -> Result<Json<CreateRoomResponse>, HttpError> {
    info!(
        user_id = req.user_id,
        hotel_id = req.hotel_id,
        "Handling create_room request"
    );

    let request: CreateRoomRequest = CreateRoomRequest {
        hotel_id: req.hotel_id,
        name: req.name,
        base_price: req.base_price,
        currency: req.currency,
        capacity: req.capacity,
    };

    let mut persistence = app_state.persistence.lock().await;
    let principal: Principal = resolve_principal(&mut persistence, req.user_id)?;
    let response: CreateRoomResponse = create_room(&mut persistence, &principal, request)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route(
            "/bookings/{booking_id}",
            get(handle_get_booking).patch(handle_update_booking),
        )
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .route(
            "/bookings/{booking_id}/status",
            post(handle_set_booking_status),
        )
        .route("/hotels", post(handle_create_hotel))
        .route("/rooms", post(handle_create_room))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staybook Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
