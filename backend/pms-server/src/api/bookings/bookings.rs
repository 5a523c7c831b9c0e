//! Booking REST API handlers
//!
//! Every handler resolves the caller to a `TenantContext` and only ever
//! returns bookings of properties inside the caller's scope.

use crate::{
    ApiError, ApiResult, AppState, BookingDto, BookingListResponse, BookingResponse,
    CreateBookingRequest, ListBookingsQuery, Tenant, UpdateBookingStatusRequest, parse_id,
};

use pms_auth::{filter_by_property_access, require_property_access, require_verified_user};
use pms_core::{Booking, BookingStatus};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/bookings
///
/// List bookings across the caller's properties, optionally narrowed to one
pub async fn list_bookings(
    State(state): State<AppState>,
    Tenant(ctx): Tenant,
    Query(query): Query<ListBookingsQuery>,
) -> ApiResult<Json<BookingListResponse>> {
    let property_id = match query.property_id {
        Some(ref raw) => {
            let id = parse_id(raw, "property_id")?;
            require_property_access(&ctx, id)?;
            Some(id)
        }
        None => None,
    };

    let directory = state.directory.read().await;
    let bookings = filter_by_property_access(&ctx, directory.bookings())
        .into_iter()
        .filter(|b| property_id.is_none_or(|id| b.property_id == id))
        .filter(|b| query.include_cancelled || !b.is_cancelled())
        .map(BookingDto::from)
        .collect();

    Ok(Json(BookingListResponse { bookings }))
}

/// GET /api/v1/bookings/{id}
///
/// A booking outside the caller's scope is reported exactly like a missing one.
pub async fn get_booking(
    State(state): State<AppState>,
    Tenant(ctx): Tenant,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking_id = parse_id(&id, "id")?;

    let directory = state.directory.read().await;
    let booking = directory
        .find_booking(booking_id)
        .ok_or_else(|| booking_not_found(booking_id))?;

    require_property_access(&ctx, booking.property_id)
        .map_err(|_| booking_not_found(booking_id))?;

    Ok(Json(BookingResponse {
        booking: booking.into(),
    }))
}

/// POST /api/v1/bookings
///
/// Create a confirmed booking. Requires a verified account with access to
/// the target property.
pub async fn create_booking(
    State(state): State<AppState>,
    Tenant(ctx): Tenant,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    // 1. Authorization
    require_verified_user(&ctx)?;
    require_property_access(&ctx, req.property_id)?;

    // 2. Validate input
    let check_in = parse_date(&req.check_in, "checkIn")?;
    let check_out = parse_date(&req.check_out, "checkOut")?;
    let mut booking = Booking::new(0, req.property_id, &req.guest_name, check_in, check_out)?;

    // 3. Property must exist
    let mut directory = state.directory.write().await;
    if directory.find_property(req.property_id).is_none() {
        return Err(ApiError::NotFound {
            message: format!("Property {} not found", req.property_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 4. Assign id and store
    booking.id = directory
        .next_booking_id()
        .ok_or_else(|| ApiError::Internal {
            message: "Booking id space exhausted".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!(
        "User {} created booking {} at property {} ({} nights)",
        ctx.user_id(),
        booking.id,
        booking.property_id,
        booking.nights()
    );

    let dto = BookingDto::from(&booking);
    directory.insert_booking(booking);

    Ok((StatusCode::CREATED, Json(BookingResponse { booking: dto })))
}

/// PATCH /api/v1/bookings/{id}/status
///
/// Requires a verified account. Out-of-scope bookings answer 404 like `get_booking`.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Tenant(ctx): Tenant,
    Path(id): Path<String>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let booking_id = parse_id(&id, "id")?;
    require_verified_user(&ctx)?;

    let mut directory = state.directory.write().await;
    let booking = directory
        .booking_mut(booking_id)
        .ok_or_else(|| booking_not_found(booking_id))?;

    require_property_access(&ctx, booking.property_id)
        .map_err(|_| booking_not_found(booking_id))?;

    let status = BookingStatus::from_str(req.status.trim())?;
    if booking.status != status {
        log::info!(
            "User {} moved booking {} from {} to {}",
            ctx.user_id(),
            booking.id,
            booking.status,
            status
        );
        booking.status = status;
    }

    Ok(Json(BookingResponse {
        booking: BookingDto::from(&*booking),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn booking_not_found(booking_id: i64) -> ApiError {
    ApiError::NotFound {
        message: format!("Booking {} not found", booking_id),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ApiError::Validation {
        message: format!("Invalid {field}: expected YYYY-MM-DD, got '{raw}'"),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
