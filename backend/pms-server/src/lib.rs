pub mod api;
pub mod app_state;
pub mod directory;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    bookings::{
        booking_dto::BookingDto,
        booking_list_response::BookingListResponse,
        booking_response::BookingResponse,
        bookings::{create_booking, get_booking, list_bookings, update_booking_status},
        create_booking_request::CreateBookingRequest,
        list_bookings_query::ListBookingsQuery,
        update_booking_status_request::UpdateBookingStatusRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::tenant::Tenant,
    properties::{
        properties::{get_property, list_properties},
        property_dto::PropertyDto,
        property_list_response::PropertyListResponse,
        property_response::PropertyResponse,
    },
    resolve::parse_id,
};
pub use app_state::AppState;
pub use directory::{Directory, SeedData};
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
