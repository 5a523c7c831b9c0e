pub mod booking_dto;
pub mod booking_list_response;
pub mod booking_response;
pub mod bookings;
pub mod create_booking_request;
pub mod list_bookings_query;
pub mod update_booking_status_request;
