use crate::BookingDto;
use serde::Serialize;

/// Bookings visible to the caller
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingDto>,
}
