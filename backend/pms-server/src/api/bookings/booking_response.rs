use crate::BookingDto;
use serde::Serialize;

/// Single booking response
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking: BookingDto,
}
