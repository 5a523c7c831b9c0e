use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    /// One of: confirmed, checked_in, checked_out, cancelled
    pub status: String,
}
