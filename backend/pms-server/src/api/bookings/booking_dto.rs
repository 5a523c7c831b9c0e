use pms_core::{Booking, PropertyId};

use serde::Serialize;

/// Booking DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i64,
    pub property_id: PropertyId,
    pub guest_name: String,
    /// ISO-8601 date (YYYY-MM-DD)
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub nights: i64,
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id,
            property_id: b.property_id,
            guest_name: b.guest_name.clone(),
            check_in: b.check_in.to_string(),
            check_out: b.check_out.to_string(),
            status: b.status.to_string(),
            nights: b.nights(),
        }
    }
}
