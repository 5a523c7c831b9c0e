use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Property the booking belongs to (required)
    pub property_id: i64,

    /// Guest display name (required, non-blank)
    pub guest_name: String,

    /// Arrival date, YYYY-MM-DD
    pub check_in: String,

    /// Departure date, YYYY-MM-DD, after `check_in`
    pub check_out: String,
}
