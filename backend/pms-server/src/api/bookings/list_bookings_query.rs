use serde::Deserialize;

/// Query parameters for listing bookings
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    /// Narrow to a single property. Accepts `property_id` or `propertyId`.
    #[serde(alias = "property_id")]
    pub property_id: Option<String>,
    /// When true, include cancelled bookings (default: false)
    #[serde(default)]
    pub include_cancelled: bool,
}
