//! Path parameter parsing shared by the handlers

use crate::ApiError;

use std::panic::Location;

use error_location::ErrorLocation;

/// Parse a numeric id from a path segment.
#[track_caller]
pub fn parse_id(raw: &str, field: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::Validation {
        message: format!("Invalid {field}: '{raw}' is not an integer"),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
