use error_location::ErrorLocation;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid verification status: {value} {location}")]
    InvalidVerificationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid booking status: {value} {location}")]
    InvalidBookingStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
