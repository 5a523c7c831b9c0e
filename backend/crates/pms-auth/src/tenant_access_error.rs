use pms_core::{PropertyId, VerificationStatus};

use error_location::ErrorLocation;
use thiserror::Error;

/// Authorization failure raised by the guard functions.
///
/// Always maps to HTTP 403. Never retried: the same context and input
/// produce the same denial.
#[derive(Error, Debug)]
pub enum TenantAccessError {
    #[error("User {user_id} cannot access property {property_id} {location}")]
    PropertyDenied {
        user_id: String,
        property_id: PropertyId,
        location: ErrorLocation,
    },

    #[error("User {user_id} is not verified (status: {status}) {location}")]
    Unverified {
        user_id: String,
        status: VerificationStatus,
        location: ErrorLocation,
    },
}

impl TenantAccessError {
    pub const STATUS_CODE: u16 = 403;

    pub fn status_code(&self) -> u16 {
        Self::STATUS_CODE
    }

    pub fn user_id(&self) -> &str {
        match self {
            Self::PropertyDenied { user_id, .. } | Self::Unverified { user_id, .. } => user_id,
        }
    }

    /// The denied property, `None` for denials that are not property-scoped.
    pub fn property_id(&self) -> Option<PropertyId> {
        match self {
            Self::PropertyDenied { property_id, .. } => Some(*property_id),
            Self::Unverified { .. } => None,
        }
    }

    /// Client-facing message, without the source location.
    pub fn message(&self) -> String {
        match self {
            Self::PropertyDenied { property_id, .. } => {
                format!("Access to property {property_id} is not permitted")
            }
            Self::Unverified { .. } => "Account verification is required".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PropertyDenied { .. } => "PROPERTY_ACCESS_DENIED",
            Self::Unverified { .. } => "VERIFICATION_REQUIRED",
        }
    }
}

pub type Result<T> = std::result::Result<T, TenantAccessError>;
