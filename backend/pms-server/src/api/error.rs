//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use pms_auth::{AuthError, TenantAccessError};
use pms_core::{CoreError, PropertyId};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional context
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "FORBIDDEN")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Caller of a denied request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Property a denied request targeted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<PropertyId>,
}

impl ApiErrorBody {
    fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            field: None,
            user_id: None,
            property_id: None,
        }
    }
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Caller could not be identified (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Caller identified but not permitted (403)
    #[error("Forbidden: {message} (user: {user_id}) {location}")]
    Forbidden {
        message: String,
        user_id: String,
        property_id: Option<PropertyId>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody::new("NOT_FOUND", message),
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                field,
                ..ApiErrorBody::new("VALIDATION_ERROR", message)
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody::new("UNAUTHORIZED", message),
            ApiError::Forbidden {
                message,
                user_id,
                property_id,
                ..
            } => ApiErrorBody {
                user_id: Some(user_id),
                property_id,
                ..ApiErrorBody::new("FORBIDDEN", message)
            },
            ApiError::Internal { message, .. } => ApiErrorBody::new("INTERNAL_ERROR", message),
            ApiError::BadRequest { message, .. } => ApiErrorBody::new("BAD_REQUEST", message),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert guard denials to 403 responses
impl From<TenantAccessError> for ApiError {
    #[track_caller]
    fn from(e: TenantAccessError) -> Self {
        ApiError::Forbidden {
            message: e.message(),
            user_id: e.user_id().to_string(),
            property_id: e.property_id(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert authentication failures to 401 responses
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Authentication failed: {}", e);
        ApiError::Unauthorized {
            message: e.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain validation errors to 400 responses
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location,
            },
            CoreError::InvalidBookingStatus { value, .. } => ApiError::Validation {
                message: format!("Unknown booking status '{value}'"),
                field: Some("status".to_string()),
                location,
            },
            CoreError::InvalidRole { value, .. }
            | CoreError::InvalidVerificationStatus { value, .. } => ApiError::BadRequest {
                message: format!("Invalid value '{value}'"),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
