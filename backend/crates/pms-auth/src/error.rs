use error_location::ErrorLocation;
use thiserror::Error;

/// Failures while establishing who the caller is. Maps to HTTP 401.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown user '{user_id}' {location}")]
    UnknownUser {
        user_id: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::UnknownUser { .. } => "UNKNOWN_USER",
        }
    }

    /// Client-facing message, without the source location.
    pub fn message(&self) -> String {
        match self {
            Self::TokenExpired { .. } => "Token expired".to_string(),
            Self::MissingHeader { .. } => "Missing credentials".to_string(),
            Self::InvalidScheme { .. } => "Expected 'Bearer' authorization scheme".to_string(),
            Self::JwtDecode { .. } => "Invalid token".to_string(),
            Self::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{claim}': {message}")
            }
            Self::UnknownUser { .. } => "Unknown user".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
