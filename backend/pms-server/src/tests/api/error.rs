use crate::ApiError;

use pms_auth::{AuthError, TenantAccessError};
use pms_core::{BookingStatus, CoreError, VerificationStatus};

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Booking 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Booking 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid checkIn".into(),
        field: Some("checkIn".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "checkIn");
}

#[tokio::test]
async fn given_property_denial_when_rendered_then_403_with_user_and_property() {
    let denial = TenantAccessError::PropertyDenied {
        user_id: "manager-1".into(),
        property_id: 3,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(denial)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "Access to property 3 is not permitted");
    assert_eq!(json["error"]["userId"], "manager-1");
    assert_eq!(json["error"]["propertyId"], 3);
}

#[tokio::test]
async fn given_verification_denial_when_rendered_then_403_without_property() {
    let denial = TenantAccessError::Unverified {
        user_id: "staff-1".into(),
        status: VerificationStatus::Pending,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(denial)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["userId"], "staff-1");
    assert!(json["error"].get("propertyId").is_none());
}

#[tokio::test]
async fn given_auth_error_when_rendered_then_401_without_internal_detail() {
    let error = ApiError::from(AuthError::UnknownUser {
        user_id: "ghost".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Unknown user");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500() {
    let error = ApiError::Internal {
        message: "Booking id space exhausted".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn given_unknown_booking_status_when_converted_then_validation_on_status_field() {
    let core_err = BookingStatus::from_str("teleported").unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("teleported"));
            assert_eq!(field.as_deref(), Some("status"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn given_core_validation_when_converted_then_bad_request_status() {
    let core_err = CoreError::Validation {
        message: "guest_name cannot be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err = ApiError::from(core_err);

    assert_eq!(api_err.status_code(), StatusCode::BAD_REQUEST);
}
