#![allow(dead_code)]

//! Test infrastructure for pms-server API tests


use pms_auth::JwtValidator;
use pms_server::{AppState, Directory, SeedData, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";
pub const DEV_HEADER: &str = "X-User-Id";

/// Seed shared by the integration tests.
///
/// - `admin-1`: super-admin, pending, no assignments
/// - `manager-1`: manager, verified, properties 1 and 2 (mixed id encodings)
/// - `staff-1`: staff, pending, property 1
/// - `idle-1`: staff, verified, nothing assigned
/// - `messy-1`: manager, verified, only property 3 survives normalization
/// - `shouty-1`: privileged and verified only in the wrong spelling, property 2
pub fn seed_json() -> Value {
    json!({
        "users": [
            { "id": "admin-1", "role": "super_admin", "verificationStatus": "pending" },
            { "id": "manager-1", "role": "manager", "assignedPropertyIds": ["1", 2],
              "verificationStatus": "verified" },
            { "id": "staff-1", "role": "staff", "assignedPropertyIds": [1],
              "verificationStatus": "pending" },
            { "id": "idle-1", "role": "staff", "assignedPropertyIds": [],
              "verificationStatus": "verified" },
            { "id": "messy-1", "role": " manager ",
              "assignedPropertyIds": ["abc", null, 2.5, "3", {}],
              "verificationStatus": "verified" },
            { "id": "shouty-1", "role": "SUPER ADMIN", "assignedPropertyIds": [2],
              "verificationStatus": "VERIFIED" }
        ],
        "properties": [
            { "id": 1, "name": "Harbour View", "city": "Lisbon", "rooms": 40 },
            { "id": 2, "name": "Old Mill", "city": "Porto", "rooms": 12 },
            { "id": 3, "name": "Dune Lodge", "city": "Faro", "rooms": 8 }
        ],
        "bookings": [
            { "id": 1, "propertyId": 1, "guestName": "Alice", "checkIn": "2026-05-01",
              "checkOut": "2026-05-04" },
            { "id": 2, "propertyId": 2, "guestName": "Bob", "checkIn": "2026-05-02",
              "checkOut": "2026-05-03", "status": "checked_in" },
            { "id": 3, "propertyId": 3, "guestName": "Carol", "checkIn": "2026-06-10",
              "checkOut": "2026-06-12" },
            { "id": 4, "propertyId": 1, "guestName": "Dan", "checkIn": "2026-07-01",
              "checkOut": "2026-07-02", "status": "cancelled" }
        ]
    })
}

pub fn create_test_directory() -> Directory {
    let seed: SeedData = serde_json::from_value(seed_json()).expect("Invalid test seed");
    Directory::new(seed)
}

/// State in development mode (identity from the `X-User-Id` header)
pub fn create_test_app_state() -> AppState {
    AppState::new(create_test_directory(), None, DEV_HEADER)
}

/// State with HS256 bearer-token authentication
pub fn create_jwt_app_state() -> AppState {
    AppState::new(
        create_test_directory(),
        Some(JwtValidator::with_hs256(TEST_JWT_SECRET)),
        DEV_HEADER,
    )
}

pub fn create_test_app() -> Router {
    build_router(create_test_app_state())
}

/// GET `uri` as `user_id` (development header)
pub fn get_as(uri: &str, user_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(DEV_HEADER, user_id)
        .body(Body::empty())
        .unwrap()
}

/// Send a JSON body as `user_id` (development header)
pub fn json_as(method: &str, uri: &str, user_id: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(DEV_HEADER, user_id)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Run a request through the router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Ids of the bookings (or properties) in a list response
pub fn ids(json: &Value, key: &str) -> Vec<i64> {
    json[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}
