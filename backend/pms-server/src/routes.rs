use crate::{
    AppState, create_booking, get_booking, get_property, health, list_bookings, list_properties,
    update_booking_status,
};

use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Properties
        .route("/api/v1/properties", get(list_properties))
        .route("/api/v1/properties/{id}", get(get_property))
        // Bookings
        .route("/api/v1/bookings", get(list_bookings).post(create_booking))
        .route("/api/v1/bookings/{id}", get(get_booking))
        .route("/api/v1/bookings/{id}/status", patch(update_booking_status))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
