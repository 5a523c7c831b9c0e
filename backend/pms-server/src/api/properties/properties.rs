//! Property REST API handlers
//!
//! Read-only handlers, scoped to the caller's assigned properties.

use crate::{
    ApiError, ApiResult, AppState, PropertyDto, PropertyListResponse, PropertyResponse, Tenant,
    parse_id,
};

use pms_auth::{filter_properties_by_access, require_property_access};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/properties
///
/// List the properties the caller may see
pub async fn list_properties(
    State(state): State<AppState>,
    Tenant(ctx): Tenant,
) -> ApiResult<Json<PropertyListResponse>> {
    let directory = state.directory.read().await;
    let visible = filter_properties_by_access(&ctx, directory.properties());

    Ok(Json(PropertyListResponse {
        properties: visible.into_iter().map(PropertyDto::from).collect(),
    }))
}

/// GET /api/v1/properties/{id}
///
/// Access is checked before existence: an unassigned id is a 403 whether
/// or not the property exists.
pub async fn get_property(
    State(state): State<AppState>,
    Tenant(ctx): Tenant,
    Path(id): Path<String>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_id(&id, "id")?;
    require_property_access(&ctx, property_id)?;

    let directory = state.directory.read().await;
    let property = directory
        .find_property(property_id)
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Property {} not found", property_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(PropertyResponse {
        property: property.into(),
    }))
}
