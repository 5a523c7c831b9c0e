//! Axum extractor resolving the caller into a tenant context

use crate::{ApiError, AppState};

use pms_auth::{AuthError, TenantContext};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Authenticated caller with its property scope.
///
/// With a JWT validator configured the user id is the token's `sub`
/// claim. Otherwise it is read from the development header. Either way
/// the user must exist in the directory.
pub struct Tenant(pub TenantContext);

impl FromRequestParts<AppState> for Tenant {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { resolve(parts, state).await }
    }
}

async fn resolve(parts: &Parts, state: &AppState) -> Result<Tenant, ApiError> {
    let user_id = match state.jwt_validator {
        Some(ref validator) => {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok());
            validator.validate_header(header)?.sub
        }
        None => dev_user_id(parts, &state.dev_user_header)?,
    };

    let directory = state.directory.read().await;
    let user = directory
        .find_user(&user_id)
        .ok_or_else(|| AuthError::UnknownUser {
            user_id: user_id.clone(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let ctx = TenantContext::from_user(user);
    log::debug!(
        "Resolved tenant {} (role: {}, properties: {}, unlimited: {})",
        ctx.user_id(),
        ctx.role(),
        ctx.assigned_property_ids().len(),
        ctx.has_unlimited_access()
    );

    Ok(Tenant(ctx))
}

fn dev_user_id(parts: &Parts, header_name: &str) -> Result<String, AuthError> {
    parts
        .headers
        .get(header_name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })
}
