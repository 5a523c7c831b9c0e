use crate::{TenantAccessError, TenantAccessResult, TenantContext};

use pms_core::PropertyId;

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;

/// Deny unless the context can access `property_id`.
///
/// For single-entity operations where the caller wants a hard 403 rather than
/// silent omission from a list.
#[track_caller]
pub fn require_property_access(
    ctx: &TenantContext,
    property_id: PropertyId,
) -> TenantAccessResult<()> {
    if ctx.can_access_property(property_id) {
        return Ok(());
    }

    warn!(
        "Property access denied: user={} role={} property={}",
        ctx.user_id(),
        ctx.role(),
        property_id
    );
    Err(TenantAccessError::PropertyDenied {
        user_id: ctx.user_id().to_string(),
        property_id,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Deny unverified accounts. Unlimited-scope roles skip the check entirely.
///
/// Independent of property access: passing here grants no property.
#[track_caller]
pub fn require_verified_user(ctx: &TenantContext) -> TenantAccessResult<()> {
    if ctx.has_unlimited_access() || ctx.verification_status().is_verified() {
        return Ok(());
    }

    warn!(
        "Unverified user blocked: user={} status={}",
        ctx.user_id(),
        ctx.verification_status()
    );
    Err(TenantAccessError::Unverified {
        user_id: ctx.user_id().to_string(),
        status: ctx.verification_status().clone(),
        location: ErrorLocation::from(Location::caller()),
    })
}
