use crate::TenantContext;

use pms_core::PropertyId;

/// Single source of truth for property-level authorization.
///
/// Unlimited access allows everything. An empty assignment set denies
/// everything. Otherwise the id must be assigned.
pub fn can_access_property(ctx: &TenantContext, property_id: PropertyId) -> bool {
    if ctx.has_unlimited_access() {
        return true;
    }

    let assigned = ctx.assigned_property_ids();
    if assigned.is_empty() {
        return false;
    }

    assigned.contains(property_id)
}
