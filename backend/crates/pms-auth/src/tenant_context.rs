use pms_core::{AssignedPropertyIds, PropertyId, Role, UserRecord, VerificationStatus};

use log::debug;

/// Authorization view of the current user, rebuilt for every request.
///
/// Derived from the persisted [`UserRecord`] and never mutated afterwards.
/// `has_unlimited_access` always equals `role.has_unlimited_scope()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    user_id: String,
    role: Role,
    assigned_property_ids: AssignedPropertyIds,
    has_unlimited_access: bool,
    verification_status: VerificationStatus,
}

impl TenantContext {
    pub fn new(
        user_id: impl Into<String>,
        role: Role,
        assigned_property_ids: AssignedPropertyIds,
        verification_status: VerificationStatus,
    ) -> Self {
        let has_unlimited_access = role.has_unlimited_scope();
        Self {
            user_id: user_id.into(),
            role,
            assigned_property_ids,
            has_unlimited_access,
            verification_status,
        }
    }

    /// Build the context from a stored user record.
    ///
    /// Never fails. Unusable property id entries are dropped, unknown role and
    /// verification tags end up in their `Unrecognized` variants.
    pub fn from_user(user: &UserRecord) -> Self {
        let raw = user.assigned_property_ids.as_deref().unwrap_or_default();
        let dropped = raw.iter().filter(|r| r.to_property_id().is_none()).count();
        if dropped > 0 {
            debug!(
                "Dropped {dropped} unusable assigned property id(s) for user {}",
                user.id
            );
        }

        Self::new(
            user.id.clone(),
            Role::parse_lenient(&user.role),
            AssignedPropertyIds::from_raw(raw),
            VerificationStatus::parse_lenient(&user.verification_status),
        )
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn assigned_property_ids(&self) -> &AssignedPropertyIds {
        &self.assigned_property_ids
    }

    pub fn has_unlimited_access(&self) -> bool {
        self.has_unlimited_access
    }

    pub fn verification_status(&self) -> &VerificationStatus {
        &self.verification_status
    }

    /// See [`crate::can_access_property`].
    pub fn can_access_property(&self, property_id: PropertyId) -> bool {
        crate::can_access_property(self, property_id)
    }
}

/// Free-function form of [`TenantContext::from_user`].
pub fn build_tenant_context(user: &UserRecord) -> TenantContext {
    TenantContext::from_user(user)
}
