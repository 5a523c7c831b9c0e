
use crate::TenantContext;

use pms_core::{RawPropertyId, UserRecord};

/// Build a context the way request handlers do: from a stored user record.
pub(crate) fn context_for<I, R>(role: &str, assigned: I, verification: &str) -> TenantContext
where
    I: IntoIterator<Item = R>,
    R: Into<RawPropertyId>,
{
    let user = UserRecord::new("user-1", role, verification).with_assigned(assigned);
    TenantContext::from_user(&user)
}

/// Context without any property assignment
pub(crate) fn unassigned_context(role: &str, verification: &str) -> TenantContext {
    TenantContext::from_user(&UserRecord::new("user-1", role, verification))
}
