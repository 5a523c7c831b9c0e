pub mod access;
pub mod claims;
pub mod error;
pub mod filters;
pub mod guards;
pub mod jwt_validator;
pub mod tenant_access_error;
pub mod tenant_context;

pub use access::can_access_property;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use filters::{
    PropertyKeyed, PropertyScoped, filter_by_property_access, filter_properties_by_access,
    retain_by_property_access, retain_properties_by_access,
};
pub use guards::{require_property_access, require_verified_user};
pub use jwt_validator::JwtValidator;
pub use tenant_access_error::{Result as TenantAccessResult, TenantAccessError};
pub use tenant_context::{TenantContext, build_tenant_context};

#[cfg(test)]
mod tests;
