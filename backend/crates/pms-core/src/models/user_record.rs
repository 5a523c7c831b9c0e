use crate::RawPropertyId;

use serde::{Deserialize, Serialize};

/// Persisted user as handed over by the authentication layer.
///
/// Fields stay raw on purpose: role, verification and property assignments are
/// interpreted when a `TenantContext` is built, never at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub role: String,
    #[serde(default)]
    pub assigned_property_ids: Option<Vec<RawPropertyId>>,
    #[serde(default)]
    pub verification_status: String,
}

impl UserRecord {
    pub fn new(id: &str, role: &str, verification_status: &str) -> Self {
        Self {
            id: id.to_string(),
            role: role.to_string(),
            assigned_property_ids: None,
            verification_status: verification_status.to_string(),
        }
    }

    pub fn with_assigned<I, R>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RawPropertyId>,
    {
        self.assigned_property_ids = Some(raw.into_iter().map(Into::into).collect());
        self
    }
}
