use crate::PropertyDto;
use serde::Serialize;

/// Properties visible to the caller
#[derive(Debug, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyDto>,
}
