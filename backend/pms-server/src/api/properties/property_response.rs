use crate::PropertyDto;
use serde::Serialize;

/// Single property response
#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub property: PropertyDto,
}
