use pms_core::{Property, PropertyId};

use serde::Serialize;

/// Property DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: PropertyId,
    pub name: String,
    pub city: String,
    pub rooms: u32,
}

impl From<&Property> for PropertyDto {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            city: p.city.clone(),
            rooms: p.rooms,
        }
    }
}
