//! Property entity - the unit of access-control granularity.

use crate::PropertyId;

use serde::{Deserialize, Serialize};

/// A managed premises (hotel, resort, guest house).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub city: String,
    /// Number of sellable rooms
    pub rooms: u32,
}

impl Property {
    pub fn new(id: PropertyId, name: &str, city: &str, rooms: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            city: city.to_string(),
            rooms,
        }
    }
}
