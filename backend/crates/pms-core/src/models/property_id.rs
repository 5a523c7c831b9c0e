use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a managed property (hotel, resort)
pub type PropertyId = i64;

/// One entry of a stored `assignedPropertyIds` list, exactly as persisted.
///
/// Legacy records mix numbers, numeric strings, nulls and garbage. Deserializing
/// never fails; [`RawPropertyId::to_property_id`] decides what survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPropertyId {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawPropertyId {
    /// Coerce to a property id, or `None` when the entry is unusable.
    ///
    /// Strings are trimmed and parsed as base-10 integers. Floats only survive
    /// when finite, integral and inside the `i64` range.
    pub fn to_property_id(&self) -> Option<PropertyId> {
        match self {
            Self::Integer(id) => Some(*id),
            Self::Float(f) => {
                if f.is_finite()
                    && f.fract() == 0.0
                    && *f >= i64::MIN as f64
                    && *f < i64::MAX as f64
                {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Self::Text(s) => s.trim().parse::<i64>().ok(),
            Self::Other(_) => None,
        }
    }
}

impl From<i64> for RawPropertyId {
    fn from(id: i64) -> Self {
        Self::Integer(id)
    }
}

impl From<&str> for RawPropertyId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Deduplicated set of property ids granted to a user.
///
/// Can only be built from valid ids, so holding one means parsing already
/// happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssignedPropertyIds(BTreeSet<PropertyId>);

impl AssignedPropertyIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every usable entry, silently drop the rest.
    pub fn from_raw<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = &'a RawPropertyId>,
    {
        raw.into_iter()
            .filter_map(RawPropertyId::to_property_id)
            .collect()
    }

    pub fn contains(&self, property_id: PropertyId) -> bool {
        self.0.contains(&property_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<PropertyId> for AssignedPropertyIds {
    fn from_iter<T: IntoIterator<Item = PropertyId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[PropertyId; N]> for AssignedPropertyIds {
    fn from(ids: [PropertyId; N]) -> Self {
        ids.into_iter().collect()
    }
}
