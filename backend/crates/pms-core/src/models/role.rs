use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Staff role attached to a user account.
///
/// The canonical wire tag for the privileged role is `super-admin`. Stored
/// records also carry `super_admin`; lenient parsing folds exactly those two
/// spellings into [`Role::SuperAdmin`]. Tags are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Platform operator, sees every property
    SuperAdmin,
    /// Owner-level administrator of the assigned properties
    Admin,
    Manager,
    Staff,
    Receptionist,
    /// A tag this build does not know about. Carries no capabilities.
    Unrecognized(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
            Self::Receptionist => "receptionist",
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Whether this role bypasses property scoping and verification gating.
    pub fn has_unlimited_scope(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Parse a stored role tag without failing.
    ///
    /// Only surrounding whitespace is ignored. Unknown tags become
    /// [`Role::Unrecognized`].
    pub fn parse_lenient(s: &str) -> Self {
        let tag = s.trim();
        if tag == "super_admin" {
            return Self::SuperAdmin;
        }
        Self::from_canonical(tag).unwrap_or_else(|| Self::Unrecognized(tag.to_string()))
    }

    fn from_canonical(tag: &str) -> Option<Self> {
        match tag {
            "super-admin" => Some(Self::SuperAdmin),
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "staff" => Some(Self::Staff),
            "receptionist" => Some(Self::Receptionist),
            _ => None,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::from_canonical(s).ok_or_else(|| CoreError::InvalidRole {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}
