use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account verification state, independent of property assignments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VerificationStatus {
    /// Signed up, documents not reviewed yet
    #[default]
    Pending,
    Verified,
    Rejected,
    Suspended,
    Unrecognized(String),
}

impl VerificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Suspended => "suspended",
            Self::Unrecognized(value) => value,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Parse a stored status without failing. Only surrounding whitespace is
    /// ignored; unknown values, including other casings, never count as verified.
    pub fn parse_lenient(s: &str) -> Self {
        let value = s.trim();
        Self::from_canonical(value).unwrap_or_else(|| Self::Unrecognized(value.to_string()))
    }

    fn from_canonical(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            "rejected" => Some(Self::Rejected),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }
}

impl FromStr for VerificationStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::from_canonical(s).ok_or_else(|| CoreError::InvalidVerificationStatus {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for VerificationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}
