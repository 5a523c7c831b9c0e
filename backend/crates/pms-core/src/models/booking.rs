//! Booking entity - a guest stay at one property.

use crate::{BookingStatus, CoreError, PropertyId, Result as CoreErrorResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A reservation owned by exactly one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub property_id: PropertyId,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// Create a confirmed booking, rejecting empty guest names and
    /// stays that do not end after they start.
    #[track_caller]
    pub fn new(
        id: i64,
        property_id: PropertyId,
        guest_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> CoreErrorResult<Self> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() {
            return Err(CoreError::Validation {
                message: "guest_name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if check_out <= check_in {
            return Err(CoreError::Validation {
                message: format!("check_out ({check_out}) must be after check_in ({check_in})"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id,
            property_id,
            guest_name: guest_name.to_string(),
            check_in,
            check_out,
            status: BookingStatus::Confirmed,
        })
    }

    /// Length of stay in nights
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}
