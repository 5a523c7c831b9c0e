mod api;

use crate::{AppState, Directory, SeedData};

use pms_core::{Booking, Property, UserRecord};

use chrono::NaiveDate;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two properties, one booking each, and a manager scoped to property 1
pub(crate) fn small_seed() -> SeedData {
    SeedData {
        users: vec![
            UserRecord::new("admin", "super-admin", "verified"),
            UserRecord::new("manager", "manager", "verified").with_assigned([1_i64]),
        ],
        properties: vec![
            Property::new(1, "Harbour View", "Lisbon", 40),
            Property::new(2, "Old Mill", "Porto", 12),
        ],
        bookings: vec![
            Booking::new(10, 1, "Alice", date(2026, 5, 1), date(2026, 5, 3)).unwrap(),
            Booking::new(11, 2, "Bob", date(2026, 5, 2), date(2026, 5, 4)).unwrap(),
        ],
    }
}

pub(crate) fn test_state() -> AppState {
    AppState::new(Directory::new(small_seed()), None, "X-User-Id")
}
