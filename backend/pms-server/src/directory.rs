//! In-memory directory of users, properties and bookings.
//!
//! Loaded once at startup from a seed JSON file. Bookings created or
//! updated through the API live only as long as the process.

use crate::error::{Result as ServerErrorResult, ServerError};

use pms_core::{Booking, Property, PropertyId, UserRecord};

use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

/// On-disk shape of the seed file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<UserRecord>,
    pub properties: Vec<Property>,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Default)]
pub struct Directory {
    users: HashMap<String, UserRecord>,
    properties: Vec<Property>,
    bookings: Vec<Booking>,
}

impl Directory {
    pub fn new(seed: SeedData) -> Self {
        let mut users = HashMap::with_capacity(seed.users.len());
        for user in seed.users {
            if users.contains_key(&user.id) {
                warn!("Duplicate user id '{}' in seed data, keeping the last entry", user.id);
            }
            users.insert(user.id.clone(), user);
        }

        Self {
            users,
            properties: seed.properties,
            bookings: seed.bookings,
        }
    }

    /// Load the seed file, or start empty when it does not exist.
    pub fn load_or_empty(path: &Path) -> ServerErrorResult<Self> {
        if !path.exists() {
            warn!(
                "Seed file {} not found, starting with an empty directory",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ServerError::SeedFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let seed: SeedData =
            serde_json::from_str(&contents).map_err(|e| ServerError::SeedParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let directory = Self::new(seed);
        info!(
            "Seed loaded from {}: {} users, {} properties, {} bookings",
            path.display(),
            directory.user_count(),
            directory.properties.len(),
            directory.bookings.len()
        );

        Ok(directory)
    }

    pub fn find_user(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.get(user_id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn find_property(&self, property_id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == property_id)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find_booking(&self, booking_id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    pub fn booking_mut(&mut self, booking_id: i64) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == booking_id)
    }

    /// One past the highest booking id, `None` on overflow.
    pub fn next_booking_id(&self) -> Option<i64> {
        match self.bookings.iter().map(|b| b.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn insert_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }
}
