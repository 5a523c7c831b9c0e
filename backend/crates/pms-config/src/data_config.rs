use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SEED_FILENAME, config::is_contained_relative_path,
};

use serde::Deserialize;

/// Location of the seed file holding users, properties and bookings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Relative to the config dir
    pub seed_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_path: String::from(DEFAULT_SEED_FILENAME),
        }
    }
}

impl DataConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_contained_relative_path(&self.seed_path) {
            return Err(ConfigError::data(
                "data.seed_path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
