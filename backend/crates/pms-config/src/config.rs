use crate::{AuthConfig, ConfigError, ConfigErrorResult, DataConfig, LoggingConfig, ServerConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "PMS_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pms";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PMS_CONFIG_DIR env var, else use ./.pms/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PMS_CONFIG_DIR env var > ./.pms/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.data.validate()?;

        Ok(())
    }

    /// Absolute path of the seed data file.
    pub fn seed_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.data.seed_path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  auth: {}",
            if self.auth.enabled {
                "enabled (HS256)".to_string()
            } else {
                format!("disabled (identity from {} header)", self.auth.dev_user_header)
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  data: seed={}", self.data.seed_path);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PMS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PMS_SERVER_PORT", &mut self.server.port);

        // Auth
        Self::apply_env_bool("PMS_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("PMS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("PMS_AUTH_DEV_USER_HEADER", &mut self.auth.dev_user_header);

        // Logging
        Self::apply_env_parse("PMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PMS_LOG_FILE", &mut self.logging.file);

        // Data
        Self::apply_env_string("PMS_DATA_SEED_PATH", &mut self.data.seed_path);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

/// True for non-empty relative paths that cannot climb out of the config dir.
pub(crate) fn is_contained_relative_path(path: &str) -> bool {
    !path.trim().is_empty() && !Path::new(path).is_absolute() && !path.contains("..")
}
