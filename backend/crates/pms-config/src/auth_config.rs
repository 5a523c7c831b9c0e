use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_HEADER,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require HS256 bearer tokens. When disabled the caller is identified by
    /// `dev_user_header` (development only).
    pub enabled: bool,
    pub jwt_secret: Option<String>,
    pub dev_user_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            dev_user_header: String::from(DEFAULT_DEV_USER_HEADER),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled {
            match self.jwt_secret {
                None => {
                    return Err(ConfigError::auth("auth.enabled requires auth.jwt_secret"));
                }
                Some(ref secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
                    )));
                }
                Some(_) => {}
            }
        }

        if self.dev_user_header.trim().is_empty() {
            return Err(ConfigError::auth("auth.dev_user_header cannot be empty"));
        }

        Ok(())
    }
}
