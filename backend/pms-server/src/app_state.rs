use crate::Directory;

use pms_auth::JwtValidator;

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<Directory>>,
    /// `None` when authentication is disabled (development mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Header carrying the caller's user id in development mode
    pub dev_user_header: String,
}

impl AppState {
    pub fn new(
        directory: Directory,
        jwt_validator: Option<JwtValidator>,
        dev_user_header: impl Into<String>,
    ) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            jwt_validator: jwt_validator.map(Arc::new),
            dev_user_header: dev_user_header.into(),
        }
    }
}
