use pms_auth::JwtValidator;
use pms_server::{AppState, Directory, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = pms_config::Config::load()?;
    config.validate()?;

    // Ensure log directory exists when logging to a file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pms-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Load seed directory
    let directory = Directory::load_or_empty(&config.seed_path()?)?;

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator = match config.auth.jwt_secret {
        Some(ref secret) if config.auth.enabled => {
            let validator = JwtValidator::with_hs256(secret.as_bytes());
            info!("JWT: {} authentication enabled", validator.algorithm());
            Some(validator)
        }
        _ => {
            warn!(
                "Authentication DISABLED - caller identity is taken from the {} header",
                config.auth.dev_user_header
            );
            None
        }
    };

    let app_state = AppState::new(directory, jwt_validator, config.auth.dev_user_header.clone());
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
