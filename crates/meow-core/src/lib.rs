pub mod app;
pub mod config;
pub mod error;
pub mod profile;

pub use app::{AppRouter, AppState};
pub use config::{
    AudioConfig, CatConfig, Config, EndpointConfig, LocationConfig, ValidationResult,
};
pub use error::{AppError, AudioFailure, ConfigError, NetworkError, StorageError, WeatherFailure};
pub use profile::{ProfileError, ProfileStore, UserProfile, Zodiac, PROFILE_KEY};

use anyhow::Result;

/// Default log filter when `RUST_LOG` is unset. Kept quiet so log lines
/// don't interleave with the dashboard output.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the core application
pub fn init() -> Result<()> {
    init_with_filter(DEFAULT_LOG_FILTER)
}

/// Initialize tracing with an explicit fallback filter (used by `--verbose`).
pub fn init_with_filter(fallback: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::info!("Meowing Morning core initialized");
    Ok(())
}
