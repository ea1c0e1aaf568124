//! Configuration loading for the server binary

use sf_shared::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load `.env` (if present) and build the application configuration
///
/// Values already present in the process environment win over `.env`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(ConfigError::Invalid(format!(".env: {}", e))),
    }

    let config = AppConfig::from_env();
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}
