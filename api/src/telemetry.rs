//! Tracing subscriber setup

use sf_shared::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// The filter comes from `LoggingConfig::level`, which accepts a plain level
/// or a full `EnvFilter` directive. An unparsable directive falls back to `info`.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
    };

    // Err means a subscriber is already installed, as happens under tests
    if result.is_ok() {
        tracing::info!(level = %config.level, format = ?config.format, "Tracing initialised");
    }
}
