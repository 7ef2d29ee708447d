//! Tracing subscriber setup
//!
//! The engine crates only emit `tracing` events. Hosts call
//! [`init_tracing`] once at startup to route them to stderr.

use campuscal_domain::{CampusCalError, EngineConfig, LogFormat, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `default_level`.
///
/// # Errors
/// Returns `CampusCalError::Config` when `default_level` is not a valid
/// filter directive.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            CampusCalError::Config(format!("Invalid log level '{default_level}': {e}"))
        }),
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
/// Returns `CampusCalError::Config` for an invalid log level and
/// `CampusCalError::Internal` if a global subscriber is already installed.
pub fn init_tracing(config: &EngineConfig) -> Result<()> {
    let filter = env_filter(&config.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Json => {
            registry.with(tracing_subscriber::fmt::layer().json().with_target(true)).try_init()
        }
        LogFormat::Pretty => {
            registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init()
        }
    };
    installed.map_err(|e| CampusCalError::Internal(format!("Tracing already initialised: {e}")))?;

    tracing::debug!(level = %config.log_level, format = %config.log_format, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_level() {
        // Only meaningful when RUST_LOG does not already supply a filter
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(env_filter("campuscal=loud"), Err(CampusCalError::Config(_))));
        }
        assert!(env_filter("debug").is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        let config = EngineConfig::default();
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(CampusCalError::Internal(_))));
    }
}
