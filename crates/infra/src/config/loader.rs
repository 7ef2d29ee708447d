//! Configuration loader
//!
//! Loads engine configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the zone variable is absent, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, the built-in defaults apply
//!
//! ## Environment Variables
//! - `CAMPUSCAL_REFERENCE_TIMEZONE`: IANA zone for day keys (required for
//!   env loading)
//! - `CAMPUSCAL_RANGE_COLLAPSE_DAYS`: span above which ranges collapse
//! - `CAMPUSCAL_RANGE_HARD_CAP_DAYS`: hard cap on materialized range days
//! - `CAMPUSCAL_LOG_LEVEL`: default tracing filter
//! - `CAMPUSCAL_LOG_FORMAT`: `pretty` or `json`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./campuscal.json` or `./campuscal.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use campuscal_domain::{CampusCalError, EngineConfig, LogFormat, Result};

const ENV_REFERENCE_TIMEZONE: &str = "CAMPUSCAL_REFERENCE_TIMEZONE";
const ENV_RANGE_COLLAPSE_DAYS: &str = "CAMPUSCAL_RANGE_COLLAPSE_DAYS";
const ENV_RANGE_HARD_CAP_DAYS: &str = "CAMPUSCAL_RANGE_HARD_CAP_DAYS";
const ENV_LOG_LEVEL: &str = "CAMPUSCAL_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "CAMPUSCAL_LOG_FORMAT";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["campuscal.json", "campuscal.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// Environment first, then the first probed config file, then defaults.
/// The result is always validated.
///
/// # Errors
/// Returns `CampusCalError::Config` if:
/// - An environment variable has an invalid value
/// - A config file exists but cannot be read or parsed
/// - The resulting thresholds are inconsistent
pub fn load() -> Result<EngineConfig> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) if std::env::var_os(ENV_REFERENCE_TIMEZONE).is_some() => return Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "No environment configuration, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    tracing::info!("No config file found, using defaults");
                    EngineConfig::default()
                }
            }
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `CAMPUSCAL_REFERENCE_TIMEZONE` must be set; every other variable is
/// optional and falls back to its default.
///
/// # Errors
/// Returns `CampusCalError::Config` if the zone variable is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<EngineConfig> {
    let defaults = EngineConfig::default();

    let reference_timezone = env_var(ENV_REFERENCE_TIMEZONE)?;
    let range_collapse_threshold_days =
        env_parse(ENV_RANGE_COLLAPSE_DAYS, defaults.range_collapse_threshold_days)?;
    let range_hard_cap_days = env_parse(ENV_RANGE_HARD_CAP_DAYS, defaults.range_hard_cap_days)?;
    let log_level = std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level);
    let log_format = match std::env::var(ENV_LOG_FORMAT) {
        Ok(raw) => raw.trim().parse::<LogFormat>().map_err(CampusCalError::Config)?,
        Err(_) => defaults.log_format,
    };

    Ok(EngineConfig {
        reference_timezone,
        range_collapse_threshold_days,
        range_hard_cap_days,
        log_level,
        log_format,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing fields take their defaults.
///
/// # Errors
/// Returns `CampusCalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<EngineConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CampusCalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CampusCalError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CampusCalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content; format by extension.
fn parse_config(contents: &str, path: &Path) -> Result<EngineConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CampusCalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CampusCalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CampusCalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }
    let exe_dir =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(exe_dir) = exe_dir {
        dirs.push(exe_dir);
    }

    probe_in(&dirs)
}

/// First existing config file across `dirs`, in directory then name order.
pub fn probe_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CampusCalError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional numeric environment variable, `default` when unset.
fn env_parse(key: &str, default: i64) -> Result<i64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|e| CampusCalError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}
