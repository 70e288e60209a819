//! Configuration loader
//!
//! Loads scheduling configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required ones are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, uses the built-in defaults
//!
//! Whatever the source, the office hours are validated by building an
//! [`OfficeHoursPolicy`] before the config is returned.
//!
//! ## Environment Variables
//! - `TALENTDESK_OFFICE_OPENS_AT`: Opening time, e.g. `08:00` (required)
//! - `TALENTDESK_OFFICE_CLOSES_AT`: Closing time, e.g. `6:00 PM` (required)
//! - `TALENTDESK_SLOT_GRANULARITY`: Slot step in minutes
//! - `TALENTDESK_CLOSED_WEEKDAYS`: Comma-separated weekdays, e.g. `sat,sun`
//! - `TALENTDESK_DURATION_OPTIONS`: Comma-separated minutes, e.g. `30,60`
//! - `TALENTDESK_LOG_LEVEL`: `EnvFilter` directive
//! - `TALENTDESK_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./talentdesk.toml` or `./talentdesk.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Weekday;
use talentdesk_domain::constants::DEFAULT_SLOT_GRANULARITY_MINUTES;
use talentdesk_domain::{
    Config, LoggingConfig, OfficeHoursConfig, OfficeHoursPolicy, Result, TalentDeskError,
};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["talentdesk.toml", "talentdesk.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If a required
/// variable is missing, falls back to a config file, and to the defaults if
/// no file exists in any probed location.
///
/// # Errors
/// Returns `TalentDeskError::Config` if:
/// - An environment variable or file has an invalid value
/// - File format is invalid
/// - The resulting office hours are inconsistent
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(TalentDeskError::NotFound(missing)) => {
            tracing::debug!(%missing, "Environment incomplete, trying file");
        }
        Err(err) => return Err(err),
    }

    if probe_config_paths().is_some() {
        return load_from_file(None);
    }

    tracing::info!("No config file found, using default office hours");
    let config = Config::default();
    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Opening and closing times are required; everything else falls back to
/// its default.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `TalentDeskError::NotFound` naming the first missing required
/// variable, or `TalentDeskError::Config` for an invalid value.
pub fn load_from_env() -> Result<Config> {
    let opens_at = env_var("TALENTDESK_OFFICE_OPENS_AT")?;
    let closes_at = env_var("TALENTDESK_OFFICE_CLOSES_AT")?;

    let granularity_minutes = env_opt("TALENTDESK_SLOT_GRANULARITY")
        .map(|s| {
            s.trim()
                .parse::<u16>()
                .map_err(|e| TalentDeskError::Config(format!("Invalid slot granularity: {e}")))
        })
        .transpose()?
        .unwrap_or(DEFAULT_SLOT_GRANULARITY_MINUTES);

    let closed_weekdays = env_opt("TALENTDESK_CLOSED_WEEKDAYS")
        .map(|s| {
            parse_list(&s, |item| {
                Weekday::from_str(item)
                    .map_err(|_| TalentDeskError::Config(format!("Invalid weekday: {item}")))
            })
        })
        .transpose()?
        .unwrap_or_default();

    let defaults = OfficeHoursConfig::default();
    let duration_options = env_opt("TALENTDESK_DURATION_OPTIONS")
        .map(|s| {
            parse_list(&s, |item| {
                item.parse::<u16>()
                    .map_err(|e| TalentDeskError::Config(format!("Invalid duration '{item}': {e}")))
            })
        })
        .transpose()?
        .unwrap_or(defaults.duration_options);

    let log_defaults = LoggingConfig::default();
    let config = Config {
        office_hours: OfficeHoursConfig {
            opens_at,
            closes_at,
            granularity_minutes,
            closed_weekdays,
            duration_options,
            ..OfficeHoursConfig::default()
        },
        logging: LoggingConfig {
            level: env_opt("TALENTDESK_LOG_LEVEL").unwrap_or(log_defaults.level),
            json: env_bool("TALENTDESK_LOG_JSON", log_defaults.json),
        },
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `TalentDeskError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The office hours it describes are invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TalentDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TalentDeskError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TalentDeskError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(TalentDeskError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Reject configs whose office hours cannot form a policy.
fn validate(config: &Config) -> Result<()> {
    OfficeHoursPolicy::from_config(&config.office_hours)
        .map(|_| ())
        .map_err(|err| TalentDeskError::Config(format!("Invalid office hours: {err}")))
}

/// Probe multiple paths for configuration files
///
/// Searches `talentdesk.{toml,json}` then `config.{toml,json}` in:
/// 1. Current working directory
/// 2. Parent directories (up to 2 levels)
/// 3. The executable's directory and its parents
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            bases.push(exe_dir.to_path_buf());
        }
    }

    bases
        .iter()
        .flat_map(|base| [base.clone(), base.join(".."), base.join("../..")])
        .flat_map(|dir| CONFIG_FILE_NAMES.map(|name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `TalentDeskError::NotFound` if the variable is not set, so
/// [`load`] can tell "absent" apart from "invalid".
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        TalentDeskError::NotFound(format!("Missing required environment variable: {key}"))
    })
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

fn parse_list<T>(raw: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Vec<T>> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty()).map(parse).collect()
}
