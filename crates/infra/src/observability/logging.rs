//! Tracing subscriber setup

use talentdesk_domain::{LoggingConfig, Result, TalentDeskError};
use tracing_subscriber::EnvFilter;

/// Filter for the subscriber; `RUST_LOG` wins over `config.level`.
///
/// # Errors
/// Returns `TalentDeskError::Config` if neither source is a valid directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            TalentDeskError::Config(format!("Invalid log level '{}': {e}", config.level))
        }),
    }
}

/// Install the global fmt subscriber.
///
/// Returns `Ok(true)` when this call installed it and `Ok(false)` when a
/// global subscriber was already set, so hosts and tests may call it freely.
///
/// # Errors
/// Returns `TalentDeskError::Config` for an invalid level directive.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().with_current_span(false).try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "tracing initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_config_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig { level: "talentdesk=loud".to_string(), json: false };
        assert!(matches!(build_filter(&config), Err(TalentDeskError::Config(_))));
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = LoggingConfig::default();
        // another test in this binary may have won the first call
        init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
