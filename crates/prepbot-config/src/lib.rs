//! prepbot configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use prepbot_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PrepbotConfig, CONFIG_SCHEMA_VERSION};

use prepbot_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<PrepbotConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<PrepbotConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PrepbotConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&PrepbotConfig::default());
        assert!(json.contains("\"gateway\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"identity\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"interview_preparation\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nevent_capacity = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn validation_happens_only_in_load_config_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gateway]\nrequest_timeout_secs = 0\n").unwrap();

        let raw = toml_loader::load_from_path(&path).unwrap();
        assert_eq!(raw.gateway.request_timeout_secs, 0);

        match load_config_from(&path) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("gateway.request_timeout_secs"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&PrepbotConfig::default());
        let parsed: PrepbotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.gateway.ask_path, "/chatbot/ask");
        assert_eq!(parsed.chat.event_capacity, 64);
    }
}
