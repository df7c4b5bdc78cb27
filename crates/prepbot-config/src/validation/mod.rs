//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chat;
mod gateway;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::PrepbotConfig;
use prepbot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PrepbotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    gateway::validate_gateway(&mut errors, config);
    chat::validate_chat(&mut errors, config);
    chat::validate_identity(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
