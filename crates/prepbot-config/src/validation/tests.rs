//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = PrepbotConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_base_url() {
    let mut config = PrepbotConfig::default();
    config.gateway.base_url = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.base_url"));
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = PrepbotConfig::default();
    config.gateway.base_url = "prep.example.com/api".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("http:// or https://"));
}

#[test]
fn catches_relative_ask_path() {
    let mut config = PrepbotConfig::default();
    config.gateway.ask_path = "chatbot/ask".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.ask_path"));
}

#[test]
fn catches_zero_request_timeout() {
    let mut config = PrepbotConfig::default();
    config.gateway.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.request_timeout_secs"));
}

#[test]
fn catches_connect_timeout_too_large() {
    let mut config = PrepbotConfig::default();
    config.gateway.connect_timeout_secs = 120;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.connect_timeout_secs"));
}

#[test]
fn catches_bad_header_name() {
    let mut config = PrepbotConfig::default();
    config.gateway.identity_header = "user email".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.identity_header"));
}

#[test]
fn accepts_custom_header_name() {
    let mut config = PrepbotConfig::default();
    config.gateway.identity_header = "X-User-Email".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_greeting() {
    let mut config = PrepbotConfig::default();
    config.chat.greeting = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.greeting"));
}

#[test]
fn catches_blank_quick_prompt() {
    let mut config = PrepbotConfig::default();
    config.chat.quick_prompts.push(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.quick_prompts[4]"));
}

#[test]
fn catches_zero_event_capacity() {
    let mut config = PrepbotConfig::default();
    config.chat.event_capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.event_capacity"));
}

#[test]
fn catches_malformed_email_override() {
    let mut config = PrepbotConfig::default();
    config.identity.email = Some("not-an-email".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("identity.email"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PrepbotConfig::default();
    config.chat.context = String::new();
    config.chat.apology = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.context"));
    assert!(err.contains("chat.apology"));
    assert!(err.contains("; "));
}
