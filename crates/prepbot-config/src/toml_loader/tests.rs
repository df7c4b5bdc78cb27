//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_prepbot_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, prepbot_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[gateway]
base_url = "https://prep.example.com/api"
request_timeout_secs = 30

[identity]
email = "candidate@example.com"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gateway.base_url, "https://prep.example.com/api");
    assert_eq!(config.gateway.request_timeout_secs, 30);
    assert_eq!(
        config.identity.email.as_deref(),
        Some("candidate@example.com")
    );
    // Defaults preserved
    assert_eq!(config.gateway.identity_header, "email");
    assert_eq!(config.chat.context, "interview_preparation");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, prepbot_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gateway]
request_timeout_secs = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gateway.request_timeout_secs, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prepbot").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gateway.ask_path, "/chatbot/ask");
    assert_eq!(config.chat.event_capacity, 64);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::PrepbotConfig;

    let config: PrepbotConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_paths_are_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("prepbot"));
        assert!(path_str.ends_with("config.toml"));
    }
    if let Some(path) = default_user_file_path() {
        assert!(path.ends_with("prepbot/user.json"));
    }
}
