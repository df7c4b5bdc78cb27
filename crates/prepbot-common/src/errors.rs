use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PrepbotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("chat error: {0}")]
    Chat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("gateway.base_url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: gateway.base_url is empty"
        );
    }

    #[test]
    fn prepbot_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PrepbotError = config_err.into();
        assert!(matches!(err, PrepbotError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn prepbot_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PrepbotError = io_err.into();
        assert!(matches!(err, PrepbotError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn prepbot_error_chat_display() {
        let err = PrepbotError::Chat("invalid gateway config: bad header".into());
        assert_eq!(err.to_string(), "chat error: invalid gateway config: bad header");
    }
}
