use std::sync::OnceLock;

use regex::Regex;

use crate::schema::PrepbotConfig;

use super::helpers::{validate_non_empty, validate_range};

fn header_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9\-_]*$").expect("valid regex"))
}

/// Validate the backend URL, endpoint path, timeouts and header name.
pub(crate) fn validate_gateway(errors: &mut Vec<String>, config: &PrepbotConfig) {
    let gateway = &config.gateway;

    validate_non_empty(errors, "gateway.base_url", &gateway.base_url);
    if !gateway.base_url.is_empty()
        && !gateway.base_url.starts_with("http://")
        && !gateway.base_url.starts_with("https://")
    {
        errors.push(format!(
            "gateway.base_url = {:?} must start with http:// or https://",
            gateway.base_url
        ));
    }

    if !gateway.ask_path.starts_with('/') {
        errors.push(format!(
            "gateway.ask_path = {:?} must start with '/'",
            gateway.ask_path
        ));
    }

    validate_range(
        errors,
        "gateway.connect_timeout_secs",
        gateway.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "gateway.request_timeout_secs",
        gateway.request_timeout_secs,
        1,
        600,
    );

    if !header_name_pattern().is_match(&gateway.identity_header) {
        errors.push(format!(
            "gateway.identity_header = {:?} is not a valid header name",
            gateway.identity_header
        ));
    }
}
