//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# prepbot configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[gateway]
# base_url = "http://localhost:5000/api"
# ask_path = "/chatbot/ask"
# connect_timeout_secs = 10    # 1-60
# request_timeout_secs = 60    # 1-600
# identity_header = "email"

[chat]
# context = "interview_preparation"
# greeting = "Hi! I'm your interview preparation assistant."
# apology = "Sorry, I'm having trouble connecting right now. Please try again in a moment."
# quick_prompts = [
#     "How should I prepare for a technical interview?",
#     "Explain the difference between a process and a thread.",
# ]
# event_capacity = 64          # 1-4096

[identity]
# user_file = "/path/to/user.json"   # defaults to <data dir>/prepbot/user.json
# email = "me@example.com"           # skips the user record entirely

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
