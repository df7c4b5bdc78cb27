use crate::schema::PrepbotConfig;

use super::helpers::{validate_non_empty, validate_range};

/// Validate chat texts and the event buffer size.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &PrepbotConfig) {
    let chat = &config.chat;

    validate_non_empty(errors, "chat.context", &chat.context);
    validate_non_empty(errors, "chat.greeting", &chat.greeting);
    validate_non_empty(errors, "chat.apology", &chat.apology);

    for (i, prompt) in chat.quick_prompts.iter().enumerate() {
        validate_non_empty(errors, &format!("chat.quick_prompts[{i}]"), prompt);
    }

    validate_range(errors, "chat.event_capacity", chat.event_capacity, 1, 4096);
}

/// Validate the identity override.
pub(crate) fn validate_identity(errors: &mut Vec<String>, config: &PrepbotConfig) {
    if let Some(ref email) = config.identity.email {
        if !email.contains('@') {
            errors.push(format!("identity.email = {email:?} is not an email address"));
        }
    }
}
