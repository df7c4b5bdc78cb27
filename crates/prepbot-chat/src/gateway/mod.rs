//! HTTP client for the chat backend.
//!
//! Posts `{ message, context }` to `<base_url>/chatbot/ask` and reads
//! `{ response }` back. The signed-in user's email is attached as a
//! header on every request, read fresh from the persisted user record.

mod api;
mod client;
mod config;
mod identity;

pub use client::HttpGateway;
pub use config::GatewaySettings;
pub use identity::{IdentitySource, UserRecord};
