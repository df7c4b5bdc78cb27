//! Configuration schema types for prepbot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod gateway;
mod identity;
mod system;

pub use chat::*;
pub use gateway::*;
pub use identity::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for prepbot.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PrepbotConfig {
    pub gateway: GatewayConfig,
    pub chat: ChatConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}
