//! Environment-based configuration for the bot process.

use bloxbot_error::{BloxbotResult, ConfigError};
use serde::{Deserialize, Serialize};

/// Default port for the liveness endpoint.
const DEFAULT_HEALTH_PORT: u16 = 3000;

/// Configuration for the bot process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Discord bot token.
    pub discord_token: String,
    /// When set, slash commands register against this guild only.
    pub guild_id: Option<u64>,
    /// Port for the liveness HTTP endpoint.
    pub health_port: u16,
}

impl BotConfig {
    /// Load configuration from the process environment.
    ///
    /// `DISCORD_TOKEN` is required; `GUILD_ID` and `HEALTH_PORT` are
    /// optional.
    pub fn from_env() -> BloxbotResult<Self> {
        Self::from_vars(
            std::env::var("DISCORD_TOKEN").ok(),
            std::env::var("GUILD_ID").ok(),
            std::env::var("HEALTH_PORT").ok(),
        )
    }

    fn from_vars(
        token: Option<String>,
        guild_id: Option<String>,
        health_port: Option<String>,
    ) -> BloxbotResult<Self> {
        let discord_token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::new("DISCORD_TOKEN is not set"))?;

        let guild_id = match guild_id.filter(|g| !g.is_empty()) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                ConfigError::new(format!("GUILD_ID is not a valid guild id: {raw}"))
            })?),
            None => None,
        };

        let health_port = match health_port.filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::new(format!("HEALTH_PORT is not a valid port: {raw}"))
            })?,
            None => DEFAULT_HEALTH_PORT,
        };

        Ok(Self {
            discord_token,
            guild_id,
            health_port,
        })
    }
}
