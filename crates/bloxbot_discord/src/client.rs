//! Discord bot client setup and lifecycle management.

use crate::handler::BloxbotHandler;
use bloxbot_error::{DiscordError, DiscordErrorKind, DiscordResult};
use bloxbot_roblox::RobloxClient;
use serenity::Client;
use serenity::all::GuildId;
use tracing::{info, instrument};

/// Main Discord client for bloxbot.
///
/// Wraps the Serenity client and the event handler that serves the slash
/// commands.
///
/// # Example
/// ```no_run
/// use bloxbot_discord::BloxBot;
/// use bloxbot_roblox::RobloxClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let mut bot = BloxBot::new(token, None, RobloxClient::new()).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct BloxBot {
    client: Client,
}

impl BloxBot {
    /// Create a new bot instance.
    ///
    /// # Errors
    /// Returns an error if the Serenity client fails to initialize, for
    /// example with a malformed token.
    #[instrument(skip(token, roblox), fields(token_len = token.len()))]
    pub async fn new(
        token: String,
        guild_id: Option<u64>,
        roblox: RobloxClient,
    ) -> DiscordResult<Self> {
        info!("Initializing bloxbot Discord client");

        let handler = BloxbotHandler::new(roblox, guild_id.map(GuildId::new));
        let intents = BloxbotHandler::intents();

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        Ok(Self { client })
    }

    /// Start the bot. Blocks until the gateway session ends.
    ///
    /// # Errors
    /// Returns an error if the client fails to connect or encounters a fatal
    /// gateway error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("Starting Discord bot");
        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })
    }
}
