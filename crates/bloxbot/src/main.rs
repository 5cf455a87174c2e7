//! bloxbot: a Discord bot exposing Roblox user lookups as slash commands.

mod config;
mod health;
mod telemetry;

use bloxbot_discord::BloxBot;
use bloxbot_error::BloxbotResult;
use bloxbot_roblox::RobloxClient;
use config::BotConfig;
use tracing::info;

#[tokio::main]
async fn main() -> BloxbotResult<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing()?;

    let config = BotConfig::from_env()?;
    info!(
        guild_scoped = config.guild_id.is_some(),
        health_port = config.health_port,
        "Starting bloxbot"
    );

    tokio::spawn(health::serve(config.health_port));

    let mut bot = BloxBot::new(
        config.discord_token.clone(),
        config.guild_id,
        RobloxClient::new(),
    )
    .await?;
    bot.start().await?;
    Ok(())
}
