//! Serenity event handler: command registration and interaction dispatch.

use crate::commands::command_definitions;
use crate::convert::to_create_embed;
use crate::dispatch::{
    CommandOutcome, GENERIC_FAILURE_REPLY, run_avatar, run_tax, run_user, run_userinfo,
};
use bloxbot_core::RequesterIdentity;
use bloxbot_core::tax::TaxKind;
use bloxbot_error::{DiscordError, DiscordErrorKind, DiscordResult};
use bloxbot_roblox::RobloxClient;
use chrono::Utc;
use serenity::all::{
    Command, CommandInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, GuildId, Interaction, Ready, ResolvedValue, UserId,
};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::GatewayIntents;
use tracing::{error, info, warn};

/// Event handler for the bloxbot Discord bot.
///
/// Registers the slash commands once the gateway session is ready and
/// dispatches command interactions to the transport-agnostic runners.
pub struct BloxbotHandler {
    /// Roblox API client shared by every invocation.
    roblox: RobloxClient,
    /// When set, commands register against this guild only; otherwise they
    /// register globally.
    guild_id: Option<GuildId>,
}

impl BloxbotHandler {
    /// Create a new handler.
    pub fn new(roblox: RobloxClient, guild_id: Option<GuildId>) -> Self {
        Self { roblox, guild_id }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS
    }

    /// Execute one command interaction. The three remote-calling commands
    /// have already been deferred by the time this runs.
    async fn handle_command(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
        deferred: bool,
    ) -> DiscordResult<()> {
        let outcome = match command.data.name.as_str() {
            "avatar" => {
                let input = string_option(command, "user")?;
                run_avatar(&self.roblox, &input).await
            }
            "user" => {
                let target = user_option(command, "discord")?;
                let input = string_option(command, "roblox")?;
                run_user(&self.roblox, &format!("<@{target}>"), &input).await
            }
            "donotax" => run_tax(TaxKind::Donation, number_option(command, "amount")?),
            "gamepasstax" => run_tax(TaxKind::Gamepass, number_option(command, "amount")?),
            "userinfo" => {
                let input = string_option(command, "user")?;
                let requester =
                    RequesterIdentity::new(command.user.tag(), command.user.avatar_url());
                run_userinfo(&self.roblox, &input, &requester, Utc::now()).await
            }
            other => {
                warn!(command = other, "Ignoring unknown command");
                return Ok(());
            }
        };
        deliver(ctx, command, deferred, outcome).await
    }
}

#[async_trait]
impl EventHandler for BloxbotHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Connected to Discord");

        let result = match self.guild_id {
            Some(guild_id) => {
                info!(%guild_id, "Registering guild slash commands");
                guild_id.set_commands(&ctx.http, command_definitions()).await
            }
            None => {
                info!("Registering global slash commands (may take up to an hour to appear)");
                Command::set_global_commands(&ctx.http, command_definitions()).await
            }
        };
        match result {
            Ok(commands) => info!(count = commands.len(), "Registered slash commands"),
            Err(e) => error!(error = %e, "Slash command registration failed"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        // The remote-calling commands defer first and edit the response;
        // the tax commands answer immediately.
        let deferred = matches!(command.data.name.as_str(), "avatar" | "user" | "userinfo");
        if deferred {
            if let Err(e) = command.defer(&ctx.http).await {
                error!(command = %command.data.name, error = %e, "Failed to defer interaction");
                return;
            }
        }

        if let Err(e) = self.handle_command(&ctx, &command, deferred).await {
            error!(command = %command.data.name, error = %e, "Command handling failed");
            let apology = CommandOutcome::Text(GENERIC_FAILURE_REPLY.into());
            if let Err(e) = deliver(&ctx, &command, deferred, apology).await {
                error!(error = %e, "Failed to deliver failure message");
            }
        }
    }
}

/// Send an outcome as a fresh reply or as an edit of the deferred response.
async fn deliver(
    ctx: &Context,
    command: &CommandInteraction,
    deferred: bool,
    outcome: CommandOutcome,
) -> DiscordResult<()> {
    let interaction_failed = |e: serenity::Error| {
        DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string()))
    };

    if deferred {
        let edit = match outcome {
            CommandOutcome::Text(text) => EditInteractionResponse::new().content(text),
            CommandOutcome::Embed(embed) => {
                EditInteractionResponse::new().embed(to_create_embed(&embed))
            }
        };
        command
            .edit_response(&ctx.http, edit)
            .await
            .map(|_| ())
            .map_err(interaction_failed)
    } else {
        let message = match outcome {
            CommandOutcome::Text(text) => CreateInteractionResponseMessage::new().content(text),
            CommandOutcome::Embed(embed) => {
                CreateInteractionResponseMessage::new().embed(to_create_embed(&embed))
            }
        };
        command
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
            .map_err(interaction_failed)
    }
}

fn missing_option(command: &CommandInteraction, option: &str) -> DiscordError {
    DiscordError::new(DiscordErrorKind::MissingOption {
        command: command.data.name.clone(),
        option: option.to_string(),
    })
}

fn string_option(command: &CommandInteraction, name: &str) -> DiscordResult<String> {
    command
        .data
        .options()
        .iter()
        .find_map(|opt| match (&opt.value, opt.name) {
            (ResolvedValue::String(value), n) if n == name => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| missing_option(command, name))
}

fn number_option(command: &CommandInteraction, name: &str) -> DiscordResult<f64> {
    command
        .data
        .options()
        .iter()
        .find_map(|opt| match (&opt.value, opt.name) {
            (ResolvedValue::Number(value), n) if n == name => Some(*value),
            _ => None,
        })
        .ok_or_else(|| missing_option(command, name))
}

fn user_option(command: &CommandInteraction, name: &str) -> DiscordResult<UserId> {
    command
        .data
        .options()
        .iter()
        .find_map(|opt| match (&opt.value, opt.name) {
            (ResolvedValue::User(user, _), n) if n == name => Some(user.id),
            _ => None,
        })
        .ok_or_else(|| missing_option(command, name))
}
