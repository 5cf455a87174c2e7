//! Slash-command definitions.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

/// The five slash commands the bot registers. Every option is required and
/// typed; Discord enforces both before the interaction reaches the handler.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("avatar")
            .description("Show Roblox avatar headshot")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "user",
                    "Roblox username or user id",
                )
                .required(true),
            ),
        CreateCommand::new("user")
            .description("Mention a Discord user and show Roblox avatar")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "discord",
                    "Discord user to mention",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "roblox",
                    "Roblox username or id",
                )
                .required(true),
            ),
        CreateCommand::new("donotax")
            .description("Donate amount (40% tax)")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Number, "amount", "Amount (number)")
                    .required(true),
            ),
        CreateCommand::new("gamepasstax")
            .description("Gamepass donation (30% tax)")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Number, "amount", "Amount (number)")
                    .required(true),
            ),
        CreateCommand::new("userinfo")
            .description("Detailed Roblox user info embed")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "user",
                    "Roblox username or user id",
                )
                .required(true),
            ),
    ]
}
