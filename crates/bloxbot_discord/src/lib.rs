//! Discord integration for bloxbot.
//!
//! This crate owns everything that touches the chat transport:
//!
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: the `EventHandler` that registers slash commands at ready
//!   and dispatches interactions
//! - **commands**: the slash-command definitions
//! - **dispatch**: transport-agnostic command execution, returning either a
//!   text reply or a rendered embed
//! - **convert**: `RenderedEmbed` to Serenity `CreateEmbed`
//!
//! The dispatch layer deliberately knows nothing about Serenity, so every
//! command's behavior is testable against a mock Roblox API alone.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod commands;
mod convert;
mod dispatch;
mod handler;

pub use client::BloxBot;
pub use commands::command_definitions;
pub use convert::to_create_embed;
pub use dispatch::{
    CommandOutcome, GENERIC_FAILURE_REPLY, HEADSHOT_FAILED_REPLY, USER_INFO_FAILED_REPLY,
    USER_NOT_FOUND_REPLY, run_avatar, run_tax, run_user, run_userinfo,
};
pub use handler::BloxbotHandler;
