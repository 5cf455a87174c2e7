//! Transport-agnostic command execution.
//!
//! Each `run_*` function maps one slash command to its reply content without
//! touching Serenity. The handler converts the outcome into an interaction
//! response; tests call these functions directly against a mock Roblox API.

use bloxbot_core::tax::{TaxKind, tax_reply};
use bloxbot_core::{AttributeResult, RenderedEmbed, RequesterIdentity, render_user_embed};
use bloxbot_roblox::{HeadshotSize, RobloxClient};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

/// Reply when a username or id resolves to no Roblox user.
pub const USER_NOT_FOUND_REPLY: &str = "Could not find that Roblox user.";
/// Reply when the headshot lookup fails for the avatar command.
pub const HEADSHOT_FAILED_REPLY: &str = "Could not fetch avatar headshot.";
/// Reply when the mandatory profile fetch fails for the userinfo command.
pub const USER_INFO_FAILED_REPLY: &str = "Could not fetch user info.";
/// Reply for any uncaught fault during command handling.
pub const GENERIC_FAILURE_REPLY: &str = "Something went wrong while processing your request.";

/// What a command produced: plain text or a rendered embed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A plain-text reply.
    Text(String),
    /// A structured embed reply.
    Embed(Box<RenderedEmbed>),
}

/// The avatar command: resolve, fetch a 420x420 headshot, reply with the
/// bare URL. Either failure step gets its own explicit message.
#[instrument(skip(roblox))]
pub async fn run_avatar(roblox: &RobloxClient, input: &str) -> CommandOutcome {
    let id = match roblox.resolve_user(input).await {
        Ok(id) => id,
        Err(e) => {
            debug!(input, error = %e, "Avatar lookup could not resolve user");
            return CommandOutcome::Text(USER_NOT_FOUND_REPLY.into());
        }
    };
    match roblox.fetch_headshot(id, HeadshotSize::Standard).await {
        AttributeResult::Present(url) => CommandOutcome::Text(url),
        AttributeResult::Absent => CommandOutcome::Text(HEADSHOT_FAILED_REPLY.into()),
    }
}

/// The user command: resolve the Roblox identity, fetch a headshot, and
/// combine it with the supplied Discord mention token.
#[instrument(skip(roblox))]
pub async fn run_user(roblox: &RobloxClient, mention: &str, input: &str) -> CommandOutcome {
    let id = match roblox.resolve_user(input).await {
        Ok(id) => id,
        Err(e) => {
            debug!(input, error = %e, "User lookup could not resolve user");
            return CommandOutcome::Text(USER_NOT_FOUND_REPLY.into());
        }
    };
    match roblox.fetch_headshot(id, HeadshotSize::Standard).await {
        AttributeResult::Present(url) => CommandOutcome::Text(format!("{mention} {url}")),
        AttributeResult::Absent => CommandOutcome::Text(format!("{mention}\n(avatar not found)")),
    }
}

/// The tax commands: pure arithmetic, no remote calls.
pub fn run_tax(kind: TaxKind, amount: f64) -> CommandOutcome {
    CommandOutcome::Text(tax_reply(kind, amount))
}

/// The userinfo command: resolve, aggregate, render. Resolution and
/// aggregation failures are the only terminal outcomes; every other absence
/// degrades to a placeholder inside the embed.
#[instrument(skip(roblox, requester))]
pub async fn run_userinfo(
    roblox: &RobloxClient,
    input: &str,
    requester: &RequesterIdentity,
    now: DateTime<Utc>,
) -> CommandOutcome {
    let id = match roblox.resolve_user(input).await {
        Ok(id) => id,
        Err(e) => {
            debug!(input, error = %e, "Userinfo could not resolve user");
            return CommandOutcome::Text(USER_NOT_FOUND_REPLY.into());
        }
    };
    match roblox.aggregate_user(id).await {
        Ok(bundle) => {
            CommandOutcome::Embed(Box::new(render_user_embed(&bundle, requester, now)))
        }
        Err(e) => {
            warn!(id, error = %e, "Userinfo aggregation failed");
            CommandOutcome::Text(USER_INFO_FAILED_REPLY.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_outcomes_are_plain_text() {
        assert_eq!(
            run_tax(TaxKind::Donation, 100.0),
            CommandOutcome::Text(
                "Donate (donation tax 40%)\nOriginal: 100 → After 40% tax: 60".into()
            )
        );
        assert_eq!(
            run_tax(TaxKind::Gamepass, 100.0),
            CommandOutcome::Text(
                "Gamepass donation (tax 30%)\nOriginal: 100 → After 30% tax: 70".into()
            )
        );
    }
}
