//! Embed rendering for the user-info command.
//!
//! `render_user_embed` is a pure function of the bundle, the requesting
//! identity, and a caller-supplied "now". Identical inputs produce an
//! identical embed, which keeps the whole presentation layer testable
//! without a chat transport.

use crate::{AttributeResult, UserProfileBundle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embed accent color (white, matching the original bot).
pub const EMBED_COLOR: u32 = 0xFFFFFF;

/// Partner site hosting RAP and value pages, keyed by user id.
const PARTNER_PLAYER_URL: &str = "https://www.rolimons.com/player";

/// The identity of the Discord user who invoked the command, shown in the
/// embed author line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct RequesterIdentity {
    /// Discord display tag of the requester.
    pub name: String,
    /// Avatar URL of the requester, when one is available.
    pub avatar_url: Option<String>,
}

/// One labeled field within a rendered embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct EmbedField {
    /// Field label.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field shares a row with its neighbors.
    pub inline: bool,
}

/// A transport-agnostic embed payload.
///
/// The Discord layer converts this into a Serenity `CreateEmbed`; tests
/// assert against it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedEmbed {
    /// Embed title.
    pub title: String,
    /// Clickable title URL.
    pub url: String,
    /// Accent color.
    pub color: u32,
    /// Author line: requesting identity.
    pub author_name: String,
    /// Author icon, when the requester has an avatar.
    pub author_icon_url: Option<String>,
    /// Ordered labeled fields.
    pub fields: Vec<EmbedField>,
    /// Large image URL, when a headshot was fetched.
    pub image_url: Option<String>,
    /// Footer text.
    pub footer: String,
}

/// Render the user-info embed from a merged bundle.
///
/// Derivation rules:
/// - the display name falls back to the username;
/// - boolean flags render as the literal "Yes"/"No";
/// - absent counts render as "N/A", never sharing a fallback with free text;
/// - the absent blurb renders as "No description", absent presence and
///   creation date as "Unknown", an empty badge list as "None";
/// - the RAP and Value fields are always masked links to the partner site,
///   by construction rather than from any fetched attribute.
pub fn render_user_embed(
    bundle: &UserProfileBundle,
    requester: &RequesterIdentity,
    now: DateTime<Utc>,
) -> RenderedEmbed {
    let username = bundle
        .username
        .value()
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());
    let display_name = bundle
        .display_name
        .value()
        .cloned()
        .unwrap_or_else(|| username.clone());

    let player_url = format!("{}/{}", PARTNER_PLAYER_URL, bundle.id);
    let social_row = format!(
        "**Friends** {} | **Followers** {} | **Following** {}",
        count_text(&bundle.friends),
        count_text(&bundle.followers),
        count_text(&bundle.following),
    );

    let mut fields = vec![
        EmbedField::new("Friends | Followers | Following".into(), social_row, false),
        EmbedField::new("User ID".into(), bundle.id.to_string(), true),
        EmbedField::new("Verified".into(), bool_text(&bundle.verified), true),
        EmbedField::new(
            "Inventory Privacy".into(),
            privacy_text(&bundle.inventory_private),
            true,
        ),
        EmbedField::new("Description".into(), blurb_text(&bundle.blurb), false),
        EmbedField::new("RAP".into(), format!("[RAP]({player_url})"), true),
        EmbedField::new("Value".into(), format!("[Value]({player_url})"), true),
        EmbedField::new("Presence".into(), presence_text(bundle), true),
        EmbedField::new("Groups".into(), count_text(&bundle.group_count), true),
    ];
    if let Some(premium) = bundle.premium.value() {
        fields.push(EmbedField::new(
            "Premium".into(),
            yes_no(*premium).to_string(),
            true,
        ));
    }
    fields.push(EmbedField::new(
        "Badges".into(),
        badges_text(&bundle.badges),
        false,
    ));
    fields.push(EmbedField::new(
        "Account Created".into(),
        created_text(&bundle.created),
        false,
    ));

    RenderedEmbed {
        title: format!("{} ({})", display_name, username),
        url: format!("https://roblox.com/users/{}/profile", bundle.id),
        color: EMBED_COLOR,
        author_name: requester.name.clone(),
        author_icon_url: requester.avatar_url.clone(),
        fields,
        image_url: bundle.headshot_url.value().cloned(),
        footer: format!("roblox.com • fetched {}", now.format("%-d %B %Y %H:%M UTC")),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn bool_text(flag: &AttributeResult<bool>) -> String {
    // Falsy-by-default, matching the original: an absent flag reads "No".
    yes_no(matches!(flag, AttributeResult::Present(true))).to_string()
}

fn privacy_text(flag: &AttributeResult<bool>) -> String {
    match flag {
        AttributeResult::Present(true) => "Private".to_string(),
        AttributeResult::Present(false) => "Public".to_string(),
        AttributeResult::Absent => "Unknown".to_string(),
    }
}

fn count_text(count: &AttributeResult<u64>) -> String {
    match count {
        AttributeResult::Present(n) => n.to_string(),
        AttributeResult::Absent => "N/A".to_string(),
    }
}

fn blurb_text(blurb: &AttributeResult<String>) -> String {
    match blurb.value() {
        Some(text) if !text.is_empty() => text.clone(),
        _ => "No description".to_string(),
    }
}

fn presence_text(bundle: &UserProfileBundle) -> String {
    match bundle.presence.value() {
        Some(presence) => presence.to_string(),
        None => "Unknown".to_string(),
    }
}

fn badges_text(badges: &[String]) -> String {
    if badges.is_empty() {
        "None".to_string()
    } else {
        badges.join(", ")
    }
}

fn created_text(created: &AttributeResult<DateTime<Utc>>) -> String {
    match created.value() {
        Some(ts) => ts.format("%A, %-d %B %Y at %H:%M").to_string(),
        None => "Unknown".to_string(),
    }
}
