//! Base URLs for the Roblox API services.

/// Base URLs for each Roblox API service the bot talks to.
///
/// Defaults to the production hosts; tests point every service at a local
/// mock server instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct RobloxEndpoints {
    /// Users service (profiles, name resolution, extended profile).
    pub users: String,
    /// Thumbnails service (avatar headshots).
    pub thumbnails: String,
    /// Friends service (friend/follower/following counts).
    pub friends: String,
    /// Presence service (online/offline/in-game batch lookups).
    pub presence: String,
    /// Groups service (group role memberships).
    pub groups: String,
    /// Badges service (earned badges).
    pub badges: String,
}

impl RobloxEndpoints {
    /// Point every service at the same host. Paths are disjoint across
    /// services, so a single mock server can stand in for all of them.
    pub fn single_host(base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/').to_string();
        Self::new(
            base.clone(),
            base.clone(),
            base.clone(),
            base.clone(),
            base.clone(),
            base,
        )
    }
}

impl Default for RobloxEndpoints {
    fn default() -> Self {
        Self::new(
            "https://users.roblox.com".into(),
            "https://thumbnails.roblox.com".into(),
            "https://friends.roblox.com".into(),
            "https://presence.roblox.com".into(),
            "https://groups.roblox.com".into(),
            "https://badges.roblox.com".into(),
        )
    }
}
