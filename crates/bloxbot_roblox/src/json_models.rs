//! Serde models for the Roblox API payloads.
//!
//! These mirror the wire format of the public endpoints. Fields the bot does
//! not consume are omitted; serde skips unknown fields on deserialization.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for the batch username-to-id lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct UsernameLookupRequest {
    /// Usernames to resolve, case preserved. The bot always sends exactly one.
    usernames: Vec<String>,
}

/// Response from the batch username-to-id lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UsernameLookupResponse {
    /// One entry per resolved name; empty when nothing matched.
    #[serde(default)]
    data: Vec<UserMatch>,
}

/// A single match from the username lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct UserMatch {
    /// Canonical numeric user id.
    id: u64,
    /// Matched username.
    name: String,
}

/// Basic profile record from the users service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Numeric user id.
    id: u64,
    /// Login username.
    name: String,
    /// Display name; may be missing on old accounts.
    #[serde(default)]
    display_name: Option<String>,
    /// Profile description text.
    #[serde(default)]
    description: Option<String>,
    /// Account creation timestamp, ISO 8601.
    #[serde(default)]
    created: Option<String>,
    /// Verified-badge flag.
    #[serde(default)]
    has_verified_badge: bool,
}

/// Response from the avatar-headshot thumbnail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResponse {
    /// One entry per requested id; empty when the thumbnail is unavailable.
    #[serde(default)]
    data: Vec<ThumbnailRecord>,
}

/// A single thumbnail entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRecord {
    /// CDN URL of the rendered image; null while the render is pending.
    #[serde(default)]
    image_url: Option<String>,
}

/// Response from the friend/follower/following count endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    /// The non-negative count.
    count: u64,
}

/// Request body for the batch presence lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRequest {
    /// User ids to look up. The bot always sends exactly one.
    user_ids: Vec<u64>,
}

/// Response from the batch presence lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PresenceResponse {
    /// One entry per requested id.
    #[serde(default)]
    user_presences: Vec<PresenceRecord>,
}

/// A single presence entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    /// Presence code: 0 offline, 1 online, 2 in game.
    #[serde(default)]
    user_presence_type: i64,
    /// The user this entry belongs to.
    user_id: u64,
}

/// Response from the group-roles endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GroupRolesResponse {
    /// One entry per group membership.
    #[serde(default)]
    data: Vec<GroupMembership>,
}

/// One group membership entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    /// The group itself.
    group: GroupSummary,
}

/// Identifying details of a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    /// Numeric group id.
    id: u64,
    /// Group name.
    name: String,
}

/// Response from the badges endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct BadgesResponse {
    /// Badge entries in upstream order.
    #[serde(default)]
    data: Vec<BadgeRecord>,
}

/// A single earned badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRecord {
    /// Numeric badge id.
    id: u64,
    /// Badge name.
    name: String,
}

/// Extended profile record (blurb and privacy flags).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedProfileResponse {
    /// Free-text profile blurb.
    #[serde(default)]
    blurb: Option<String>,
    /// Whether the user's inventory is private.
    #[serde(default)]
    is_inventory_private: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_tolerates_missing_optional_fields() {
        let record: UserRecord =
            serde_json::from_str(r#"{"id": 1, "name": "Roblox"}"#).expect("minimal record");
        assert_eq!(*record.id(), 1);
        assert_eq!(record.name(), "Roblox");
        assert!(record.display_name().is_none());
        assert!(!record.has_verified_badge());
    }

    #[test]
    fn lookup_response_defaults_to_empty_data() {
        let resp: UsernameLookupResponse = serde_json::from_str("{}").expect("empty object");
        assert!(resp.data().is_empty());
    }

    #[test]
    fn presence_record_parses_wire_names() {
        let resp: PresenceResponse = serde_json::from_str(
            r#"{"userPresences": [{"userPresenceType": 2, "userId": 42, "lastLocation": "x"}]}"#,
        )
        .expect("presence payload");
        let entry = &resp.user_presences()[0];
        assert_eq!(*entry.user_presence_type(), 2);
        assert_eq!(*entry.user_id(), 42);
    }
}
