//! The merged result set for one user-info request.

use crate::{AttributeResult, Presence};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The merged, partially-populated result set for one user-info request.
///
/// A bundle is built fresh per command invocation, populated by the
/// aggregation fan-out, consumed once by the renderer, then discarded.
/// Only the resolved id is guaranteed; every attribute field may be absent
/// and every consumer must handle absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct UserProfileBundle {
    /// Canonical numeric user id all lookups were keyed by.
    pub id: u64,
    /// Display name from the profile record.
    #[new(default)]
    pub display_name: AttributeResult<String>,
    /// Login username from the profile record.
    #[new(default)]
    pub username: AttributeResult<String>,
    /// 720x720 headshot image URL.
    #[new(default)]
    pub headshot_url: AttributeResult<String>,
    /// Friend count. `Present(0)` is a real count, distinct from `Absent`.
    #[new(default)]
    pub friends: AttributeResult<u64>,
    /// Follower count.
    #[new(default)]
    pub followers: AttributeResult<u64>,
    /// Following count.
    #[new(default)]
    pub following: AttributeResult<u64>,
    /// Verified-badge flag from the profile record.
    #[new(default)]
    pub verified: AttributeResult<bool>,
    /// Premium membership flag, where the profile payload carries one.
    #[new(default)]
    pub premium: AttributeResult<bool>,
    /// Inventory privacy flag from the extended profile.
    #[new(default)]
    pub inventory_private: AttributeResult<bool>,
    /// Free-text profile blurb.
    #[new(default)]
    pub blurb: AttributeResult<String>,
    /// Account creation timestamp.
    #[new(default)]
    pub created: AttributeResult<DateTime<Utc>>,
    /// Presence state.
    #[new(default)]
    pub presence: AttributeResult<Presence>,
    /// Number of group memberships. The groups fetcher collapses failure to
    /// zero, so this is normally present; see the fetcher configuration.
    #[new(default)]
    pub group_count: AttributeResult<u64>,
    /// Up to ten badge names, in upstream order. Empty on failure.
    #[new(default)]
    pub badges: Vec<String>,
}
