//! Attribute fetchers: one independent remote lookup per user attribute.
//!
//! Every fetcher has the shape `fetch_x(id) -> AttributeResult<T>`: a single
//! HTTP attempt whose failure settles as `Absent` instead of an error. No
//! fetcher observes another's outcome.

use crate::RobloxClient;
use crate::json_models::{
    BadgesResponse, CountResponse, ExtendedProfileResponse, GroupRolesResponse, PresenceRequest,
    PresenceResponse, ThumbnailResponse, UserRecord,
};
use bloxbot_core::{AttributeResult, Presence};
use tracing::{debug, instrument};

/// The groups-count lookup reports zero on failure instead of absence. The
/// other count lookups keep failure distinct from a legitimate zero; this
/// flag preserves the original bot's divergent policy for groups.
const GROUPS_COLLAPSE_FAILURE_TO_ZERO: bool = true;

/// Maximum number of badge names carried into the bundle.
const BADGE_LIMIT: usize = 10;

/// Requested headshot render size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum HeadshotSize {
    /// 420x420, used for the avatar commands.
    #[strum(serialize = "420x420")]
    Standard,
    /// 720x720, used for the user-info embed image.
    #[strum(serialize = "720x720")]
    Large,
}

impl RobloxClient {
    /// Fetch the basic profile record. Absent on any transport or parse
    /// failure; this is the one attribute the aggregation cannot do without.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, id: u64) -> AttributeResult<UserRecord> {
        let url = format!("{}/v1/users/{}", self.endpoints().users, id);
        AttributeResult::from_option(self.get_json(&url).await)
    }

    /// Fetch the avatar headshot URL at the given size. Absent when the
    /// thumbnail service fails, returns no entries, or the render is pending.
    #[instrument(skip(self))]
    pub async fn fetch_headshot(&self, id: u64, size: HeadshotSize) -> AttributeResult<String> {
        let url = format!(
            "{}/v1/users/avatar-headshot?userIds={}&size={}&format=Png&isCircular=false",
            self.endpoints().thumbnails,
            id,
            size,
        );
        let response: Option<ThumbnailResponse> = self.get_json(&url).await;
        AttributeResult::from_option(
            response.and_then(|r| r.data().first().and_then(|t| t.image_url().clone())),
        )
    }

    /// Fetch the friend count. `Present(0)` is a real count; `Absent` means
    /// the lookup failed.
    #[instrument(skip(self))]
    pub async fn fetch_friends_count(&self, id: u64) -> AttributeResult<u64> {
        self.fetch_count(&format!(
            "{}/v1/users/{}/friends/count",
            self.endpoints().friends,
            id
        ))
        .await
    }

    /// Fetch the follower count.
    #[instrument(skip(self))]
    pub async fn fetch_followers_count(&self, id: u64) -> AttributeResult<u64> {
        self.fetch_count(&format!(
            "{}/v1/users/{}/followers/count",
            self.endpoints().friends,
            id
        ))
        .await
    }

    /// Fetch the following count.
    #[instrument(skip(self))]
    pub async fn fetch_followings_count(&self, id: u64) -> AttributeResult<u64> {
        self.fetch_count(&format!(
            "{}/v1/users/{}/followings/count",
            self.endpoints().friends,
            id
        ))
        .await
    }

    /// Fetch the presence state via the batch endpoint. Absent when the call
    /// fails or returns no entry for this id.
    #[instrument(skip(self))]
    pub async fn fetch_presence(&self, id: u64) -> AttributeResult<Presence> {
        let url = format!("{}/v1/presence/users", self.endpoints().presence);
        let request = PresenceRequest::new(vec![id]);
        let response: Option<PresenceResponse> = self.post_json(&url, &request).await;
        AttributeResult::from_option(response.and_then(|r| {
            r.user_presences()
                .iter()
                .find(|p| *p.user_id() == id)
                .map(|p| Presence::from_code(*p.user_presence_type()))
        }))
    }

    /// Fetch the number of group memberships.
    ///
    /// Policy differs from the other counts: failure collapses to
    /// `Present(0)` per [`GROUPS_COLLAPSE_FAILURE_TO_ZERO`].
    #[instrument(skip(self))]
    pub async fn fetch_group_count(&self, id: u64) -> AttributeResult<u64> {
        let url = format!("{}/v1/users/{}/groups/roles", self.endpoints().groups, id);
        let response: Option<GroupRolesResponse> = self.get_json(&url).await;
        match response {
            Some(r) => AttributeResult::Present(r.data().len() as u64),
            None if GROUPS_COLLAPSE_FAILURE_TO_ZERO => {
                debug!(id, "Groups lookup failed, collapsing to zero");
                AttributeResult::Present(0)
            }
            None => AttributeResult::Absent,
        }
    }

    /// Fetch up to ten badge names in upstream order. Empty on failure.
    #[instrument(skip(self))]
    pub async fn fetch_badges(&self, id: u64) -> Vec<String> {
        let url = format!(
            "{}/v1/users/{}/badges?limit=10&sortOrder=Asc",
            self.endpoints().badges,
            id
        );
        let response: Option<BadgesResponse> = self.get_json(&url).await;
        response
            .map(|r| {
                r.data()
                    .iter()
                    .take(BADGE_LIMIT)
                    .map(|b| b.name().clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fetch the extended profile (blurb and inventory privacy). Absence is
    /// handled at rendering time with the fixed fallback strings.
    #[instrument(skip(self))]
    pub async fn fetch_extended_profile(&self, id: u64) -> AttributeResult<ExtendedProfileResponse> {
        let url = format!("{}/v1/users/{}/profile", self.endpoints().users, id);
        AttributeResult::from_option(self.get_json(&url).await)
    }

    async fn fetch_count(&self, url: &str) -> AttributeResult<u64> {
        let response: Option<CountResponse> = self.get_json(url).await;
        AttributeResult::from_option(response.map(|r| *r.count()))
    }
}
