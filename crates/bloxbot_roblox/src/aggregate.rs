//! The aggregation fan-out: all attribute fetchers, concurrently, merged
//! into one bundle.

use crate::fetch::HeadshotSize;
use crate::{RobloxClient, json_models::UserRecord};
use bloxbot_core::{AttributeResult, UserProfileBundle};
use bloxbot_error::{RobloxError, RobloxErrorKind, RobloxResult};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

impl RobloxClient {
    /// Run every attribute fetcher for `id` concurrently and merge the
    /// outcomes into a [`UserProfileBundle`].
    ///
    /// The fan-out is a join-all barrier: every fetcher settles before the
    /// bundle is built, and no fetcher's failure cancels a sibling. The only
    /// terminal outcome is an absent profile record, which yields
    /// [`RobloxErrorKind::ProfileUnavailable`]; any other attribute may
    /// independently be absent without failing the aggregation.
    #[instrument(skip(self))]
    pub async fn aggregate_user(&self, id: u64) -> RobloxResult<UserProfileBundle> {
        let (profile, headshot, friends, followers, following, presence, groups, badges, extended) =
            tokio::join!(
                self.fetch_profile(id),
                self.fetch_headshot(id, HeadshotSize::Large),
                self.fetch_friends_count(id),
                self.fetch_followers_count(id),
                self.fetch_followings_count(id),
                self.fetch_presence(id),
                self.fetch_group_count(id),
                self.fetch_badges(id),
                self.fetch_extended_profile(id),
            );

        let profile = match profile {
            AttributeResult::Present(record) => record,
            AttributeResult::Absent => {
                warn!(id, "Profile fetch failed, aggregation cannot proceed");
                return Err(RobloxError::new(RobloxErrorKind::ProfileUnavailable(id)));
            }
        };

        let mut bundle = UserProfileBundle::new(id);
        bundle.username = AttributeResult::Present(profile.name().clone());
        bundle.display_name = AttributeResult::from_option(
            profile
                .display_name()
                .clone()
                .or_else(|| Some(profile.name().clone())),
        );
        bundle.verified = AttributeResult::Present(*profile.has_verified_badge());
        bundle.created = parse_created(&profile);
        bundle.headshot_url = headshot;
        bundle.friends = friends;
        bundle.followers = followers;
        bundle.following = following;
        bundle.presence = presence;
        bundle.group_count = groups;
        bundle.badges = badges;

        // Blurb preference order matches the original: extended-profile blurb,
        // then the basic profile description.
        let description = profile.description().clone().filter(|d| !d.is_empty());
        match extended {
            AttributeResult::Present(ext) => {
                bundle.inventory_private = AttributeResult::from_option(*ext.is_inventory_private());
                bundle.blurb = AttributeResult::from_option(
                    ext.blurb()
                        .clone()
                        .filter(|b| !b.is_empty())
                        .or(description),
                );
            }
            AttributeResult::Absent => {
                bundle.blurb = AttributeResult::from_option(description);
            }
        }

        debug!(id, "Aggregated user bundle");
        Ok(bundle)
    }
}

fn parse_created(profile: &UserRecord) -> AttributeResult<DateTime<Utc>> {
    AttributeResult::from_option(profile.created().as_deref().and_then(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| {
                warn!(raw, error = %e, "Unparsable account creation timestamp");
                e
            })
            .ok()
    }))
}
