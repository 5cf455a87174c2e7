//! Roblox public API layer for bloxbot.
//!
//! This crate owns every remote lookup the bot performs:
//!
//! - **resolve**: username-or-id strings to a canonical numeric user id
//! - **fetch**: one independent lookup per user attribute, each settling as
//!   `Present` or `Absent` rather than erroring
//! - **aggregate**: the concurrent fan-out that merges all fetchers into a
//!   [`UserProfileBundle`](bloxbot_core::UserProfileBundle)
//!
//! Every call is a single attempt against the public endpoints with the
//! transport's default timeout; there is no retry, rate limiting, or caching.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod client;
mod endpoints;
mod fetch;
mod json_models;
mod resolve;

pub use client::RobloxClient;
pub use endpoints::RobloxEndpoints;
pub use fetch::HeadshotSize;
pub use json_models::{
    BadgeRecord, BadgesResponse, CountResponse, ExtendedProfileResponse, GroupMembership,
    GroupRolesResponse, GroupSummary, PresenceRecord, PresenceRequest, PresenceResponse,
    ThumbnailRecord, ThumbnailResponse, UserMatch, UserRecord, UsernameLookupRequest,
    UsernameLookupResponse,
};
