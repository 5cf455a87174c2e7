//! Pure domain types and rendering logic for bloxbot.
//!
//! This crate has no I/O. It defines the tagged attribute outcome type, the
//! merged user bundle produced by the aggregation fan-out, the presence
//! enumeration, the embed renderer, and the Robux tax calculator. Everything
//! here is a deterministic function of its inputs, so the whole user-info
//! pipeline can be exercised without a Discord connection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attribute;
mod bundle;
mod embed;
mod presence;
pub mod tax;

pub use attribute::AttributeResult;
pub use bundle::UserProfileBundle;
pub use embed::{EmbedField, RenderedEmbed, RequesterIdentity, render_user_embed};
pub use presence::Presence;
