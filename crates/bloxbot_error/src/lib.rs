//! Error types for the bloxbot workspace.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use bloxbot_error::{BloxbotResult, ConfigError};
//!
//! fn load_token() -> BloxbotResult<String> {
//!     Err(ConfigError::new("DISCORD_TOKEN is not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got token of length {}", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod discord;
mod error;
mod roblox;

pub use config::ConfigError;
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult};
pub use error::{BloxbotError, BloxbotErrorKind, BloxbotResult};
pub use roblox::{RobloxError, RobloxErrorKind, RobloxResult};
