//! Top-level error wrapper types.

use crate::{ConfigError, DiscordError, RobloxError};

/// The foundation error enum for the bloxbot workspace.
///
/// # Examples
///
/// ```
/// use bloxbot_error::{BloxbotError, ConfigError};
///
/// let config_err = ConfigError::new("DISCORD_TOKEN is not set");
/// let err: BloxbotError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BloxbotErrorKind {
    /// Roblox API error
    #[from(RobloxError)]
    Roblox(RobloxError),
    /// Discord integration error
    #[from(DiscordError)]
    Discord(DiscordError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Bloxbot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use bloxbot_error::{BloxbotResult, ConfigError};
///
/// fn might_fail() -> BloxbotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Bloxbot Error: {}", _0)]
pub struct BloxbotError(Box<BloxbotErrorKind>);

impl BloxbotError {
    /// Create a new error from a kind.
    pub fn new(kind: BloxbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BloxbotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BloxbotErrorKind
impl<T> From<T> for BloxbotError
where
    T: Into<BloxbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for bloxbot operations.
pub type BloxbotResult<T> = std::result::Result<T, BloxbotError>;
