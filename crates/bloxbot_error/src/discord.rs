//! Discord-specific error types.
//!
//! Covers Serenity client construction, gateway lifecycle, slash-command
//! registration, and interaction handling failures.

use derive_getters::Getters;

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Connection to the Discord gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Slash-command registration failed.
    #[display("Command registration failed: {_0}")]
    RegistrationFailed(String),

    /// An interaction response or edit could not be delivered.
    #[display("Interaction failed: {_0}")]
    InteractionFailed(String),

    /// A required command option was missing or had the wrong type.
    #[display("Missing or invalid option '{option}' for command '{command}'")]
    MissingOption {
        /// Command name.
        command: String,
        /// Option name.
        option: String,
    },
}

/// Discord error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    kind: DiscordErrorKind,
    line: u32,
    file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;
