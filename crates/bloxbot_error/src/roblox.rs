//! Roblox API error types.
//!
//! Individual attribute lookups never produce these errors; they degrade to
//! absence at the fetcher boundary. Only the two terminal outcomes of the
//! user-info pipeline are represented here: a name that resolves to no user,
//! and an aggregation whose mandatory profile fetch came back empty.

use derive_getters::Getters;

/// Roblox error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum RobloxErrorKind {
    /// The supplied username or id resolved to no Roblox user.
    #[display("Roblox user not found: {_0}")]
    UserNotFound(String),

    /// The mandatory profile fetch failed, so there is nothing to display.
    #[display("Profile unavailable for user {_0}")]
    ProfileUnavailable(u64),
}

/// Roblox error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Roblox Error: {} at line {} in {}", kind, line, file)]
pub struct RobloxError {
    kind: RobloxErrorKind,
    line: u32,
    file: &'static str,
}

impl RobloxError {
    /// Create a new RobloxError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use bloxbot_error::{RobloxError, RobloxErrorKind};
    ///
    /// let err = RobloxError::new(RobloxErrorKind::UserNotFound("builderman".into()));
    /// assert!(format!("{}", err).contains("builderman"));
    /// ```
    #[track_caller]
    pub fn new(kind: RobloxErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Roblox operations.
pub type RobloxResult<T> = Result<T, RobloxError>;
