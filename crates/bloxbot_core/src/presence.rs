//! Presence state enumeration.

use serde::{Deserialize, Serialize};

/// A user's presence state as reported by the presence batch endpoint.
///
/// The wire format is a small integer (`userPresenceType`); codes beyond the
/// three documented states are preserved rather than discarded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Presence {
    /// Code 0.
    #[display("Offline")]
    Offline,
    /// Code 1.
    #[display("Online")]
    Online,
    /// Code 2.
    #[display("In Game")]
    InGame,
    /// Any other numeric code.
    #[display("Unknown ({_0})")]
    Other(i64),
}

impl Presence {
    /// Map a wire presence code to a presence state.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Offline,
            1 => Self::Online,
            2 => Self::InGame,
            other => Self::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_named_states() {
        assert_eq!(Presence::from_code(0), Presence::Offline);
        assert_eq!(Presence::from_code(1), Presence::Online);
        assert_eq!(Presence::from_code(2), Presence::InGame);
    }

    #[test]
    fn unknown_codes_are_preserved() {
        assert_eq!(Presence::from_code(4), Presence::Other(4));
        assert_eq!(Presence::from_code(4).to_string(), "Unknown (4)");
    }

    #[test]
    fn display_strings() {
        assert_eq!(Presence::Offline.to_string(), "Offline");
        assert_eq!(Presence::InGame.to_string(), "In Game");
    }
}
