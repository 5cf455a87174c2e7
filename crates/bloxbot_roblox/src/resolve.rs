//! Identity resolution: user-supplied strings to canonical numeric ids.

use crate::RobloxClient;
use crate::json_models::{UsernameLookupRequest, UsernameLookupResponse};
use bloxbot_error::{RobloxError, RobloxErrorKind, RobloxResult};
use tracing::{debug, instrument};

impl RobloxClient {
    /// Resolve a username-or-id string to a canonical numeric user id.
    ///
    /// All-digit input parses locally without a network call; numeric-looking
    /// usernames are never looked up by name. Anything else goes through the
    /// batch name lookup with exactly one name, case preserved. A network
    /// error, non-2xx status, or empty result list all resolve to
    /// [`RobloxErrorKind::UserNotFound`]; there is no retry.
    #[instrument(skip(self))]
    pub async fn resolve_user(&self, input: &str) -> RobloxResult<u64> {
        let not_found = || RobloxError::new(RobloxErrorKind::UserNotFound(input.to_string()));

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            debug!(input, "Input is all digits, parsing as user id");
            return input.parse::<u64>().map_err(|_| not_found());
        }

        let url = format!("{}/v1/usernames/users", self.endpoints().users);
        let request = UsernameLookupRequest::new(vec![input.to_string()]);
        let response: Option<UsernameLookupResponse> = self.post_json(&url, &request).await;

        let id = response
            .and_then(|r| r.data().first().map(|m| *m.id()))
            .ok_or_else(not_found)?;
        debug!(input, id, "Resolved username to user id");
        Ok(id)
    }
}
