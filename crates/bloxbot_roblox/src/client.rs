//! Roblox API client.

use crate::RobloxEndpoints;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the Roblox public APIs.
///
/// Wraps a shared `reqwest::Client` and the per-service base URLs. All
/// lookups are single-attempt; transport failures, non-2xx statuses, and
/// unparsable bodies are logged and surfaced as `None` from the raw helpers,
/// which the fetchers turn into attribute absence.
#[derive(Debug, Clone)]
pub struct RobloxClient {
    http: Client,
    endpoints: RobloxEndpoints,
}

impl Default for RobloxClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RobloxClient {
    /// Create a client against the production Roblox hosts.
    pub fn new() -> Self {
        debug!("Creating Roblox client for production endpoints");
        Self {
            http: Client::new(),
            endpoints: RobloxEndpoints::default(),
        }
    }

    /// Create a client against custom base URLs.
    pub fn with_endpoints(endpoints: RobloxEndpoints) -> Self {
        debug!(?endpoints, "Creating Roblox client with custom endpoints");
        Self {
            http: Client::new(),
            endpoints,
        }
    }

    /// The configured base URLs.
    pub fn endpoints(&self) -> &RobloxEndpoints {
        &self.endpoints
    }

    /// GET a JSON payload, collapsing every failure mode to `None`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<T>().await {
                    Ok(payload) => Some(payload),
                    Err(e) => {
                        warn!(url, error = %e, "Failed to parse response body");
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(url, status = %response.status(), "Upstream returned non-success status");
                None
            }
            Err(e) => {
                warn!(url, error = %e, "Request failed");
                None
            }
        }
    }

    /// POST a JSON body and parse a JSON payload, collapsing every failure
    /// mode to `None`.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Option<T> {
        match self.http.post(url).json(body).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<T>().await {
                    Ok(payload) => Some(payload),
                    Err(e) => {
                        warn!(url, error = %e, "Failed to parse response body");
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(url, status = %response.status(), "Upstream returned non-success status");
                None
            }
            Err(e) => {
                warn!(url, error = %e, "Request failed");
                None
            }
        }
    }
}
