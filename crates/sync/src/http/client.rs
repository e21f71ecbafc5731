//! HTTP client for the remote profile store
//!
//! The store is a plain REST document service keyed by actor id. Every
//! call has exactly two outcomes: a profile, or an error the caller
//! treats as "no remote data available". The engine keeps working from
//! its local snapshot either way.

use fitquest_core::{Error, RemoteProfile, Result};
use fitquest_persistence::ProfileCache;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};

const USER_AGENT_VALUE: &str = concat!("fitquest/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the profile store
///
/// Optionally uses an in-memory cache for profile data to keep repeated
/// screen refreshes from re-fetching.
pub struct ProfileStoreClient {
    http: Client,
    base_url: String,
    /// Optional shared profile cache (shared across all clients)
    cache: Option<Arc<ProfileCache>>,
}

impl ProfileStoreClient {
    /// Create a new client for the store at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| Error::NetworkError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: None,
        })
    }

    /// Create a new client with a shared profile cache
    pub fn new_with_cache(
        base_url: impl Into<String>,
        cache: Arc<ProfileCache>,
    ) -> Result<Self> {
        let mut client = Self::new(base_url)?;
        client.cache = Some(cache);
        Ok(client)
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn profile_url(&self, actor_id: &str) -> String {
        format!("{}/api/profiles/{}", self.base_url, actor_id)
    }

    /// Fetch the profile document for an actor (cache-aware)
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, actor_id: &str) -> Result<RemoteProfile> {
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(actor_id) {
                debug!("Cache hit for {}", actor_id);
                return Ok(cached);
            }
        }

        let url = self.profile_url(actor_id);
        debug!("Fetching profile from: {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::ProfileNotFound(actor_id.to_string()));
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Profile request failed: {}", e);
            Error::NetworkError(e.to_string())
        })?;

        let profile: RemoteProfile = response.json().await.map_err(|e| {
            error!("Failed to parse profile response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Profile fetched for {}: level {}", actor_id, profile.level);

        if let Some(ref cache) = self.cache {
            cache.insert(actor_id, profile.clone());
        }

        Ok(profile)
    }

    /// Upload the profile document for an actor (last write wins)
    #[instrument(skip(self, profile))]
    pub async fn push_profile(&self, actor_id: &str, profile: &RemoteProfile) -> Result<()> {
        let url = self.profile_url(actor_id);
        debug!("Pushing profile to: {}", url);

        let response = self
            .http
            .put(&url)
            .headers(self.default_headers())
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            error!("Profile push failed: HTTP {} — {}", status, body);
            return Err(Error::NetworkError(format!("HTTP {}: {}", status, body)));
        }

        // The pushed document supersedes whatever we had cached
        if let Some(ref cache) = self.cache {
            cache.insert(actor_id, profile.clone());
        }

        debug!("Profile pushed for {}", actor_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ProfileStoreClient::new("https://store.example.com/").unwrap();
        assert_eq!(
            client.profile_url("actor-1"),
            "https://store.example.com/api/profiles/actor-1"
        );
    }
}
