//! In-memory caching for remote profile lookups

use fitquest_core::RemoteProfile;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cached item with expiration
struct CacheEntry<T> {
    value: T,
    inserted_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// Thread-safe cache for remote profiles with TTL and max-entry bounds
///
/// Keeps repeated home-screen refreshes from hammering the profile store
/// while the player bounces between screens.
pub struct ProfileCache {
    profiles: RwLock<HashMap<String, CacheEntry<RemoteProfile>>>,
    default_ttl: Duration,
    max_entries: usize,
}

impl ProfileCache {
    /// Create a new cache with the given TTL and max entry count
    pub fn with_capacity(default_ttl: Duration, max_entries: usize) -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            default_ttl,
            max_entries,
        }
    }

    pub fn new(default_ttl: Duration) -> Self {
        Self::with_capacity(default_ttl, 64)
    }

    /// Get a profile from cache if not expired
    pub fn get(&self, actor_id: &str) -> Option<RemoteProfile> {
        let cache = self.profiles.read().ok()?;
        let entry = cache.get(actor_id)?;

        if entry.is_expired() {
            None
        } else {
            Some(entry.value.clone())
        }
    }

    /// Insert or update a profile in cache.
    /// Evicts expired entries if at capacity, then the oldest entry.
    pub fn insert(&self, actor_id: &str, profile: RemoteProfile) {
        if let Ok(mut cache) = self.profiles.write() {
            if cache.len() >= self.max_entries {
                cache.retain(|_, entry| !entry.is_expired());
            }

            if cache.len() >= self.max_entries {
                if let Some(oldest_key) = cache
                    .iter()
                    .min_by_key(|(_, e)| e.inserted_at)
                    .map(|(k, _)| k.clone())
                {
                    cache.remove(&oldest_key);
                }
            }

            cache.insert(
                actor_id.to_string(),
                CacheEntry {
                    value: profile,
                    inserted_at: Instant::now(),
                    ttl: self.default_ttl,
                },
            );
        }
    }

    /// Remove a profile from cache (e.g., after a local mutation makes it stale)
    pub fn invalidate(&self, actor_id: &str) {
        if let Ok(mut cache) = self.profiles.write() {
            cache.remove(actor_id);
        }
    }

    /// Clear all expired entries
    pub fn cleanup(&self) {
        if let Ok(mut cache) = self.profiles.write() {
            cache.retain(|_, entry| !entry.is_expired());
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        // Profiles change slowly; a minute of staleness is acceptable
        Self::with_capacity(Duration::from_secs(60), 64)
    }
}
