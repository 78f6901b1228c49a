//! Process-lifetime memoization of secret reads
//!
//! Secrets are fetched the first time they are selected and then served
//! from memory. Entries are never evicted or invalidated: the cache has no
//! capacity bound and no TTL.

use super::{Result, Secret, SecretStore};
use moka::sync::Cache;
use std::sync::Arc;

/// Cache key: a secret is only unique within its mount
type CacheKey = (String, String);

/// Read-through cache in front of a [`SecretStore`]
///
/// Backed by a concurrent map, so it can be shared with background
/// fetchers should selection ever move off the event loop.
pub struct SecretCache<S: SecretStore> {
    store: Arc<S>,
    secrets: Cache<CacheKey, Arc<Secret>>,
}

impl<S: SecretStore> SecretCache<S> {
    /// Create an empty cache in front of `store`
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            secrets: Cache::builder().build(),
        }
    }

    /// Return the cached secret, fetching it from the store on a miss
    ///
    /// Failed fetches are not cached, so the next lookup retries.
    ///
    /// # Errors
    ///
    /// Returns the store error when the secret is not cached and the
    /// fetch fails.
    pub fn get_or_fetch(&self, mount: &str, path: &str) -> Result<Arc<Secret>> {
        let key = (mount.to_string(), path.to_string());
        if let Some(secret) = self.secrets.get(&key) {
            log::trace!("cache hit for {mount}:{path}");
            return Ok(secret);
        }

        let secret = Arc::new(self.store.get(mount, path)?);
        self.secrets.insert(key, Arc::clone(&secret));
        Ok(secret)
    }

    /// Whether a secret is already cached
    #[must_use]
    pub fn contains(&self, mount: &str, path: &str) -> bool {
        self.secrets
            .contains_key(&(mount.to_string(), path.to_string()))
    }

    /// The store behind the cache
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }
}
