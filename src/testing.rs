//! Testing utilities for kvfind
//!
//! This module provides an in-memory [`FakeStore`] that implements
//! [`SecretStore`] from a flat list of leaf paths and counts every call,
//! so tests can assert on discovery results and cache behaviour without a
//! server.
//!
//! Only available when compiled with `cfg(test)`.

use crate::store::{Entry, Result, Secret, SecretStore, StoreError, path};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

/// Secrets and failure injections for one mount
#[derive(Debug, Default)]
struct MountFixture {
    secrets: BTreeMap<String, Secret>,
    denied: BTreeSet<String>,
    failing_lists: BTreeSet<String>,
    failing_gets: BTreeSet<String>,
}

/// In-memory secret store with call counting
///
/// Builder methods apply to the most recently added mount.
///
/// # Examples
/// ```ignore
/// let store = FakeStore::new("secret")
///     .with_secret("/bar/baz", &[("c", "d")])
///     .with_denied("/secret-ops/");
/// ```
#[derive(Debug)]
pub struct FakeStore {
    mounts: BTreeMap<String, MountFixture>,
    current: String,
    list_calls: Mutex<HashMap<String, usize>>,
    get_calls: Mutex<HashMap<String, usize>>,
}

impl FakeStore {
    /// Create a store with a single empty mount
    #[must_use]
    pub fn new(mount: &str) -> Self {
        let mut mounts = BTreeMap::new();
        mounts.insert(mount.to_string(), MountFixture::default());
        Self {
            mounts,
            current: mount.to_string(),
            list_calls: Mutex::new(HashMap::new()),
            get_calls: Mutex::new(HashMap::new()),
        }
    }

    fn current_mut(&mut self) -> &mut MountFixture {
        self.mounts.entry(self.current.clone()).or_default()
    }

    /// Add another mount; following builder calls apply to it
    #[must_use]
    pub fn with_mount(mut self, mount: &str) -> Self {
        self.current = mount.to_string();
        self.current_mut();
        self
    }

    /// Add a leaf secret with string data
    #[must_use]
    pub fn with_secret(mut self, leaf: &str, data: &[(&str, &str)]) -> Self {
        let data: Map<String, Value> = data
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect();
        let mut metadata = Map::new();
        metadata.insert("version".to_string(), Value::from(1));
        self.current_mut()
            .secrets
            .insert(leaf.to_string(), Secret::new(Some(data), Some(metadata)));
        self
    }

    /// Add many leaves with empty data
    #[must_use]
    pub fn with_leaves<I, P>(mut self, leaves: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        for leaf in leaves {
            self = self.with_secret(leaf.as_ref(), &[]);
        }
        self
    }

    /// Make listing a container answer `AccessDenied`
    #[must_use]
    pub fn with_denied(mut self, container: &str) -> Self {
        self.current_mut().denied.insert(container.to_string());
        self
    }

    /// Make listing a container fail with `RequestFailed`
    #[must_use]
    pub fn with_failing_list(mut self, container: &str) -> Self {
        self.current_mut().failing_lists.insert(container.to_string());
        self
    }

    /// Make reading a leaf fail with `RequestFailed`
    #[must_use]
    pub fn with_failing_get(mut self, leaf: &str) -> Self {
        self.current_mut().failing_gets.insert(leaf.to_string());
        self
    }

    /// Number of `get` calls made for a leaf path, across mounts
    #[must_use]
    pub fn get_calls(&self, leaf: &str) -> usize {
        self.get_calls
            .lock()
            .map(|calls| calls.get(leaf).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Number of `list` calls made for a container path, across mounts
    #[must_use]
    pub fn list_calls(&self, container: &str) -> usize {
        self.list_calls
            .lock()
            .map(|calls| calls.get(container).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn fixture(&self, mount: &str) -> Result<&MountFixture> {
        self.mounts
            .get(mount)
            .ok_or_else(|| StoreError::request(format!("fake://{mount}"), "404 no such mount"))
    }

    fn count(calls: &Mutex<HashMap<String, usize>>, key: &str) {
        if let Ok(mut calls) = calls.lock() {
            *calls.entry(key.to_string()).or_insert(0) += 1;
        }
    }
}

impl SecretStore for FakeStore {
    fn list(&self, mount: &str, container: &str) -> Result<Vec<Entry>> {
        Self::count(&self.list_calls, container);
        let fixture = self.fixture(mount)?;

        if fixture.denied.contains(container) {
            return Err(StoreError::AccessDenied {
                path: container.to_string(),
            });
        }
        if fixture.failing_lists.contains(container) {
            return Err(StoreError::request(
                format!("fake://{mount}{container}"),
                "500 Internal Server Error",
            ));
        }

        let children: BTreeSet<String> = fixture
            .secrets
            .keys()
            .filter_map(|leaf| leaf.strip_prefix(container))
            .filter(|rest| !rest.is_empty())
            .map(|rest| match rest.split_once(path::SEPARATOR) {
                Some((dir, _)) => format!("{dir}/"),
                None => rest.to_string(),
            })
            .collect();

        Ok(children.into_iter().map(Entry::from_key).collect())
    }

    fn get(&self, mount: &str, leaf: &str) -> Result<Secret> {
        Self::count(&self.get_calls, leaf);
        let fixture = self.fixture(mount)?;
        let url = format!("fake://{mount}{leaf}");

        if fixture.failing_gets.contains(leaf) {
            return Err(StoreError::request(url, "500 Internal Server Error"));
        }

        fixture
            .secrets
            .get(leaf)
            .cloned()
            .ok_or_else(|| StoreError::request(url, "404 Not Found"))
    }

    fn list_mounts(&self) -> Result<Vec<String>> {
        Ok(self.mounts.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_store_lists_one_level() {
        let store = FakeStore::new("secret").with_leaves(["/foo", "/bar/baz", "/bar/qux/quux"]);

        let root = store.list("secret", "/").unwrap();
        assert_eq!(root, vec![Entry::from_key("bar/"), Entry::from_key("foo")]);

        let bar = store.list("secret", "/bar/").unwrap();
        assert_eq!(bar, vec![Entry::from_key("baz"), Entry::from_key("qux/")]);
        assert_eq!(store.list_calls("/bar/"), 1);
    }

    #[test]
    fn test_fake_store_counts_gets() {
        let store = FakeStore::new("secret").with_secret("/foo", &[("a", "b")]);
        let secret = store.get("secret", "/foo").unwrap();
        assert_eq!(secret.data.unwrap()["a"], "b");
        assert_eq!(store.get_calls("/foo"), 1);
        assert!(store.get("secret", "/missing").is_err());
    }

    #[test]
    fn test_fake_store_mounts() {
        let store = FakeStore::new("secret").with_mount("team");
        assert_eq!(store.list_mounts().unwrap(), vec!["secret", "team"]);
    }
}
