//! Secret store abstraction
//!
//! The rest of the crate only talks to a hierarchical key/value store
//! through the [`SecretStore`] trait: list one directory level, read one
//! secret, enumerate mounts. [`VaultClient`] is the HTTP implementation,
//! [`SecretCache`] memoizes reads for the lifetime of the process.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │  TreeWalker  │   │  ViewModel   │
//! └──────┬───────┘   └──────┬───────┘
//!        │ list             │ get
//!        │           ┌──────▼───────┐
//!        │           │ SecretCache  │
//!        │           └──────┬───────┘
//!        ▼                  ▼
//! ┌─────────────────────────────────┐
//! │      SecretStore (trait)        │
//! │  VaultClient / test fakes       │
//! └─────────────────────────────────┘
//! ```

pub mod cache;
pub mod error;
pub mod path;
pub mod vault;

pub use cache::SecretCache;
pub use error::StoreError;
pub use vault::VaultClient;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// A single node returned by a directory listing
///
/// `name` is relative to the listed directory and keeps the store's
/// trailing `/` for containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Name relative to the parent directory
    pub name: String,
    /// Whether the entry groups further entries
    pub is_container: bool,
}

impl Entry {
    /// Build an entry from a raw listing key
    #[must_use]
    pub fn from_key(key: impl Into<String>) -> Self {
        let name = key.into();
        let is_container = path::is_container(&name);
        Self { name, is_container }
    }
}

/// A secret as returned by the store
///
/// `data` and `metadata` stay optional: a response where both are absent
/// is how a missing secret is told apart from a deleted one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Secret {
    /// Secret key/value pairs
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    /// Version metadata
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Address of the secret in the store's web UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Secret {
    /// Create a secret from its two sections
    #[must_use]
    pub const fn new(data: Option<Map<String, Value>>, metadata: Option<Map<String, Value>>) -> Self {
        Self {
            data,
            metadata,
            url: None,
        }
    }

    /// Attach the web UI address
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether neither `data` nor `metadata` is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_none() && self.metadata.is_none()
    }
}

/// Read-only access to a hierarchical secret store
///
/// Implementations must be shareable across the tree walker's worker
/// threads.
pub trait SecretStore: Send + Sync {
    /// List the direct children of a container path
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccessDenied` when the credential may not list
    /// the path, `RequestFailed` or `DecodeFailed` otherwise.
    fn list(&self, mount: &str, path: &str) -> Result<Vec<Entry>>;

    /// Read the secret stored at a leaf path
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RequestFailed` or `DecodeFailed`.
    fn get(&self, mount: &str, path: &str) -> Result<Secret>;

    /// Names of the key/value mounts, sorted
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RequestFailed` or `DecodeFailed`.
    fn list_mounts(&self) -> Result<Vec<String>>;
}
