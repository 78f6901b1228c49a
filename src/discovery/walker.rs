//! Concurrent recursive discovery of leaf paths
//!
//! The store only lists one directory level at a time, so finding every
//! secret under a mount means fanning out one task per container and
//! collecting leaves as they turn up.
//!
//! ```text
//!                 discover("/")
//!                      │
//!          ┌───────────┼────────────┐
//!          ▼           ▼            ▼
//!       list /bar/   /foo      list /enterprise/ ...
//!          │           │            │
//!          ▼           ▼            ▼
//!   ┌────────────────────────────────────────┐
//!   │     result channel (leaf paths)        │──▶ caller drains
//!   └────────────────────────────────────────┘
//! ```
//!
//! Tasks run on a dedicated rayon pool sized by `max_in_flight`, which also
//! caps the number of concurrent `list` requests. Each container waits for
//! its children inside a `rayon::scope` before it completes; the channel
//! closes once the root scope has joined.

use crate::store::{Entry, SecretStore, StoreError, path};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;
use thiserror::Error;

/// Default cap on concurrent `list` calls
pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;

/// Errors building a walker
#[derive(Debug, Error)]
pub enum WalkerError {
    /// The worker pool could not be created
    #[error("Failed to build discovery worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// A node waiting to be visited
#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    path: String,
    is_container: bool,
}

/// Walks a mount and returns every leaf path beneath a root
pub struct TreeWalker<S: SecretStore> {
    store: Arc<S>,
    pool: ThreadPool,
}

impl<S: SecretStore> TreeWalker<S> {
    /// Create a walker that keeps at most `max_in_flight` listings running
    ///
    /// # Errors
    ///
    /// Returns `WalkerError::PoolBuild` if the worker threads cannot be
    /// spawned.
    pub fn new(store: Arc<S>, max_in_flight: usize) -> Result<Self, WalkerError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_in_flight.max(1))
            .thread_name(|i| format!("kvfind-walk-{i}"))
            .build()?;
        Ok(Self { store, pool })
    }

    /// Number of worker threads
    #[must_use]
    pub fn max_in_flight(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Discover every leaf path under `root` in `mount`
    ///
    /// Blocks until the whole subtree has been enumerated or every branch
    /// has failed. The result has no defined order. Branches that cannot
    /// be listed contribute nothing; they are logged, never returned.
    #[must_use]
    pub fn discover(&self, mount: &str, root: &str) -> Vec<String> {
        let root = Node {
            path: root.to_string(),
            is_container: path::is_container(root),
        };
        self.collect(|tx| self.visit(mount, root, tx))
    }

    /// Like [`discover`](Self::discover), but fails if `root` itself
    /// cannot be listed
    ///
    /// # Errors
    ///
    /// Returns the store error from listing `root`. Failures further down
    /// are handled as in `discover`.
    pub fn try_discover(&self, mount: &str, root: &str) -> Result<Vec<String>, StoreError> {
        if !path::is_container(root) {
            return Ok(vec![root.to_string()]);
        }
        let children = self.store.list(mount, root)?;
        Ok(self.collect(|tx| self.visit_children(mount, root, children, tx)))
    }

    /// Run `start` on the pool and drain everything it sends
    fn collect<F>(&self, start: F) -> Vec<String>
    where
        F: FnOnce(&Sender<String>) + Send,
    {
        let (tx, rx) = mpsc::channel::<String>();

        thread::scope(|scope| {
            scope.spawn(move || {
                self.pool.install(|| start(&tx));
                // `tx` drops here, closing the channel for the drain below
            });
            rx.into_iter().collect()
        })
    }

    fn visit(&self, mount: &str, node: Node, tx: &Sender<String>) {
        if !node.is_container {
            if tx.send(node.path).is_err() {
                log::warn!("discovery result receiver dropped");
            }
            return;
        }

        let children = match self.store.list(mount, &node.path) {
            Ok(entries) => entries,
            Err(StoreError::AccessDenied { path: denied }) => {
                log::info!("Forbidden to list directory {denied} in mount {mount}");
                return;
            }
            Err(e) => {
                log::error!("Failed to list directory {} in mount {mount}: {e}", node.path);
                return;
            }
        };

        self.visit_children(mount, &node.path, children, tx);
    }

    /// Spawn one task per child and wait for all of them
    fn visit_children(&self, mount: &str, parent: &str, children: Vec<Entry>, tx: &Sender<String>) {
        rayon::scope(|scope| {
            for entry in children {
                let child = Node {
                    path: path::join(parent, &entry.name),
                    is_container: entry.is_container,
                };
                let tx = tx.clone();
                scope.spawn(move |_| self.visit(mount, child, &tx));
            }
        });
    }
}
