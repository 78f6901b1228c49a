//! Secret discovery
//!
//! Enumerates every leaf path under a mount by walking container nodes
//! concurrently. See [`walker`] for the traversal itself.

pub mod walker;

pub use walker::{DEFAULT_MAX_IN_FLIGHT, TreeWalker, WalkerError};
