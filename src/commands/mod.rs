//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a secret store, writing results to
//! the given output.

pub mod get;
pub mod interactive;
pub mod mounts;
pub mod tree;

// Re-export execute functions for convenience
pub use get::execute as get;
pub use interactive::execute as interactive;
pub use mounts::execute as mounts;
pub use tree::execute as tree;
