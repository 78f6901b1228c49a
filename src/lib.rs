//! kvfind - fuzzy finder for secrets in a Vault key/value mount
//!
//! This library walks the hierarchical secret namespace concurrently,
//! filters the discovered paths with a subsequence matcher, and shows the
//! selected secret in a terminal UI. Reads are cached for the session.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod output;
pub mod search;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum KvfindError {
    /// Missing or malformed settings
    #[error(transparent)]
    Config(#[from] config::SettingsError),
    /// Secret store request failed
    #[error(transparent)]
    Store(#[from] store::StoreError),
    /// Terminal failure in the interactive finder
    #[error(transparent)]
    Ui(#[from] ui::UiError),
    /// Discovery pool could not start
    #[error(transparent)]
    Walker(#[from] discovery::WalkerError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Output serialization failed
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, KvfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_pass_through() {
        let error = KvfindError::from(store::StoreError::AccessDenied {
            path: "/secret-ops/".to_string(),
        });
        assert!(matches!(error, KvfindError::Store(_)));
        assert!(error.to_string().contains("/secret-ops/"));
    }

    #[test]
    fn test_missing_env_message() {
        let error = KvfindError::from(config::SettingsError::MissingEnv("VAULT_ADDR"));
        assert_eq!(error.to_string(), "Environment variable VAULT_ADDR must be set");
    }
}
