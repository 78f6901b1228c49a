//! Secret store error types
//!
//! Every failure a `SecretStore` can report while listing a directory,
//! reading a secret or enumerating mounts.
//!
//! # Error Types
//!
//! - **`AccessDenied`**: The store refused to list a branch. The tree walker
//!   treats this as an empty branch, not as a failure.
//! - **`RequestFailed`**: Transport errors and unexpected HTTP statuses
//! - **`DecodeFailed`**: The response body was not the JSON we expected
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Secret store errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The credential is not allowed to access the path
    #[error("Access denied: {path}")]
    AccessDenied {
        /// Path that was refused
        path: String,
    },

    /// The request could not be performed or returned an unexpected status
    #[error("Request to {url} failed: {reason}")]
    RequestFailed {
        /// Requested URL
        url: String,
        /// Transport error or HTTP status line
        reason: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode response from {url}: {reason}")]
    DecodeFailed {
        /// Requested URL
        url: String,
        /// Decoder message
        reason: String,
    },
}

impl StoreError {
    /// Create a `RequestFailed` error
    #[must_use]
    pub fn request(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::RequestFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a `DecodeFailed` error
    #[must_use]
    pub fn decode(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::DecodeFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this is an access-denied condition
    #[must_use]
    pub const fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
