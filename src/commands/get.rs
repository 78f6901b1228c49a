//! Get command - print one secret as JSON

use crate::output;
use crate::store::{SecretStore, path};
use crate::{KvfindError, Result};
use std::io::Write;

/// Execute the get command
///
/// # Errors
///
/// Returns `KvfindError::InvalidInput` for a directory path, or the store
/// error if the secret cannot be read.
pub fn execute<S: SecretStore, W: Write>(store: &S, mount: &str, secret: &str, out: &mut W) -> Result<()> {
    let leaf = path::leaf(secret);
    if path::is_container(secret.trim()) || path::is_container(&leaf) {
        return Err(KvfindError::InvalidInput(format!(
            "'{secret}' is a directory; use 'kvfind tree {secret}' to list it"
        )));
    }

    let secret = store.get(mount, &leaf)?;
    output::write_secret(out, &secret)
}
