//! Mounts command - list the key/value mounts

use crate::output;
use crate::store::SecretStore;
use crate::Result;
use std::io::Write;

/// Execute the mounts command
///
/// # Errors
///
/// Returns the store error if the mount table cannot be read.
pub fn execute<S: SecretStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    let mounts = store.list_mounts()?;
    output::write_lines(out, &mounts)?;
    Ok(())
}
