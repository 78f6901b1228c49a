//! Interactive command - fuzzy finder over the whole mount

use crate::config::Settings;
use crate::output;
use crate::store::SecretStore;
use crate::ui::Finder;
use crate::Result;
use std::io::Write;
use std::sync::Arc;

/// Execute the interactive command
///
/// Prints the confirmed secret as JSON once the terminal is restored;
/// prints nothing on cancel.
///
/// # Errors
///
/// Returns `KvfindError` if the terminal fails or the output cannot be
/// written.
pub fn execute<S: SecretStore, W: Write>(store: Arc<S>, settings: &Settings, out: &mut W) -> Result<()> {
    let finder = Finder::new(settings.max_in_flight, settings.scroll_margin);

    match finder.run(store, &settings.mount)? {
        Some(secret) => output::write_secret(out, &secret),
        None => {
            log::debug!("finder cancelled");
            Ok(())
        }
    }
}
