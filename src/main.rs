//! kvfind CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse every secret in the mount interactively (default command)
//! kvfind
//! kvfind -m team interactive
//!
//! # Print all secret paths under a directory
//! kvfind tree /apps
//!
//! # Print one secret as JSON
//! kvfind get /apps/db
//!
//! # List the key/value mounts
//! kvfind mounts
//! ```
//!
//! # Configuration
//!
//! `VAULT_ADDR`, `VAULT_TOKEN` and `VAULT_MOUNT` are read from the
//! environment, tuning keys from `~/.config/kvfind/config.toml` or
//! `KVFIND_*` variables.

use env_logger::{Builder, Env, Target};
use kvfind::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
    output,
    store::VaultClient,
};
use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

/// Route `log` records to stderr or the configured log file
///
/// The interactive finder owns the terminal, so without a log file nothing
/// is installed and records are dropped.
fn init_logging(settings: &Settings, verbose: bool, interactive: bool) -> kvfind::Result<()> {
    let target = match &settings.log_file {
        Some(path) => Target::Pipe(Box::new(File::create(path)?)),
        None if interactive => return Ok(()),
        None => Target::Stderr,
    };

    let level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level))
        .target(target)
        .init();
    Ok(())
}

fn run(cli: &Cli) -> kvfind::Result<()> {
    let settings = Settings::load(&cli.overrides())?;
    let command = cli.get_command();

    init_logging(&settings, cli.verbose, command == Commands::Interactive)?;
    log::debug!("using {} mount {}", settings.addr, settings.mount);

    let store = Arc::new(VaultClient::new(
        settings.addr.clone(),
        settings.token.clone(),
        settings.request_timeout,
    ));
    let mut stdout = io::stdout().lock();

    match &command {
        Commands::Interactive => commands::interactive(store, &settings, &mut stdout),
        Commands::Tree { path } => commands::tree(store, &settings.mount, path, settings.max_in_flight, &mut stdout),
        Commands::Get { path } => commands::get(store.as_ref(), &settings.mount, path, &mut stdout),
        Commands::Mounts => commands::mounts(store.as_ref(), &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::error_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
