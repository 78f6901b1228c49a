//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for kvfind using the `clap` crate.
//!
//! # Commands
//!
//! - **interactive**: Fuzzy finder over every secret in the mount (default)
//! - **tree**: Print every secret path under a directory
//! - **get**: Print one secret as JSON
//! - **mounts**: Print the key/value mounts the token can see
//!
//! # Examples
//!
//! ```
//! use kvfind::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["kvfind", "--mount", "team", "tree", "/apps"]);
//! assert!(matches!(cli.get_command(), Commands::Tree { .. }));
//! ```

use crate::config::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "kvfind")]
#[command(about = "Fuzzy-find secrets in a Vault KV mount", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// KV mount to use (overrides VAULT_MOUNT)
    #[arg(short = 'm', long = "mount", global = true, value_name = "MOUNT")]
    pub mount: Option<String>,

    /// Write diagnostics to this file
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive fuzzy finder (default)
    #[command(visible_alias = "i")]
    Interactive,

    /// Print every secret path under a directory, sorted
    #[command(visible_alias = "t")]
    Tree {
        /// Directory to walk
        #[arg(value_name = "PATH", default_value = "/")]
        path: String,
    },

    /// Print a secret as JSON
    #[command(visible_alias = "g")]
    Get {
        /// Secret path, e.g. /bar/baz
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// List the key/value mounts
    Mounts,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Interactive if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }

    /// Flags that take precedence over the config file and environment
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mount: self.mount.clone(),
            log_file: self.log_file.clone(),
        }
    }
}
