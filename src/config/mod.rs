//! Configuration module for kvfind
//!
//! Settings are layered with the `config` crate, later sources winning:
//!
//! 1. `config.toml` in the user's config directory (optional)
//! 2. `VAULT_ADDR`, `VAULT_TOKEN`, `VAULT_MOUNT`
//! 3. `KVFIND_MAX_IN_FLIGHT`, `KVFIND_SCROLL_MARGIN`,
//!    `KVFIND_REQUEST_TIMEOUT_SECS`, `KVFIND_LOG_FILE`
//! 4. command line flags
//!
//! ```toml
//! addr = "https://vault.example.com:8200"
//! mount = "secret"
//! max_in_flight = 32
//! ```

use crate::discovery::DEFAULT_MAX_IN_FLIGHT;
use crate::ui::DEFAULT_SCROLL_MARGIN;
use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default per-request deadline
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A required value was not provided by any source
    #[error("Environment variable {0} must be set")]
    MissingEnv(&'static str),

    /// A source could not be read or a value has the wrong type
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Values as read from the layered sources
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    addr: Option<String>,
    token: Option<String>,
    mount: Option<String>,
    max_in_flight: Option<usize>,
    scroll_margin: Option<usize>,
    request_timeout_secs: Option<u64>,
    log_file: Option<PathBuf>,
}

/// Command line values that take precedence over every other source
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--mount`
    pub mount: Option<String>,
    /// `--log-file`
    pub log_file: Option<PathBuf>,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Server address
    pub addr: String,
    /// Opaque access token, forwarded as-is
    pub token: String,
    /// KV mount to browse
    pub mount: String,
    /// Cap on concurrent directory listings
    pub max_in_flight: usize,
    /// Rows kept between the cursor and the list edge
    pub scroll_margin: usize,
    /// Deadline for each HTTP request
    pub request_timeout: Duration,
    /// Where diagnostics go, if anywhere
    pub log_file: Option<PathBuf>,
}

/// Sources to layer; `None` environments read the process environment
#[derive(Debug, Default)]
struct Sources<'a> {
    file: Option<&'a Path>,
    vault_env: Option<Map<String, String>>,
    tuning_env: Option<Map<String, String>>,
}

impl Settings {
    /// Get the path to the config file
    ///
    /// Returns `None` if the system config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kvfind").join("config.toml"))
    }

    /// Load settings from the config file and the environment
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::MissingEnv` naming the first required value
    /// that is missing, or `SettingsError::Config` if a source is malformed.
    pub fn load(overrides: &Overrides) -> Result<Self, SettingsError> {
        let path = Self::config_path();
        Self::load_from(
            Sources {
                file: path.as_deref(),
                ..Sources::default()
            },
            overrides,
        )
    }

    fn load_from(sources: Sources<'_>, overrides: &Overrides) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(file) = sources.file {
            builder = builder.add_source(File::from(file).format(FileFormat::Toml).required(false));
        }

        let raw: RawSettings = builder
            .add_source(Environment::with_prefix("VAULT").source(sources.vault_env))
            .add_source(
                Environment::with_prefix("KVFIND")
                    .try_parsing(true)
                    .source(sources.tuning_env),
            )
            .build()?
            .try_deserialize()?;

        Self::resolve(raw, overrides)
    }

    fn resolve(raw: RawSettings, overrides: &Overrides) -> Result<Self, SettingsError> {
        let addr = raw.addr.ok_or(SettingsError::MissingEnv("VAULT_ADDR"))?;
        let token = raw.token.ok_or(SettingsError::MissingEnv("VAULT_TOKEN"))?;
        let mount = overrides
            .mount
            .clone()
            .or(raw.mount)
            .ok_or(SettingsError::MissingEnv("VAULT_MOUNT"))?;

        Ok(Self {
            addr,
            token,
            mount,
            max_in_flight: raw.max_in_flight.unwrap_or(DEFAULT_MAX_IN_FLIGHT).max(1),
            scroll_margin: raw.scroll_margin.unwrap_or(DEFAULT_SCROLL_MARGIN),
            request_timeout: Duration::from_secs(
                raw.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
            log_file: overrides.log_file.clone().or(raw.log_file),
        })
    }
}
