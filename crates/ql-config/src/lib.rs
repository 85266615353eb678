//! # ql-config
//!
//! Runtime settings, read from `QUILL_`-prefixed environment variables
//! (optionally via a `.env` file). Everything has a default.

use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "QUILL";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// What happened to `.env`. Returned rather than logged, because the
/// logger itself is configured from the variables it may define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing,
    Unreadable(String),
}

impl EnvFile {
    fn from_result(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => EnvFile::Loaded(path),
            Err(e) if e.not_found() => EnvFile::Missing,
            Err(e) => EnvFile::Unreadable(e.to_string()),
        }
    }

    /// Reports the outcome through `log`; call once a logger is installed.
    pub fn log(&self) {
        match self {
            EnvFile::Loaded(path) => log::debug!("loaded environment from {}", path.display()),
            EnvFile::Missing => log::debug!("no .env file found"),
            EnvFile::Unreadable(e) => log::warn!("ignoring unreadable .env file: {e}"),
        }
    }
}

/// Loads `.env` into the process environment, if there is one.
pub fn load_env_file() -> EnvFile {
    EnvFile::from_result(dotenvy::dotenv())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Actix worker threads. `None` lets actix pick one per core.
    pub workers: Option<usize>,
    /// Load the sample articles and discussion on startup.
    pub seed_data: bool,
    /// Body of `GET /api/ping`.
    pub ping_message: String,
    /// CORS preflight cache lifetime, in seconds.
    pub cors_max_age: usize,
}

impl Settings {
    /// Reads the process environment. Call `load_env_file` first so that
    /// `.env` values are part of it.
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("seed_data", true)?
            .set_default("ping_message", "ping")?
            .set_default("cors_max_age", 3600)?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.host.trim().is_empty() {
            return Err(SettingsError::Invalid("host must not be empty".to_string()));
        }
        if self.workers == Some(0) {
            return Err(SettingsError::Invalid("workers must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
