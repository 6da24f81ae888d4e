//! Runtime configuration read from environment variables.
//!
//! - `HOST` bind address, default `0.0.0.0`
//! - `PORT` listen port, default `8080`
//! - `SHUTDOWN_TIMEOUT_SECS` grace period for in-flight requests, default `5`
//! - `EVENTS_SEED` one of `startup`, `every-list`, `off` (any case), default `startup`
//!
//! Empty values count as unset.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use thiserror::Error;

use crate::modules::events::core::seed::{SeedMode, UnknownSeedMode};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub shutdown_timeout: Duration,
    pub seed_mode: SeedMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            seed_mode: SeedMode::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: `{value}`")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    SeedMode(#[from] UnknownSeedMode),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = read("HOST") {
            config.host = parse("HOST", &host)?;
        }
        if let Some(port) = read("PORT") {
            config.port = parse("PORT", &port)?;
        }
        if let Some(secs) = read("SHUTDOWN_TIMEOUT_SECS") {
            config.shutdown_timeout = Duration::from_secs(parse("SHUTDOWN_TIMEOUT_SECS", &secs)?);
        }
        if let Some(mode) = read("EVENTS_SEED") {
            config.seed_mode = mode.parse()?;
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
