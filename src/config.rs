//! Server configuration loaded from the process environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::db::PoolConfig;

/// Errors raised while reading configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
    #[error("DB_MAX_OPEN_CONNECTIONS must be greater than zero")]
    NoConnections,
    #[error("DB_CONNECTION_MAX_LIFETIME_SECS must be greater than zero")]
    NoLifetime,
    #[error("DB_MAX_IDLE_CONNECTIONS ({idle}) exceeds DB_MAX_OPEN_CONNECTIONS ({open})")]
    IdleAboveOpen { idle: u32, open: u32 },
}

/// Settings required to run the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    pub pool: PoolConfig,
}

impl ServerConfig {
    /// Read the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which resolves a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PoolConfig::default();

        let database_url = lookup("DATABASE_URL").unwrap_or("app.db".to_string());
        let address = lookup("ADDRESS").unwrap_or("127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let max_open = parse_or(&lookup, "DB_MAX_OPEN_CONNECTIONS", defaults.max_open)?;
        let max_idle = parse_or(&lookup, "DB_MAX_IDLE_CONNECTIONS", defaults.max_idle)?;
        let lifetime_secs = parse_or(
            &lookup,
            "DB_CONNECTION_MAX_LIFETIME_SECS",
            defaults.max_lifetime.as_secs(),
        )?;

        if max_open == 0 {
            return Err(ConfigError::NoConnections);
        }
        if lifetime_secs == 0 {
            return Err(ConfigError::NoLifetime);
        }
        if max_idle > max_open {
            return Err(ConfigError::IdleAboveOpen {
                idle: max_idle,
                open: max_open,
            });
        }

        Ok(Self {
            database_url,
            address,
            port,
            pool: PoolConfig {
                max_open,
                max_idle,
                max_lifetime: Duration::from_secs(lifetime_secs),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
