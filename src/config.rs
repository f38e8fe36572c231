// config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "LISTINGS_ADDR";
pub const WORKERS_VAR: &str = "LISTINGS_MAX_WORKERS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got {value}")]
    InvalidWorkers { var: &'static str, value: String },
}

/// Where and how wide the HTTP server runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(WORKERS_VAR) {
            config.max_workers = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidWorkers {
                    var: WORKERS_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}
