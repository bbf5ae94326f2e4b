//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the local key-value files (inventory, credits, settings)
    pub data_dir: PathBuf,

    /// Upper bound for a single remote document-store call
    pub remote_timeout_ms: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let remote_timeout_ms = match var("STORE_REMOTE_TIMEOUT_MS") {
            Some(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("STORE_REMOTE_TIMEOUT_MS must be milliseconds, got {raw:?}")
            })?,
            None => DEFAULT_REMOTE_TIMEOUT_MS,
        };

        Ok(Self {
            data_dir: var("VIBEFORGE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            remote_timeout_ms,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "vibeforge=debug".to_string()),
            port,
        })
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}
