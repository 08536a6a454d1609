//! Storage configuration loaded from the environment.

use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "./db/bytebank.db";
pub const DEFAULT_POOL_SIZE: u32 = 8;
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub db_path: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_MS),
        }
    }
}

impl StorageConfig {
    /// Reads `BYTEBANK_DB_PATH`, `BYTEBANK_DB_POOL_SIZE` and
    /// `BYTEBANK_DB_CONNECTION_TIMEOUT_MS`, after loading a `.env` file if
    /// one exists. Unparseable numbers fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("BYTEBANK_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let pool_size: u32 = lookup("BYTEBANK_DB_POOL_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_POOL_SIZE);
        let timeout_ms: u64 = lookup("BYTEBANK_DB_CONNECTION_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_MS);
        Self {
            db_path,
            pool_size,
            connection_timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Default settings pointing at the given database file.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }
}
