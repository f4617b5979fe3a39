//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CHAT_PASSWORD` - Password that unlocks the chat page
//!
//! ## Optional
//! - `SALES_DESK_ADDR` - Bind address (default: 127.0.0.1:3000)
//! - `SALES_DESK_WORKERS` - Worker threads (default: 8)
//! - `SALES_DESK_DB` - SQLite file (default: sales_desk.sqlite3)
//! - `SALES_DESK_SCHEMA` - Schema applied at startup (default: sql/schema.sql)
//! - `GEMINI_API_KEY` - Key for the chat assistant; chat replies fail without it
//! - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash)

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_DB_PATH: &str = "sales_desk.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub workers: usize,
    pub db_path: String,
    pub schema_path: String,
    pub chat_password: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("addr", &self.addr)
            .field("workers", &self.workers)
            .field("db_path", &self.db_path)
            .field("schema_path", &self.schema_path)
            .field("chat_password", &"[REDACTED]")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("gemini_model", &self.gemini_model)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = get("SALES_DESK_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SALES_DESK_ADDR".into(), e.to_string()))?;

        let workers = match get("SALES_DESK_WORKERS") {
            Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "SALES_DESK_WORKERS".into(),
                    format!("expected a positive integer, got {raw:?}"),
                )
            })?,
            None => DEFAULT_WORKERS,
        };

        let chat_password = get("CHAT_PASSWORD")
            .ok_or_else(|| ConfigError::MissingEnvVar("CHAT_PASSWORD".into()))?;

        Ok(Self {
            addr,
            workers,
            db_path: get("SALES_DESK_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            schema_path: get("SALES_DESK_SCHEMA")
                .unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
            chat_password,
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }
}
