/// Configuration for the review-stats tool
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::MapId;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Map whose review progress is reported
    pub map_id: MapId,
    /// Take both counts from one repeatable-read snapshot
    #[serde(default)]
    pub consistent_snapshot: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("env", &self.env)
            .field("database_url", &"[REDACTED]")
            .field("map_id", &self.map_id)
            .field("consistent_snapshot", &self.consistent_snapshot)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;

        let map_id: i64 = std::env::var("REVIEW_MAP_ID")
            .context("REVIEW_MAP_ID environment variable not set")?
            .parse()
            .context("Invalid REVIEW_MAP_ID")?;

        let consistent_snapshot = match std::env::var("REVIEW_CONSISTENT_SNAPSHOT") {
            Ok(v) => parse_bool(&v).context("Invalid REVIEW_CONSISTENT_SNAPSHOT")?,
            Err(_) => false,
        };

        Ok(Config {
            env,
            database_url,
            map_id: MapId::new(map_id),
            consistent_snapshot,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}
