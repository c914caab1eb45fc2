//! Configuration for seeding runs.

use std::env;

use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration for a seeding run, loaded from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Postgres connection string, including credentials.
    pub database_url: String,

    /// Maximum connections in the pool.
    pub max_connections: u32,
}

impl SeedConfig {
    /// Loads configuration from the environment.
    ///
    /// `DATABASE_URL` carries the connection credentials and must be set;
    /// a missing value is a fatal startup error. `SEED_MAX_CONNECTIONS`
    /// optionally overrides the pool size.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set to seed the database")?;

        let max_connections = env::var("SEED_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
