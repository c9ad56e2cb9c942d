//! Environment-driven configuration.

use anyhow::Context;
use std::env;
use std::net::SocketAddr;

/// Default bind address when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default connection pool size when `DATABASE_MAX_CONNECTIONS` is not set.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Service configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Maximum connections in the database pool.
    pub max_connections: u32,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDR` and
    /// `DATABASE_MAX_CONNECTIONS` have defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or any value fails to
    /// parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a valid socket address")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
