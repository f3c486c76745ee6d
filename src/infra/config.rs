//! Centralized configuration (environment variables + defaults).

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database URL must be provided (no default).
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// Address the HTTP server listens on.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Upper bound on pooled Postgres connections (at least 1).
pub fn db_max_connections() -> anyhow::Result<u32> {
    match std::env::var("DB_MAX_CONNECTIONS") {
        Ok(v) => {
            let n = v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got '{}'", v))?;
            Ok(n.max(1))
        }
        Err(_) => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}
