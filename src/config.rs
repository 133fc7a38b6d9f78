//! Server configuration from environment variables.

use time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 7;

/// Runtime configuration. Everything has a default so a bare environment
/// boots a working dev server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// How long a login session stays valid.
    pub session_ttl: Duration,
}

impl ServerConfig {
    /// Read configuration from the environment:
    /// - `BIND_ADDR` (default `0.0.0.0`)
    /// - `PORT` (default `3000`)
    /// - `SESSION_TTL_HOURS` (default `168`)
    ///
    /// Unparseable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
            port: env_parsed("PORT", DEFAULT_PORT),
            session_ttl: Duration::hours(env_parsed("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or(default),
        None => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
