//! Server configuration parsed from environment variables.
//!
//! Recognized variables:
//! - `PORT`: listen port, default 3000
//! - `ADMIN_ACCESS_CODE`: admin sign-in code; admin sign-in is disabled when
//!   unset or blank
//! - `ADMIN_SESSION_TTL_SECS`: lifetime of a granted admin session, default
//!   28800 (eight hours)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use sha2::{Digest, Sha256};
use time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: i64 = 8 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("ADMIN_SESSION_TTL_SECS must be a positive number of seconds, got {0:?}")]
    InvalidSessionTtl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Hex SHA-256 of the admin access code. The plain code is not kept.
    pub admin_code_digest: Option<String>,
    pub session_ttl: Duration,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` or `ADMIN_SESSION_TTL_SECS` is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from any variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let admin_code_digest = var("ADMIN_ACCESS_CODE")
            .map(|code| code.trim().to_owned())
            .filter(|code| !code.is_empty())
            .map(|code| hash_access_code(&code));

        let ttl_secs = match var("ADMIN_SESSION_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => i64::from(secs),
                _ => return Err(ConfigError::InvalidSessionTtl(raw)),
            },
            None => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self { port, admin_code_digest, session_ttl: Duration::seconds(ttl_secs) })
    }

    #[must_use]
    pub fn admin_enabled(&self) -> bool {
        self.admin_code_digest.is_some()
    }
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Compare two digests without stopping at the first differing byte.
#[must_use]
pub fn digests_match(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
