//! Application settings loaded from environment variables.

use std::collections::HashMap;
use std::env;

use chrono::Duration;
use thiserror::Error;

use super::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD, DEFAULT_CORS_ORIGIN,
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MIN_JWT_SECRET_LENGTH,
};

/// Fatal configuration problems detected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,

    #[error("JWT_SECRET must be at least {0} characters long")]
    JwtSecretTooShort(usize),

    #[error("JWT_EXPIRE has an invalid duration: {0}")]
    InvalidJwtExpire(String),

    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expire: Duration,
    pub server_host: String,
    pub server_port: u16,
    pub cors_origin: String,
    pub admin_email: String,
    admin_password: String,
    pub admin_name: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expire_seconds", &self.jwt_expire.num_seconds())
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_origin", &self.cors_origin)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"[REDACTED]")
            .field("admin_name", &self.admin_name)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an in-memory map.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// A missing or short `JWT_SECRET` is an error; the process must not start
    /// without a signing secret.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::JwtSecretTooShort(MIN_JWT_SECRET_LENGTH));
        }

        let raw_expire = lookup("JWT_EXPIRE").unwrap_or_else(|| DEFAULT_JWT_EXPIRE.to_string());
        let jwt_expire = parse_duration(&raw_expire)
            .ok_or_else(|| ConfigError::InvalidJwtExpire(raw_expire.clone()))?;

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expire,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            admin_email: lookup("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: lookup("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            admin_name: lookup("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Plain-text password used by the seed command.
    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse a lifetime such as `7d`, `12h`, `30m`, `45s` or a bare number of seconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (digits, unit) = match raw.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&raw[..idx], Some(c)),
        _ => (raw, None),
    };

    let amount: i64 = digits.trim().parse().ok().filter(|n| *n > 0)?;

    match unit {
        None | Some('s') => Some(Duration::seconds(amount)),
        Some('m') => Some(Duration::minutes(amount)),
        Some('h') => Some(Duration::hours(amount)),
        Some('d') => Some(Duration::days(amount)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret-that-is-long-enough!!";

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let result = Config::from_map(&values(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingJwtSecret);
    }

    #[test]
    fn test_empty_secret_is_fatal() {
        let result = Config::from_map(&values(&[("JWT_SECRET", "")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingJwtSecret);
    }

    #[test]
    fn test_short_secret_is_fatal() {
        let result = Config::from_map(&values(&[("JWT_SECRET", "short")]));
        assert!(matches!(result, Err(ConfigError::JwtSecretTooShort(_))));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_map(&values(&[("JWT_SECRET", SECRET)])).unwrap();
        assert_eq!(config.jwt_expire, Duration::days(7));
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
        assert_eq!(config.admin_email, DEFAULT_ADMIN_EMAIL);
        assert_eq!(config.admin_password(), DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_map(&values(&[
            ("JWT_SECRET", SECRET),
            ("ADMIN_PASSWORD", "VerySecret123"),
        ]))
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
        assert!(!debug.contains(&SECRET[..6]));
        assert!(!debug.contains("VerySecret123"));
    }

    #[test]
    fn test_invalid_expire_is_fatal() {
        let result = Config::from_map(&values(&[("JWT_SECRET", SECRET), ("JWT_EXPIRE", "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidJwtExpire(_))));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("7d"), Some(Duration::days(7)));
        assert_eq!(parse_duration("12h"), Some(Duration::hours(12)));
        assert_eq!(parse_duration("30m"), Some(Duration::minutes(30)));
        assert_eq!(parse_duration("45s"), Some(Duration::seconds(45)));
        assert_eq!(parse_duration("3600"), Some(Duration::seconds(3600)));
        assert_eq!(parse_duration("0d"), None);
        assert_eq!(parse_duration("d"), None);
        assert_eq!(parse_duration("5w"), None);
    }
}
