//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional.
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is not set (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DNS_TIMEOUT_MS` - Host resolution timeout for submitted URLs
//!   (default: 5000, range: 1..=60000)
//! - `STATIC_DIR` - Directory served under `/public` (default: `public`)
//!
//! A `.env` file in the working directory is honoured (loaded by `main.rs`).

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_PORT: &str = "3000";
const MAX_DNS_TIMEOUT_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on resolving the host of a submitted URL. A lookup that
    /// takes longer rejects the URL.
    pub dns_timeout_ms: u64,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dns_timeout_ms = match env::var("DNS_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DNS_TIMEOUT_MS must be a number, got '{v}'"))?,
            Err(_) => 5_000,
        };

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            dns_timeout_ms,
            static_dir,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0` on `PORT` (default 3000)
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `dns_timeout_ms` is 0 or above 60000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.dns_timeout_ms == 0 || self.dns_timeout_ms > MAX_DNS_TIMEOUT_MS {
            anyhow::bail!(
                "DNS_TIMEOUT_MS must be between 1 and {}, got {}",
                MAX_DNS_TIMEOUT_MS,
                self.dns_timeout_ms
            );
        }

        if self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Host resolution timeout as a [`Duration`].
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  DNS timeout: {}ms", self.dns_timeout_ms);
        tracing::info!("  Static dir: {}", self.static_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            dns_timeout_ms: 5_000,
            static_dir: "public".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());

        config.dns_timeout_ms = 0;
        assert!(config.validate().is_err());

        config.dns_timeout_ms = 60_001;
        assert!(config.validate().is_err());

        config.dns_timeout_ms = 60_000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dns_timeout_duration() {
        let config = Config {
            dns_timeout_ms: 1_500,
            ..valid_config()
        };

        assert_eq!(config.dns_timeout(), Duration::from_millis(1_500));
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8081");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8081");

        unsafe {
            env::remove_var("PORT");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_listen_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("PORT", "8081");
        }

        assert_eq!(Config::load_listen_addr(), "127.0.0.1:9000");

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_timeout() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DNS_TIMEOUT_MS", "soon");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("DNS_TIMEOUT_MS", "250");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.dns_timeout_ms, 250);

        // Cleanup
        unsafe {
            env::remove_var("DNS_TIMEOUT_MS");
        }
    }
}
