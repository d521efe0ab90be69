//! Configuration management for the Kaskady server.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Sender used when `MAIL_FROM` is not set.
pub const DEFAULT_MAIL_FROM: &str = "\"Kaskady Hotel\" <no-reply@hotelkaskady.sk>";

/// Configuration for the Kaskady server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Directory holding contacts.json, bookings.json and subscribers.json
    pub data_dir: PathBuf,

    /// Directory with the static website (default: "public")
    pub static_dir: PathBuf,

    /// Mail relay endpoint; mail is only logged when unset
    pub mail_api_url: Option<String>,

    /// Bearer token for the mail relay
    pub mail_api_key: Option<String>,

    /// Sender address for guest e-mails
    pub mail_from: String,

    /// Mail relay request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PORT`: Port to listen on (default: 3000)
    /// - `DATA_DIR`: Data directory (default: `./data`, or `/tmp/data` when
    ///   `NODE_ENV=production` or `VERCEL` is set)
    /// - `STATIC_DIR`: Static website directory (default: `public`)
    /// - `MAIL_API_URL`: Mail relay endpoint (requires `MAIL_API_KEY`)
    /// - `MAIL_API_KEY`: Mail relay bearer token
    /// - `MAIL_FROM`: Sender address
    /// - `REQUEST_TIMEOUT`: Mail relay timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let port = Self::parse_env_u16("PORT", 3000)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let data_dir = match env::var("DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => Self::default_data_dir(),
        };

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let mail_api_url = Self::non_empty_var("MAIL_API_URL");
        let mail_api_key = Self::non_empty_var("MAIL_API_KEY");

        if let Some(url) = &mail_api_url {
            // Validate relay URL format
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "MAIL_API_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }

            if mail_api_key.is_none() {
                return Err(ConfigError::MissingVar("MAIL_API_KEY".to_string()));
            }
        }

        let mail_from = env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            port,
            data_dir,
            static_dir,
            mail_api_url,
            mail_api_key,
            mail_from,
            request_timeout,
            log_level,
        })
    }

    /// `/tmp/data` on read-only hosting, `./data` everywhere else.
    fn default_data_dir() -> PathBuf {
        let production = env::var("NODE_ENV").map(|v| v == "production").unwrap_or(false);
        if production || env::var("VERCEL").is_ok() {
            PathBuf::from("/tmp").join("data")
        } else {
            PathBuf::from("data")
        }
    }

    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("public"),
            mail_api_url: None,
            mail_api_key: None,
            mail_from: DEFAULT_MAIL_FROM.to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
