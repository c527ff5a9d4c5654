//! Application configuration loaded from environment variables.

use std::num::ParseIntError;

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid origin {0:?} in CORS_ALLOW_ORIGINS")]
    InvalidOrigin(String),

    #[error("invalid boolean {value:?} for {name}")]
    InvalidBool { name: &'static str, value: String },

    #[error("invalid LOG_FORMAT {0:?}, expected \"pretty\" or \"json\"")]
    InvalidLogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// Every origin.
    #[default]
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Cross-origin policy applied to every route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub origins: AllowedOrigins,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::Any,
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Builds the CORS middleware for this policy.
    ///
    /// Browsers reject a literal `*` together with credentials, so when every
    /// origin is allowed with credentials the request's own origin, method and
    /// headers are mirrored back instead.
    pub fn layer(&self) -> CorsLayer {
        match (&self.origins, self.allow_credentials) {
            (AllowedOrigins::Any, false) => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            (AllowedOrigins::Any, true) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
            (AllowedOrigins::List(origins), allow_credentials) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.iter().cloned()))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(allow_credentials),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `8000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `"pretty"` or `"json"` (default: `"pretty"`)
/// - `CORS_ALLOW_ORIGINS`: `"*"` or a comma-separated origin list (default: `"*"`)
/// - `CORS_ALLOW_CREDENTIALS`: `true`/`false` (default: `true`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub cors: CorsConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => parse_log_format(&value)?,
            None => defaults.log_format,
        };

        let origins = match lookup("CORS_ALLOW_ORIGINS") {
            Some(value) => parse_origins(&value)?,
            None => defaults.cors.origins,
        };

        let allow_credentials = match lookup("CORS_ALLOW_CREDENTIALS") {
            Some(value) => parse_bool("CORS_ALLOW_CREDENTIALS", &value)?,
            None => defaults.cors.allow_credentials,
        };

        Ok(Self {
            host: lookup("HOST")
                .map(|host| host.trim().to_string())
                .filter(|host| !host.is_empty())
                .unwrap_or(defaults.host),
            port,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
            cors: CorsConfig {
                origins,
                allow_credentials,
            },
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cors: CorsConfig::default(),
        }
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidLogFormat(value.to_string())),
    }
}

fn parse_origins(value: &str) -> Result<AllowedOrigins, ConfigError> {
    let entries: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(AllowedOrigins::Any);
    }

    let origins = entries
        .into_iter()
        .map(|entry| {
            HeaderValue::from_str(entry).map_err(|_| ConfigError::InvalidOrigin(entry.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllowedOrigins::List(origins))
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
