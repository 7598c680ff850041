//! Configuration loader for the `transit-fleet-dashboard` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
use std::{env, time::Duration};

use anyhow::{anyhow, Result};

/// Path of the same-origin proxy route.
pub const PROXY_PATH: &str = "/api/vehicles";

/// Upstream feed used when `VEHICLES_API_URL` is not set.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://www.amanabootcamp.org/api/fs-classwork-data/amana-transportation";

/// Parse an optional environment variable with a default value.
macro_rules! parse_var {
    ($lookup:ident, $var_name:expr, $ty:ty, $default:expr) => {
        $lookup($var_name)
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string variable, treating blank values as unset.
macro_rules! optional_var {
    ($lookup:ident, $var_name:expr) => {
        $lookup($var_name).filter(|v| !v.trim().is_empty())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Port the HTTP server binds on `0.0.0.0`.
    pub port: u16,

    /// External vehicle API behind the proxy route.
    pub upstream_url: String,

    /// Endpoint the fetch orchestrator reads; the proxy route unless overridden.
    pub feed_url: String,

    /// Per-request timeout for outbound HTTP calls, in seconds.
    pub http_timeout_secs: u64,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `PORT` – listen port (default: 8080)
/// - `VEHICLES_API_URL` – upstream API behind the proxy (default: the public
///   Amana transportation feed)
/// - `VEHICLES_FEED_URL` – direct feed override for the dashboard (default:
///   the local proxy route)
/// - `HTTP_TIMEOUT_SECS` – outbound request timeout (default: 30)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    load_from(|key| env::var(key).ok())
}

/// Load configuration from an arbitrary variable source.
pub fn load_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let port = parse_var!(lookup, "PORT", u16, 8080);
    let http_timeout_secs = parse_var!(lookup, "HTTP_TIMEOUT_SECS", u64, 30);
    let upstream_url =
        optional_var!(lookup, "VEHICLES_API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into());
    let feed_url = optional_var!(lookup, "VEHICLES_FEED_URL")
        .unwrap_or_else(|| format!("http://127.0.0.1:{}{}", port, PROXY_PATH));

    if http_timeout_secs == 0 {
        return Err(anyhow!("Invalid HTTP_TIMEOUT_SECS: must be greater than 0"));
    }

    Ok(Config {
        port,
        upstream_url,
        feed_url,
        http_timeout_secs,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  PORT              : {}", self.port);
        tracing::info!("  VEHICLES_API_URL  : {}", self.upstream_url);
        tracing::info!("  VEHICLES_FEED_URL : {}", self.feed_url);
        tracing::info!("  HTTP_TIMEOUT_SECS : {}", self.http_timeout_secs);
    }

    /// Build the shared outbound HTTP client.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        // ---
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))
    }
}
