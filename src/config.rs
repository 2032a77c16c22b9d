//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;
use crate::services::breeds::DEFAULT_FETCH_CONCURRENCY;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the Dog CEO API
    pub dog_api_base_url: String,
    /// JSON file holding the favorites list
    pub favorites_path: PathBuf,
    /// Timeout for each upstream request, in seconds
    pub upstream_timeout: u64,
    /// Timeout for each inbound request, in seconds
    pub request_timeout: u64,
    /// Default cache TTL in seconds
    pub default_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Maximum concurrent image lookups while building the breed catalog
    pub fetch_concurrency: usize,
}

/// Reads `name` through `lookup` and parses it, falling back to `default`
/// when unset or invalid.
fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads `name` through `lookup`, treating blank values as unset.
fn non_blank<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `DOG_API_BASE_URL` - Upstream base URL (default: https://dog.ceo/api)
    /// - `FAVORITES_PATH` - Favorites file (default: data/favorites.json)
    /// - `UPSTREAM_TIMEOUT` - Upstream request timeout in seconds (default: 10)
    /// - `REQUEST_TIMEOUT` - Inbound request timeout in seconds (default: 30)
    /// - `DEFAULT_TTL` - Default cache TTL in seconds (default: 1800)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 300)
    /// - `FETCH_CONCURRENCY` - Catalog image fan-out limit (default: 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            dog_api_base_url: non_blank(&lookup, "DOG_API_BASE_URL")
                .unwrap_or(defaults.dog_api_base_url),
            favorites_path: non_blank(&lookup, "FAVORITES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.favorites_path),
            upstream_timeout: parse_or(&lookup, "UPSTREAM_TIMEOUT", defaults.upstream_timeout),
            request_timeout: parse_or(&lookup, "REQUEST_TIMEOUT", defaults.request_timeout),
            default_ttl: parse_or(&lookup, "DEFAULT_TTL", defaults.default_ttl),
            cleanup_interval: parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval),
            fetch_concurrency: parse_or(&lookup, "FETCH_CONCURRENCY", defaults.fetch_concurrency)
                .max(1),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3001,
            dog_api_base_url: "https://dog.ceo/api".to_string(),
            favorites_path: PathBuf::from("data/favorites.json"),
            upstream_timeout: 10,
            request_timeout: 30,
            default_ttl: DEFAULT_TTL.as_secs(),
            cleanup_interval: 300,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}
