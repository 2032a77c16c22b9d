//! Response DTOs for the breed explorer API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::Utc;
use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Breed;

/// Current time in ISO 8601 format
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Formats an elapsed time the way the breeds endpoint reports it
fn format_duration_ms(duration_ms: u128) -> String {
    format!("{}ms", duration_ms)
}

/// Response body for GET /breeds
#[derive(Debug, Clone, Serialize)]
pub struct BreedsResponse {
    pub breeds: Vec<Breed>,
    pub count: usize,
    /// Time spent building the response, e.g. "42ms"
    pub duration: String,
}

impl BreedsResponse {
    pub fn new(breeds: Vec<Breed>, duration_ms: u128) -> Self {
        Self {
            count: breeds.len(),
            breeds,
            duration: format_duration_ms(duration_ms),
        }
    }
}

/// Error body for GET /breeds, which also reports the elapsed time
#[derive(Debug, Clone, Serialize)]
pub struct BreedsErrorResponse {
    pub error: String,
    pub message: String,
    pub duration: String,
}

impl BreedsErrorResponse {
    pub fn new(message: impl Into<String>, duration_ms: u128) -> Self {
        Self {
            error: "Failed to fetch dog breeds".to_string(),
            message: message.into(),
            duration: format_duration_ms(duration_ms),
        }
    }
}

/// Response body for GET /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub success: bool,
    pub stats: CacheStats,
    pub timestamp: String,
}

impl CacheStatsResponse {
    pub fn new(stats: CacheStats) -> Self {
        Self {
            success: true,
            stats,
            timestamp: now_rfc3339(),
        }
    }
}

/// Response body for POST /cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct CacheActionResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

impl CacheActionResponse {
    pub fn cleared(breed: Option<&str>) -> Self {
        let message = match breed {
            Some(breed) => format!("Cache cleared for breed: {}", breed),
            None => "All cache cleared".to_string(),
        };
        Self {
            success: true,
            message,
            timestamp: now_rfc3339(),
        }
    }
}

/// Response body for POST /cache/cleanup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheCleanupResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: usize,
    pub timestamp: String,
}

impl CacheCleanupResponse {
    pub fn new(deleted_count: usize) -> Self {
        Self {
            success: true,
            message: format!("Cleaned up {} expired cache entries", deleted_count),
            deleted_count,
            timestamp: now_rfc3339(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status ("OK")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
}

impl HealthResponse {
    pub fn ok(uptime_secs: f64) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: now_rfc3339(),
            uptime: uptime_secs,
        }
    }
}

/// Body returned for unmatched routes
#[derive(Debug, Clone, Serialize)]
pub struct RouteNotFoundResponse {
    pub error: String,
    pub status: u16,
    pub timestamp: String,
    pub path: String,
}

impl RouteNotFoundResponse {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            error: "Route not found".to_string(),
            status: 404,
            timestamp: now_rfc3339(),
            path: path.into(),
        }
    }
}
