//! Cache Module
//!
//! Provides an in-memory key-value cache with per-entry TTL and lazy expiry.

mod entry;
mod stats;
mod store;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL applied to entries stored without an explicit one
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// A cache store shared between request handlers and background tasks.
pub type SharedCache<V> = Arc<RwLock<CacheStore<V>>>;

/// Wraps a store for sharing across tasks.
pub fn shared<V>(store: CacheStore<V>) -> SharedCache<V> {
    Arc::new(RwLock::new(store))
}
