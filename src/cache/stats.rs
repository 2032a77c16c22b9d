//! Cache Statistics Module
//!
//! Snapshot of cache occupancy produced by a stats sweep.

use serde::Serialize;

// == Cache Stats ==
/// Occupancy counters reported by [`CacheStore::stats`](super::CacheStore::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries present before the sweep (valid + expired)
    pub total_entries: usize,
    /// Entries still inside their TTL window
    pub valid_entries: usize,
    /// Entries found expired and removed by the sweep
    pub expired_entries: usize,
    /// Number of entries physically held after the sweep
    pub cache_size: usize,
}

impl CacheStats {
    /// Builds a snapshot from the sweep counters.
    pub fn new(valid_entries: usize, expired_entries: usize, cache_size: usize) -> Self {
        Self {
            total_entries: valid_entries + expired_entries,
            valid_entries,
            expired_entries,
            cache_size,
        }
    }
}
