//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with its value and expiry window.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Time to live in milliseconds
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - How long the entry stays live
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    /// Last instant (Unix milliseconds) at which the entry is still live.
    pub fn expires_at(&self) -> u64 {
        self.stored_at.saturating_add(self.ttl_ms)
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to `now_ms`.
    ///
    /// An entry is live while `now <= stored_at + ttl`, so it only expires once
    /// the current time is strictly past the end of its window.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at()
    }

    /// Checks if the entry has expired against the wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_secs(60));

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.ttl_ms, 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_holds_structured_values() {
        let entry = CacheEntry::new(vec!["a".to_string(), "b".to_string()], Duration::from_secs(1));
        assert_eq!(entry.value.len(), 2);
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(1u32, Duration::from_millis(50));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(120));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: "test",
            stored_at: 1_000,
            ttl_ms: 500,
        };

        // Still live on the last millisecond of the window
        assert!(!entry.is_expired_at(1_500));
        assert!(entry.is_expired_at(1_501));
    }
}
