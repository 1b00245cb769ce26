//! Expiry policy for saved scroll positions.
//!
//! A pure staleness predicate over entry age. Removal of stale entries is not
//! this module's job: the restore read path drops them when it finds them,
//! so an expired entry may physically remain in the store until overwritten.

use crate::types::ScrollEntry;

/// Default TTL: one hour.
pub const DEFAULT_TTL_MS: i64 = 3_600_000;

/// Fixed time-to-live policy for saved positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    ttl_ms: i64,
}

impl ExpiryPolicy {
    pub fn new(ttl_ms: i64) -> Self {
        Self { ttl_ms }
    }

    pub fn ttl_ms(&self) -> i64 {
        self.ttl_ms
    }

    /// Returns true if the entry is older than the TTL at `now_ms`.
    ///
    /// Strictly older: an entry aged exactly `ttl_ms` is still fresh.
    pub fn is_stale(&self, entry: &ScrollEntry, now_ms: i64) -> bool {
        entry.age_ms(now_ms) > self.ttl_ms
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
