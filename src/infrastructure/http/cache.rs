//! In-memory TTL cache for successful read responses.
//!
//! Keys are fully-resolved resource locators; values are the raw decoded
//! response bodies, so a hit deserializes exactly like a fresh fetch.
//! Expiry is lazy: entries are reaped on lookup, never by a background
//! sweep, and callers cannot distinguish "never cached" from "expired".

use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

/// Default validity window for cached responses (5 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
    ttl: Duration,
}

/// Thread-safe response cache with per-entry TTL expiration.
///
/// Entries are immutable snapshots: `set` fully replaces, nothing ever
/// patches an entry in place. Single-key reads and writes are safe under
/// concurrent dispatches without external locking.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store `value` under `key`, unconditionally replacing any existing
    /// entry. The validity window starts now.
    pub fn set(&self, key: &str, value: Value, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Fetch a live entry. Expired entries are removed and reported as
    /// absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.stored_at.elapsed() < entry.ttl {
                return Some(entry.value.clone());
            }
            // Expired. Release the shard guard before removing.
            drop(entry);
            self.entries.remove(key);
        }
        None
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
