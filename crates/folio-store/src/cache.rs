//! Short-TTL memoization of list-query results.
//!
//! Concurrent UI re-renders fire the same list request several times in
//! quick succession; the cache absorbs the duplicates. Entries are pure
//! functions of the query key, so last-writer-wins refresh is safe.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::query::ListResult;

/// Default entry lifetime.
const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// A TTL cache keyed by serialized query.
///
/// Reads are shared across callers; writes replace the entry for a key
/// atomically. Evicting the whole cache at any point is always correct.
#[derive(Debug)]
pub struct QueryCache {
    /// Entry lifetime.
    ttl: Duration,
    /// Cached results with their insertion times.
    entries: Mutex<HashMap<String, (Instant, ListResult)>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl QueryCache {
    /// Creates a cache with the given entry lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `key` if it is still fresh.
    pub fn get(&self, key: &str) -> Option<ListResult> {
        let entries = self.entries.lock().ok()?;
        let (inserted, result) = entries.get(key)?;
        if inserted.elapsed() > self.ttl {
            return None;
        }
        Some(result.clone())
    }

    /// Stores a result for `key`, replacing any previous entry.
    ///
    /// Expired entries for other keys are dropped on the way through so
    /// the map does not grow without bound.
    pub fn put(&self, key: String, result: ListResult) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|_, (inserted, _)| inserted.elapsed() <= self.ttl);
            entries.insert(key, (Instant::now(), result));
        }
    }

    /// Drops every entry. Called after any mutation of the underlying
    /// data so stale pages are never served.
    pub fn invalidate(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
