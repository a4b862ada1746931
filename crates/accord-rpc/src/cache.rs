//! In-memory cache for read procedures.
//!
//! Entries are keyed by procedure and the canonical JSON of their parameters
//! and carry their own time-to-live. Expiry is checked on read; there is no
//! background eviction.

use std::collections::HashMap;
use std::time::Duration;

use accord_core::{Params, Procedure};
use serde_json::Value;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    procedure: Procedure,
    params: String,
}

impl CacheKey {
    pub fn new(procedure: Procedure, params: &Params) -> Self {
        // `Params` is ordered by key, so equal mappings render identically.
        Self {
            procedure,
            params: Value::Object(params.clone()).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_fresh(&self) -> bool {
        self.stored_at.elapsed() < self.ttl
    }
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value if it is still inside its staleness window.
    pub fn get(&mut self, key: &CacheKey) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh() => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a successful result. A zero `ttl` stores nothing.
    pub fn insert(&mut self, key: CacheKey, value: Value, ttl: Duration) {
        self.entries.retain(|_, entry| entry.is_fresh());
        if ttl.is_zero() {
            return;
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
