//! Memoization of question results.
//!
//! Answers are pure functions of the graph snapshot, so a bounded LRU map
//! from `(question_type, head, tail)` to the verdict is safe to share
//! across queries. The cache is invalidated wholesale on any graph
//! mutation; there is no partial invalidation.
//!
//! Concurrency: reads take a shared lock, recency updates and writes take
//! the exclusive lock. A duplicate computation racing a write is wasted
//! work, never a correctness bug.

use crate::answer::QuestionResult;
use crate::question::{Question, QuestionType};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default number of cached question results.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of evictions.
    pub evictions: u64,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache key: the question triple, without the per-request id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    question_type: QuestionType,
    head: String,
    tail: String,
}

impl From<&Question> for CacheKey {
    fn from(question: &Question) -> Self {
        Self {
            question_type: question.question_type,
            head: question.head.clone(),
            tail: question.tail.clone(),
        }
    }
}

/// Bounded LRU cache of question verdicts.
///
/// The `IndexMap` preserves insertion order (front = least recently used,
/// back = most recently used), giving O(1) eviction from the front and
/// O(1) amortized recency updates.
pub struct QueryCache {
    capacity: usize,
    inner: RwLock<IndexMap<CacheKey, QuestionResult>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl QueryCache {
    /// Creates a cache bounded to `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(IndexMap::with_capacity(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Looks up a cached verdict, updating recency on a hit.
    #[must_use]
    pub fn get(&self, question: &Question) -> Option<QuestionResult> {
        let key = CacheKey::from(question);

        let found = { self.inner.read().get(&key).copied() };
        match found {
            Some(result) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                // Move to back (most recently used).
                let mut inner = self.inner.write();
                inner.shift_remove(&key);
                inner.insert(key, result);
                Some(result)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Stores a verdict, evicting the least recently used entry at
    /// capacity.
    pub fn put(&self, question: &Question, result: QuestionResult) {
        let key = CacheKey::from(question);
        let mut inner = self.inner.write();

        if inner.shift_remove(&key).is_some() {
            // Known key: refresh value and recency.
            inner.insert(key, result);
            return;
        }

        if inner.len() >= self.capacity && inner.shift_remove_index(0).is_some() {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        inner.insert(key, result);
    }

    /// Drops every entry. Called on any graph mutation.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        if !inner.is_empty() {
            tracing::debug!(dropped = inner.len(), "query cache invalidated");
        }
        inner.clear();
    }

    /// Returns a snapshot of the hit/miss/eviction counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
