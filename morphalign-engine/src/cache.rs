//! Memoization of alignments
//!
//! Corpora repeat the same (word, morphemes) pairs many times, and a trellis
//! search per token is wasteful. The cache is bounded: once full, new results
//! are computed but not stored.

use crate::request::AlignmentRequest;
use morphalign_core::Alignment;
use rustc_hash::FxHashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    PoisonError, RwLock,
};

/// Thread-safe bounded alignment cache
#[derive(Debug)]
pub struct AlignmentCache {
    capacity: usize,
    entries: RwLock<FxHashMap<AlignmentRequest, Alignment>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of stored alignments
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups that missed
    pub misses: usize,
}

impl AlignmentCache {
    /// Create a cache holding at most `capacity` alignments
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(FxHashMap::default()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Maximum number of stored alignments
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a previously stored alignment
    pub fn get(&self, request: &AlignmentRequest) -> Option<Alignment> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let found = entries.get(request).cloned();

        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store an alignment; returns false when the cache is full
    pub fn insert(&self, request: AlignmentRequest, alignment: Alignment) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity && !entries.contains_key(&request) {
            return false;
        }

        entries.insert(request, alignment);
        true
    }

    /// Number of stored alignments
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries and reset the counters
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(word: &str) -> Alignment {
        Alignment::new(vec![word.to_string()], vec![Some(0)], word.len())
    }

    #[test]
    fn test_get_on_empty_misses() {
        let cache = AlignmentCache::new(2);
        assert_eq!(cache.get(&AlignmentRequest::new("a", ["a"])), None);
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 0,
                hits: 0,
                misses: 1
            }
        );
    }

    #[test]
    fn test_insert_then_get_hits() {
        let cache = AlignmentCache::new(2);
        let request = AlignmentRequest::new("ab", ["ab"]);
        assert!(cache.insert(request.clone(), alignment("ab")));
        assert_eq!(cache.get(&request), Some(alignment("ab")));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_morpheme_list_is_part_of_the_key() {
        let cache = AlignmentCache::new(2);
        cache.insert(AlignmentRequest::new("ab", ["ab"]), alignment("ab"));
        assert_eq!(cache.get(&AlignmentRequest::new("ab", ["a", "b"])), None);
    }

    #[test]
    fn test_full_cache_rejects_new_keys() {
        let cache = AlignmentCache::new(1);
        assert_eq!(cache.capacity(), 1);
        assert!(cache.insert(AlignmentRequest::new("a", ["a"]), alignment("a")));
        assert!(!cache.insert(AlignmentRequest::new("b", ["b"]), alignment("b")));
        // Existing keys may still be overwritten
        assert!(cache.insert(AlignmentRequest::new("a", ["a"]), alignment("a")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = AlignmentCache::new(4);
        let request = AlignmentRequest::new("a", ["a"]);
        cache.insert(request.clone(), alignment("a"));
        cache.get(&request);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
