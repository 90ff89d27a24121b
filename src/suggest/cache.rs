use super::types::Suggestion;
use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

/// Memoization key: the same file selected twice in one admin session
/// should not trigger a second vision call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub filename: String,
    pub file_size: u64,
    pub modified_epoch: u64,
}

/// Injected cache collaborator so the service can be exercised with a
/// no-op or pre-seeded cache in tests.
pub trait SuggestionCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Suggestion>;
    fn put(&self, key: CacheKey, value: Suggestion);
}

/// Bounded insert-order cache. Entries are immutable once written; when
/// the cap is exceeded the oldest-inserted entry is evicted.
pub struct BoundedSuggestionCache {
    capacity: usize,
    inner: RwLock<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<CacheKey, Suggestion>,
    order: VecDeque<CacheKey>,
}

impl BoundedSuggestionCache {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(CacheInner::default()),
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(inner) => inner.entries.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BoundedSuggestionCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl SuggestionCache for BoundedSuggestionCache {
    fn get(&self, key: &CacheKey) -> Option<Suggestion> {
        self.inner.read().ok()?.entries.get(key).cloned()
    }

    fn put(&self, key: CacheKey, value: Suggestion) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if inner.entries.contains_key(&key) {
            inner.entries.insert(key, value);
            return;
        }
        if inner.order.len() >= self.capacity
            && let Some(oldest) = inner.order.pop_front()
        {
            inner.entries.remove(&oldest);
        }
        inner.order.push_back(key.clone());
        inner.entries.insert(key, value);
    }
}

/// Cache that remembers nothing, for tests that must observe every call.
pub struct NoopSuggestionCache;

impl SuggestionCache for NoopSuggestionCache {
    fn get(&self, _key: &CacheKey) -> Option<Suggestion> {
        None
    }

    fn put(&self, _key: CacheKey, _value: Suggestion) {}
}
