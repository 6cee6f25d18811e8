//! Explicit, caller-owned memoization.
//!
//! A [`Memoized`] wraps a function together with its cache. The cache lives
//! exactly as long as the wrapper, so two wrappers of the same function never
//! share results, and dropping the wrapper frees everything it remembered.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[cfg(feature = "fxhash")]
type CacheMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fxhash"))]
type CacheMap<K, V> = std::collections::HashMap<K, V>;

/// Bounds on what a [`Memoized`] keeps.
///
/// Both bounds are optional; the default policy keeps every result forever.
///
/// # Examples
///
/// ```rust
/// use rivulet::compose::CachePolicy;
/// use std::time::Duration;
///
/// let policy = CachePolicy::default()
///     .with_ttl(Duration::from_secs(30))
///     .with_capacity(128);
///
/// assert_eq!(policy.capacity, Some(128));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// How long an entry stays valid. Expired entries are recomputed.
    pub ttl: Option<Duration>,
    /// Maximum number of entries. At capacity, the oldest entry is evicted
    /// in amortized constant time.
    pub capacity: Option<usize>,
}

impl CachePolicy {
    /// Sets the time-to-live of every entry.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Sets the maximum number of entries.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
    generation: u64,
}

/// Cached entries plus their insertion order.
///
/// `order` may hold records for keys that were since invalidated, expired or
/// re-stored; a record is live only while its generation matches the entry's.
struct Store<K, V> {
    entries: CacheMap<K, Entry<V>>,
    order: VecDeque<(K, u64)>,
    next_generation: u64,
}

impl<K: Eq + Hash + Clone, V> Store<K, V> {
    fn new() -> Self {
        Self {
            entries: CacheMap::default(),
            order: VecDeque::new(),
            next_generation: 0,
        }
    }

    fn is_live(&self, key: &K, generation: u64) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.generation == generation)
    }

    fn evict_oldest(&mut self) -> bool {
        while let Some((key, generation)) = self.order.pop_front() {
            if self.is_live(&key, generation) {
                self.entries.remove(&key);
                return true;
            }
        }
        false
    }

    fn insert(&mut self, key: K, value: V) {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.order.push_back((key.clone(), generation));
        self.entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
                generation,
            },
        );
        if self.order.len() > self.entries.len() * 2 + 16 {
            let entries = &self.entries;
            self.order.retain(|(key, generation)| {
                entries
                    .get(key)
                    .is_some_and(|entry| entry.generation == *generation)
            });
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// A function paired with a cache of its results.
///
/// `F` receives the key by reference and is called at most once per key
/// while the cached entry is valid.
///
/// # Examples
///
/// ```rust
/// use rivulet::compose::Memoized;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = Memoized::new(|n: &u64| {
///     calls.set(calls.get() + 1);
///     n * n
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Memoized<K, V, F> {
    function: F,
    policy: CachePolicy,
    store: RefCell<Store<K, V>>,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Wraps `function` with an unbounded cache.
    pub fn new(function: F) -> Self {
        Self::with_policy(function, CachePolicy::default())
    }

    /// Wraps `function` with a cache bounded by `policy`.
    pub fn with_policy(function: F, policy: CachePolicy) -> Self {
        Self {
            function,
            policy,
            store: RefCell::new(Store::new()),
        }
    }

    /// Returns the cached result for `key`, computing and storing it first
    /// when absent or expired.
    ///
    /// The cache is not borrowed while the function runs, so the function
    /// may call other memoized functions.
    pub fn call(&self, key: K) -> V {
        if let Some(value) = self.lookup(&key) {
            #[cfg(feature = "tracing")]
            tracing::trace!("memoized cache hit");
            return value;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("memoized cache miss");
        let value = (self.function)(&key);
        self.store(key, value.clone());
        value
    }

    /// Drops the cached result for `key`. Returns whether one was present.
    pub fn invalidate(&self, key: &K) -> bool {
        self.store.borrow_mut().entries.remove(key).is_some()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.store.borrow_mut().clear();
    }

    /// Number of cached entries, including expired ones not yet recomputed.
    pub fn len(&self) -> usize {
        self.store.borrow().entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.store.borrow().entries.is_empty()
    }

    /// The policy this cache was built with.
    pub const fn policy(&self) -> CachePolicy {
        self.policy
    }

    fn is_expired(&self, entry: &Entry<V>) -> bool {
        self.policy
            .ttl
            .is_some_and(|ttl| entry.stored_at.elapsed() >= ttl)
    }

    fn lookup(&self, key: &K) -> Option<V> {
        let mut store = self.store.borrow_mut();
        let expired = self.is_expired(store.entries.get(key)?);
        if expired {
            store.entries.remove(key);
            return None;
        }
        store.entries.get(key).map(|entry| entry.value.clone())
    }

    fn store(&self, key: K, value: V) {
        let mut store = self.store.borrow_mut();
        if let Some(capacity) = self.policy.capacity {
            if capacity == 0 {
                return;
            }
            if store.entries.len() >= capacity
                && !store.entries.contains_key(&key)
                && store.evict_oldest()
            {
                #[cfg(feature = "tracing")]
                tracing::debug!(capacity, "memoized cache full, evicted oldest entry");
            }
        }
        store.insert(key, value);
    }
}

impl<K, V, F> fmt::Debug for Memoized<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("policy", &self.policy)
            .field("entries", &self.store.borrow().entries.len())
            .finish_non_exhaustive()
    }
}
