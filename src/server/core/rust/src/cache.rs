/* src/server/core/rust/src/cache.rs */

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex;

/// Entries kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 512;

/// Bounded time-based cache: entries older than the revalidation window are
/// treated as missing, and the least recently used entry is evicted once
/// `capacity` is reached.
pub struct RevalidateCache<K, V> {
  ttl: Duration,
  entries: Mutex<LruCache<K, (Instant, V)>>,
}

impl<K, V> RevalidateCache<K, V>
where
  K: Eq + Hash,
  V: Clone,
{
  pub fn new(ttl: Duration) -> Self {
    Self::with_capacity(ttl, DEFAULT_CAPACITY)
  }

  /// A zero capacity falls back to [`DEFAULT_CAPACITY`].
  pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
    let capacity = NonZeroUsize::new(capacity)
      .or(NonZeroUsize::new(DEFAULT_CAPACITY))
      .unwrap_or(NonZeroUsize::MIN);
    Self { ttl, entries: Mutex::new(LruCache::new(capacity)) }
  }

  pub fn ttl(&self) -> Duration {
    self.ttl
  }

  pub async fn capacity(&self) -> usize {
    self.entries.lock().await.cap().get()
  }

  pub async fn get(&self, key: &K) -> Option<V> {
    let mut entries = self.entries.lock().await;
    let (stored_at, value) = entries.get(key)?;
    if stored_at.elapsed() < self.ttl {
      return Some(value.clone());
    }
    entries.pop(key);
    None
  }

  pub async fn insert(&self, key: K, value: V) {
    self.entries.lock().await.put(key, (Instant::now(), value));
  }

  pub async fn clear(&self) {
    self.entries.lock().await.clear();
  }

  pub async fn len(&self) -> usize {
    self.entries.lock().await.len()
  }
}
