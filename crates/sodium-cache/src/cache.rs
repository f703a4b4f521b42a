use core::{borrow::Borrow, hash::Hash, time::Duration};
use parking_lot::Mutex;
use sodium_duration::{SystemClock, TimeSource};
use std::{collections::HashMap, sync::Arc};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    CacheOptions, Result,
    options::{deadline, resolve_ttl},
    sweeper::Sweeper,
};

#[derive(Debug)]
struct Entry<V> {
    expires_at: u64,
    value: V,
}

impl<V> Entry<V> {
    /// An entry stays alive up to and including its expiry millisecond.
    fn is_expired(&self, now: u64) -> bool {
        self.expires_at < now
    }
}

#[derive(Debug)]
struct Inner<K, V, C> {
    options: CacheOptions,
    clock: C,
    data: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V, C> Inner<K, V, C>
where
    K: Eq + Hash,
    C: TimeSource,
{
    fn now(&self) -> u64 {
        self.clock.current_millis()
    }

    fn sweep(&self) -> usize {
        let now = self.now();
        let mut data = self.data.lock();
        let before = data.len();
        data.retain(|_, entry| !entry.is_expired(now));
        let evicted = before - data.len();

        #[cfg(feature = "tracing")]
        tracing::trace!(evicted, remaining = data.len(), "cache sweep");

        evicted
    }
}

/// Looks up a live entry, evicting it first if it has expired.
fn live_entry<'m, K, V, Q>(
    data: &'m mut HashMap<K, Entry<V>>,
    key: &Q,
    now: u64,
) -> Option<&'m mut Entry<V>>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    if data.get(key)?.is_expired(now) {
        data.remove(key);
        return None;
    }
    data.get_mut(key)
}

/// A key-value cache where every entry expires after its own TTL.
///
/// Expiry is checked against the wall clock in milliseconds. An entry is
/// alive while `now <= expires_at` and is evicted:
///
/// - when any accessor reads it after it expired
/// - by the background sweep every [`CacheOptions::check_interval`]
/// - by an explicit [`Self::sweep`]
///
/// The sweep runs on its own thread which only holds a weak reference to the
/// cache, so dropping the cache stops it. All methods take `&self`; the cache
/// is internally locked and can be shared across threads.
///
/// # Example
///
/// ```
/// use sodium_cache::{Cache, CacheOptions};
/// use std::time::Duration;
///
/// let cache = Cache::new(CacheOptions::new().with_ttl(Duration::from_secs(60)));
/// cache.set("user:1", "Ada", None).unwrap();
///
/// assert_eq!(cache.get("user:1"), Some("Ada"));
/// assert!(cache.expires_in("user:1").unwrap() <= Duration::from_secs(60));
/// ```
#[derive(Debug)]
pub struct Cache<K, V, C = SystemClock>
where
    C: TimeSource,
{
    inner: Arc<Inner<K, V, C>>,
    _sweeper: Option<Sweeper>,
}

impl<K, V> Cache<K, V, SystemClock>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    /// Creates an empty cache that reads the system clock.
    pub fn new(options: CacheOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<K, V> Default for Cache<K, V, SystemClock>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
    C: TimeSource + Send + Sync + 'static,
{
    /// Creates an empty cache that reads the current time from `clock`.
    ///
    /// The background sweep is started unless `options.check_interval` is
    /// zero.
    pub fn with_clock(options: CacheOptions, clock: C) -> Self {
        let inner = Arc::new(Inner {
            options,
            clock,
            data: Mutex::new(HashMap::new()),
        });

        let sweeper = (!options.check_interval.is_zero()).then(|| {
            Sweeper::spawn(
                Arc::downgrade(&inner),
                options.check_interval,
                |inner: &Inner<K, V, C>| {
                    inner.sweep();
                },
            )
        });

        Self {
            inner,
            _sweeper: sweeper,
        }
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Eq + Hash,
    C: TimeSource,
{
    /// The options this cache was created with.
    pub fn options(&self) -> &CacheOptions {
        &self.inner.options
    }

    /// Returns a clone of the value stored under `key` if it is alive.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        live_entry(&mut *data, key, now).map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key`, replacing any previous entry and its
    /// expiry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTtl`] if neither `ttl` nor the cache's default TTL
    /// is positive. The cache is left unchanged.
    ///
    /// [`Error::NoTtl`]: crate::Error::NoTtl
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, err))]
    pub fn set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<()> {
        let ttl = resolve_ttl(ttl, self.inner.options.ttl)?;
        let expires_at = deadline(self.inner.now(), ttl);
        self.inner
            .data
            .lock()
            .insert(key, Entry { expires_at, value });
        Ok(())
    }

    /// Removes and returns the value stored under `key` if it is alive.
    pub fn take<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        live_entry(&mut *data, key, now)?;
        data.remove(key).map(|entry| entry.value)
    }

    /// Replaces the value under `key` while keeping the current expiry of a
    /// live entry. An absent or expired key is stored as by [`Self::set`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTtl`] if neither `ttl` nor the cache's default TTL
    /// is positive, even when the key is alive and `ttl` would go unused.
    ///
    /// [`Error::NoTtl`]: crate::Error::NoTtl
    pub fn update(&self, key: K, value: V, ttl: Option<Duration>) -> Result<()> {
        let ttl = resolve_ttl(ttl, self.inner.options.ttl)?;
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        let expires_at = match live_entry(&mut *data, &key, now) {
            Some(entry) => entry.expires_at,
            None => deadline(now, ttl),
        };
        data.insert(key, Entry { expires_at, value });
        Ok(())
    }

    /// Returns `true` if `key` holds a live entry.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        live_entry(&mut *data, key, now).is_some()
    }

    /// Returns a clone of the first live value matching `predicate`.
    ///
    /// Iteration order is unspecified. Expired entries are evicted on the
    /// way.
    pub fn find<F>(&self, mut predicate: F) -> Option<V>
    where
        F: FnMut(&V) -> bool,
        V: Clone,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        data.retain(|_, entry| !entry.is_expired(now));
        data.values()
            .map(|entry| &entry.value)
            .find(|value| predicate(value))
            .cloned()
    }

    /// Time left before the entry under `key` expires.
    ///
    /// Returns `None` for an absent or expired key, and for an entry in its
    /// very last millisecond.
    pub fn expires_in<Q>(&self, key: &Q) -> Option<Duration>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        let remaining = live_entry(&mut *data, key, now)?.expires_at - now;
        (remaining > 0).then(|| Duration::from_millis(remaining))
    }

    /// Absolute expiry of the entry under `key`, in milliseconds since the
    /// UNIX epoch.
    pub fn expires_at<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        live_entry(&mut *data, key, now).map(|entry| entry.expires_at)
    }

    /// Restarts the expiry of a live entry at `now + ttl`.
    ///
    /// Returns `Ok(false)` if `key` is absent or expired. The TTL is only
    /// checked once the key is known to be alive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTtl`] if neither `ttl` nor the cache's default TTL
    /// is positive.
    ///
    /// [`Error::NoTtl`]: crate::Error::NoTtl
    pub fn set_ttl<Q>(&self, key: &Q, ttl: Option<Duration>) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let now = self.inner.now();
        let mut data = self.inner.data.lock();
        let Some(entry) = live_entry(&mut *data, key, now) else {
            return Ok(false);
        };
        let ttl = resolve_ttl(ttl, self.inner.options.ttl)?;
        entry.expires_at = deadline(now, ttl);
        Ok(true)
    }

    /// Removes the entry under `key`, expired or not. Returns `true` if an
    /// entry was removed.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.data.lock().remove(key).is_some()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.data.lock().clear();
    }

    /// Every stored key, including entries that expired but have not been
    /// evicted yet.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.data.lock().keys().cloned().collect()
    }

    /// Number of stored entries, including unevicted expired ones.
    pub fn len(&self) -> usize {
        self.inner.data.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.data.lock().is_empty()
    }

    /// Evicts every expired entry now and returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.inner.sweep()
    }
}
