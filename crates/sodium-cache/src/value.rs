use core::time::Duration;
use parking_lot::{Condvar, Mutex};
use sodium_duration::{SystemClock, TimeSource};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Instant,
};

use crate::{
    Result, ValueCacheOptions,
    options::{deadline, resolve_ttl},
};

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    /// Wall-clock expiry in milliseconds since the UNIX epoch.
    expires_at: Option<u64>,
    /// Monotonic instant at which the timer clears the slot.
    timer: Option<Instant>,
    stopped: bool,
}

impl<T> Slot<T> {
    fn clear(&mut self) {
        self.value = None;
        self.expires_at = None;
        self.timer = None;
    }
}

#[derive(Debug)]
struct Shared<T> {
    slot: Mutex<Slot<T>>,
    wake: Condvar,
}

/// A single cached value cleared by a one-shot timer.
///
/// Every [`Self::set`] cancels the pending timer and schedules a new one
/// `ttl` from now. The timer runs on a background thread, started by the
/// first successful `set`, that sleeps until the next deadline and exits
/// when the cache is dropped. A cache that is never set holds no thread. Reads also compare
/// the expiry against the clock, so a value is never returned past its
/// expiry even if the timer has not fired yet.
///
/// # Example
///
/// ```
/// use sodium_cache::{ValueCache, ValueCacheOptions};
/// use std::time::Duration;
///
/// let token = ValueCache::new(ValueCacheOptions::new().with_ttl(Duration::from_secs(30)));
/// assert_eq!(token.get(), None);
///
/// token.set("secret".to_owned(), None).unwrap();
/// assert_eq!(token.get().as_deref(), Some("secret"));
///
/// token.clear();
/// assert_eq!(token.get(), None);
/// ```
#[derive(Debug)]
pub struct ValueCache<T, C = SystemClock>
where
    C: TimeSource,
{
    options: ValueCacheOptions,
    clock: C,
    shared: Arc<Shared<T>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl<T> ValueCache<T, SystemClock> {
    /// Creates an empty cache that reads the system clock.
    pub fn new(options: ValueCacheOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<T> Default for ValueCache<T, SystemClock> {
    fn default() -> Self {
        Self::new(ValueCacheOptions::default())
    }
}

impl<T, C> ValueCache<T, C>
where
    C: TimeSource,
{
    /// Creates an empty cache that reads the current time from `clock`.
    ///
    /// The clock decides what [`Self::get`] and [`Self::expires_in`] report.
    /// The timer thread always sleeps on the monotonic clock.
    pub fn with_clock(options: ValueCacheOptions, clock: C) -> Self {
        let shared = Arc::new(Shared {
            slot: Mutex::new(Slot {
                value: None,
                expires_at: None,
                timer: None,
                stopped: false,
            }),
            wake: Condvar::new(),
        });

        Self {
            options,
            clock,
            shared,
            timer: Mutex::new(None),
        }
    }
}

fn run_timer<T>(shared: &Shared<T>) {
    let mut slot = shared.slot.lock();
    loop {
        if slot.stopped {
            break;
        }
        match slot.timer {
            None => shared.wake.wait(&mut slot),
            Some(at) if Instant::now() >= at => {
                slot.clear();
                #[cfg(feature = "tracing")]
                tracing::trace!("value cache expired");
            }
            Some(at) => {
                shared.wake.wait_until(&mut slot, at);
            }
        }
    }
}

impl<T, C> ValueCache<T, C>
where
    C: TimeSource,
{
    /// The options this cache was created with.
    pub fn options(&self) -> &ValueCacheOptions {
        &self.options
    }

    /// Stores `value` for `ttl` (or the default TTL) and returns it.
    ///
    /// Any pending expiry is cancelled and replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTtl`] if neither `ttl` nor the default TTL is
    /// positive. The cache is left unchanged.
    ///
    /// [`Error::NoTtl`]: crate::Error::NoTtl
    pub fn set(&self, value: T, ttl: Option<Duration>) -> Result<T>
    where
        T: Clone + Send + 'static,
    {
        let ttl = resolve_ttl(ttl, self.options.ttl)?;
        self.ensure_timer();
        let now = self.clock.current_millis();

        let mut slot = self.shared.slot.lock();
        slot.value = Some(value.clone());
        slot.expires_at = Some(deadline(now, ttl));
        slot.timer = Instant::now().checked_add(ttl);
        drop(slot);

        self.shared.wake.notify_all();
        Ok(value)
    }

    /// Starts the timer thread unless it is already running. A failed spawn
    /// is retried by the next `set`; until then only reads clear the slot.
    fn ensure_timer(&self)
    where
        T: Send + 'static,
    {
        let mut timer = self.timer.lock();
        if timer.is_some() {
            return;
        }

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("sodium-value-cache-timer".into())
            .spawn(move || run_timer(&shared));

        match spawned {
            Ok(handle) => *timer = Some(handle),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "failed to spawn value cache timer thread");
            }
        }
    }

    /// Returns a clone of the cached value if it has not expired.
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.live_slot()?.value.clone()
    }

    /// Drops the cached value and cancels its timer.
    pub fn clear(&self) {
        self.shared.slot.lock().clear();
        self.shared.wake.notify_all();
    }

    /// Time left before the value expires, `None` if the cache is empty or
    /// no time is left.
    pub fn expires_in(&self) -> Option<Duration> {
        let now = self.clock.current_millis();
        let expires_at = self.expires_at()?;
        let remaining = expires_at.saturating_sub(now);
        (remaining > 0).then(|| Duration::from_millis(remaining))
    }

    /// Absolute expiry in milliseconds since the UNIX epoch, `None` if the
    /// cache is empty.
    pub fn expires_at(&self) -> Option<u64> {
        self.live_slot()?.expires_at
    }

    /// Locks the slot, clearing it first if its expiry has passed. Returns
    /// `None` when there is nothing cached.
    fn live_slot(&self) -> Option<parking_lot::MutexGuard<'_, Slot<T>>> {
        let now = self.clock.current_millis();
        let mut slot = self.shared.slot.lock();
        let expires_at = slot.expires_at?;
        if expires_at < now {
            slot.clear();
            drop(slot);
            self.shared.wake.notify_all();
            return None;
        }
        Some(slot)
    }
}

impl<T, C> Drop for ValueCache<T, C>
where
    C: TimeSource,
{
    fn drop(&mut self) {
        self.shared.slot.lock().stopped = true;
        self.shared.wake.notify_all();
    }
}
