use crate::{Error, Result};
use core::time::Duration;

/// Default interval between two sweeps of a [`Cache`]: 10 minutes.
///
/// [`Cache`]: crate::Cache
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_millis(600_000);

/// Configuration for a [`Cache`].
///
/// [`Cache`]: crate::Cache
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheOptions {
    /// The TTL used when a call does not pass one. Zero (the default) means
    /// every call must pass its own TTL.
    pub ttl: Duration,
    /// Interval between two sweeps removing every expired entry. Zero
    /// disables the background sweep; expired entries are then only evicted
    /// when read or by [`Cache::sweep`].
    ///
    /// [`Cache::sweep`]: crate::Cache::sweep
    pub check_interval: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            ttl: Duration::ZERO,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

impl CacheOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_check_interval(mut self, check_interval: Duration) -> Self {
        self.check_interval = check_interval;
        self
    }
}

/// Configuration for a [`ValueCache`].
///
/// [`ValueCache`]: crate::ValueCache
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueCacheOptions {
    /// The TTL used when `set` is not given one. Zero (the default) means
    /// every call must pass its own TTL.
    pub ttl: Duration,
}

impl ValueCacheOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Picks the per-call TTL over the default. An explicit zero is not replaced
/// by the default.
pub(crate) fn resolve_ttl(ttl: Option<Duration>, default: Duration) -> Result<Duration> {
    let ttl = ttl.unwrap_or(default);
    if ttl.is_zero() {
        return Err(Error::NoTtl { ttl });
    }
    Ok(ttl)
}

/// Absolute expiry in milliseconds since the UNIX epoch.
pub(crate) fn deadline(now: u64, ttl: Duration) -> u64 {
    now.saturating_add(u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX))
}
