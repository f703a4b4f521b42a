use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The unit is **milliseconds since the UNIX epoch**.
///
/// # Example
///
/// ```
/// use sodium_duration::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the UNIX epoch.
    fn current_millis(&self) -> u64;
}

/// The system wall clock.
///
/// Unlike a monotonic clock this follows `SystemTime`, so absolute
/// expiration timestamps and snowflake timestamps line up with what other
/// processes observe.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        // A clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct MockTime {
        millis: AtomicU64,
    }

    impl TimeSource for MockTime {
        fn current_millis(&self) -> u64 {
            self.millis.load(Ordering::Relaxed)
        }
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.current_millis() > 1_577_836_800_000);
    }

    #[test]
    fn shared_clock_observes_updates() {
        let clock = Arc::new(MockTime {
            millis: AtomicU64::new(10),
        });
        let shared = Arc::clone(&clock);
        assert_eq!(shared.current_millis(), 10);

        clock.millis.store(42, Ordering::Relaxed);
        assert_eq!(shared.current_millis(), 42);
        assert_eq!((&*clock).current_millis(), 42);
    }
}
