use core::time::Duration;
use parking_lot::{Condvar, Mutex};
use std::{
    sync::{Arc, Weak},
    thread::{self, JoinHandle},
};

#[derive(Debug, Default)]
struct Signal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

/// Background thread running a sweep over a shared target at a fixed
/// interval.
///
/// The thread only holds a [`Weak`] reference and upgrades it for the length
/// of one sweep. It exits when the target is gone or the `Sweeper` is
/// dropped, whichever comes first, and never keeps the process alive.
#[derive(Debug)]
pub(crate) struct Sweeper {
    signal: Arc<Signal>,
    _handle: Option<JoinHandle<()>>,
}

impl Sweeper {
    pub(crate) fn spawn<T, F>(target: Weak<T>, interval: Duration, sweep: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&T) + Send + 'static,
    {
        let signal = Arc::new(Signal::default());
        let thread_signal = Arc::clone(&signal);

        let spawned = thread::Builder::new()
            .name("sodium-cache-sweep".into())
            .spawn(move || {
                loop {
                    {
                        let mut stopped = thread_signal.stopped.lock();
                        if !*stopped {
                            thread_signal.wake.wait_for(&mut stopped, interval);
                        }
                        if *stopped {
                            break;
                        }
                    }

                    let Some(target) = target.upgrade() else {
                        break;
                    };
                    sweep(&target);
                }
            });

        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(_err) => {
                // Reads still evict expired entries without the thread.
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "failed to spawn cache sweep thread");
                None
            }
        };

        Self {
            signal,
            _handle: handle,
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        *self.signal.stopped.lock() = true;
        self.signal.wake.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    fn wait_until(deadline: Duration, check: impl Fn() -> bool) -> bool {
        let start = Instant::now();
        while start.elapsed() < deadline {
            if check() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        check()
    }

    #[test]
    fn sweeps_periodically() {
        let counter = Arc::new(AtomicUsize::new(0));
        let _sweeper = Sweeper::spawn(
            Arc::downgrade(&counter),
            Duration::from_millis(10),
            |counter: &AtomicUsize| {
                counter.fetch_add(1, Ordering::Relaxed);
            },
        );

        assert!(wait_until(Duration::from_secs(5), || {
            counter.load(Ordering::Relaxed) >= 3
        }));
    }

    #[test]
    fn stops_when_dropped() {
        let counter = Arc::new(AtomicUsize::new(0));
        let sweeper = Sweeper::spawn(
            Arc::downgrade(&counter),
            Duration::from_millis(10),
            |counter: &AtomicUsize| {
                counter.fetch_add(1, Ordering::Relaxed);
            },
        );
        drop(sweeper);

        // Let any in-flight sweep finish before sampling.
        thread::sleep(Duration::from_millis(50));
        let seen = counter.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(counter.load(Ordering::Relaxed), seen);
    }

    #[test]
    fn stops_when_target_is_gone() {
        let target = Arc::new(AtomicUsize::new(0));
        let mut sweeper = Sweeper::spawn(
            Arc::downgrade(&target),
            Duration::from_millis(5),
            |_: &AtomicUsize| {},
        );
        drop(target);

        let handle = sweeper._handle.take().expect("thread spawned");
        handle.join().expect("sweep thread exits cleanly");
    }
}
