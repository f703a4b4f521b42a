//! Lightweight TTL caches.
//!
//! - [`Cache`]: key-value map where every entry carries its own expiry.
//!   Expired entries are evicted when read and by a periodic background
//!   sweep.
//! - [`ValueCache`]: a single slot cleared by a one-shot timer.
//!
//! Both are internally locked and can be shared across threads. Their
//! background threads stop when the cache is dropped and never keep the
//! process alive.

mod cache;
mod error;
mod options;
mod sweeper;
mod value;

pub use crate::cache::*;
pub use crate::error::*;
pub use crate::options::*;
pub use crate::value::*;
pub use sodium_duration::{SystemClock, TimeSource};
