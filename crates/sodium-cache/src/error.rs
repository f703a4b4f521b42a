use core::time::Duration;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `sodium-cache` can emit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No usable TTL: none was passed to the call and the cache's default
    /// TTL is zero, or the TTL passed is zero.
    #[error("cannot store a value with no TTL (ttl: {ttl:?})")]
    NoTtl { ttl: Duration },
}
