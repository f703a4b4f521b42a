/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `sodium-snowflake` can emit.
///
/// Out-of-range worker, process and increment values are never an error: they
/// are truncated to their field width. Only the timestamp and string inputs
/// are validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The timestamp passed to `generate` is not an integral millisecond
    /// count (a non-finite or fractional float, or a wide integer that does
    /// not fit the codec's arithmetic).
    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    /// A string identifier is not a valid non-negative integer literal that
    /// fits in 64 bits.
    #[error("malformed snowflake identifier {input:?}")]
    MalformedIdentifier { input: String },
}
