use core::cmp::Ordering as CmpOrdering;

use portable_atomic::{AtomicU8, AtomicU16, Ordering};
use sodium_duration::{SystemClock, TimeSource};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DISCORD_EPOCH, DeconstructedSnowflake, Error, GenerateOptions, MAX_INCREMENT, Result,
    SnowflakeInput, Timestamp, input::cmp_decimal_str, layout,
};

/// Generates and deconstructs snowflakes against a fixed epoch.
///
/// A snowflake is a 64-bit unsigned integer with four fields: milliseconds
/// elapsed since the epoch, a worker ID, a process ID and an increment. See
/// [`crate::layout`] for the exact bit positions.
///
/// The codec keeps three pieces of mutable state, all stored in atomics so a
/// shared reference can be used from several threads:
///
/// - the increment counter, used and advanced by every [`Self::generate`]
///   call that does not pass its own increment
/// - the default worker ID (initially `0`)
/// - the default process ID (initially `1`)
///
/// The increment counter is never persisted and restarts at zero with the
/// process. Assigning distinct worker/process IDs across a fleet is left to
/// the caller.
///
/// # Example
///
/// ```
/// use sodium_snowflake::{GenerateOptions, Snowflake};
///
/// let snowflake = Snowflake::discord();
/// let id = snowflake
///     .generate(GenerateOptions::new().timestamp(1_768_617_781_186_u64))
///     .unwrap();
///
/// assert_eq!(snowflake.timestamp_from(id).unwrap(), 1_768_617_781_186);
/// ```
#[derive(Debug)]
pub struct Snowflake<C = SystemClock>
where
    C: TimeSource,
{
    epoch: u64,
    increment: AtomicU16,
    worker_id: AtomicU8,
    process_id: AtomicU8,
    clock: C,
}

impl Snowflake<SystemClock> {
    /// Creates a codec for `epoch`, in milliseconds since the UNIX epoch.
    ///
    /// `generate` calls without an explicit timestamp read the system clock.
    pub fn new(epoch: u64) -> Self {
        Self::with_clock(epoch, SystemClock)
    }

    /// Creates a codec using Discord's epoch ([`DISCORD_EPOCH`]).
    pub fn discord() -> Self {
        Self::new(DISCORD_EPOCH)
    }

    /// Creates a codec whose epoch is given as a date or any other
    /// [`Timestamp`] form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the timestamp is invalid or does
    /// not fall in `0..=u64::MAX` milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use sodium_snowflake::Snowflake;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let epoch = UNIX_EPOCH + Duration::from_millis(1_420_070_400_000);
    /// let snowflake = Snowflake::from_time(epoch).unwrap();
    /// assert_eq!(snowflake.epoch(), 1_420_070_400_000);
    /// ```
    pub fn from_time(epoch: impl Into<Timestamp>) -> Result<Self> {
        let millis = epoch.into().millis()?;
        let epoch = u64::try_from(millis).map_err(|_| Error::InvalidTimestamp {
            reason: format!("epoch {millis} is outside 0..=u64::MAX milliseconds"),
        })?;
        Ok(Self::new(epoch))
    }

    /// Orders two snowflakes.
    ///
    /// - two numbers compare as unsigned integers
    /// - two strings compare by length first, then lexicographically, without
    ///   being parsed
    /// - a number and a string are both parsed, then compared as integers
    ///
    /// The string shortcut assumes no leading zeros, which holds for every
    /// snowflake this codec produces: `"010"` sorts after `"9"`. The
    /// comparison is on raw bit patterns; snowflakes from different epochs are
    /// not compared by absolute time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if a mixed comparison has to
    /// parse an invalid string.
    ///
    /// # Example
    ///
    /// ```
    /// use sodium_snowflake::Snowflake;
    ///
    /// let mut ids = ["737141877803057244", "1056191128120082432", "254360814063058944"];
    /// ids.sort_by(|a, b| Snowflake::compare(*a, *b).unwrap());
    /// assert_eq!(ids, ["254360814063058944", "737141877803057244", "1056191128120082432"]);
    /// ```
    pub fn compare<'a, 'b>(
        a: impl Into<SnowflakeInput<'a>>,
        b: impl Into<SnowflakeInput<'b>>,
    ) -> Result<CmpOrdering> {
        match (a.into(), b.into()) {
            (SnowflakeInput::Numeric(a), SnowflakeInput::Numeric(b)) => Ok(a.cmp(&b)),
            (SnowflakeInput::Text(a), SnowflakeInput::Text(b)) => Ok(cmp_decimal_str(a, b)),
            (a, b) => Ok(a.to_u64()?.cmp(&b.to_u64()?)),
        }
    }
}

impl<C> Snowflake<C>
where
    C: TimeSource,
{
    /// Creates a codec for `epoch` that reads the current time from `clock`.
    pub fn with_clock(epoch: u64, clock: C) -> Self {
        Self {
            epoch,
            increment: AtomicU16::new(0),
            worker_id: AtomicU8::new(0),
            process_id: AtomicU8::new(1),
            clock,
        }
    }

    /// The epoch, in milliseconds since the UNIX epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The worker ID used when `generate` is not given one.
    pub fn worker_id(&self) -> u8 {
        self.worker_id.load(Ordering::Relaxed)
    }

    /// Sets the default worker ID, truncated to 5 bits.
    pub fn set_worker_id(&self, worker_id: u64) {
        let worker_id = (worker_id & layout::WORKER_ID_MASK) as u8;
        self.worker_id.store(worker_id, Ordering::Relaxed);
    }

    /// The process ID used when `generate` is not given one.
    pub fn process_id(&self) -> u8 {
        self.process_id.load(Ordering::Relaxed)
    }

    /// Sets the default process ID, truncated to 5 bits.
    pub fn set_process_id(&self, process_id: u64) {
        let process_id = (process_id & layout::PROCESS_ID_MASK) as u8;
        self.process_id.store(process_id, Ordering::Relaxed);
    }

    /// The increment the next auto-incrementing `generate` call will use.
    pub fn next_increment(&self) -> u16 {
        self.increment.load(Ordering::Relaxed)
    }

    /// Generates a snowflake.
    ///
    /// When `options.increment` is unset the internal counter is used and then
    /// advanced by one, wrapping from 4095 back to 0.
    ///
    /// A timestamp earlier than the epoch is not rejected. Its negative
    /// elapsed time is packed in two's complement and will not round-trip
    /// through [`Self::deconstruct`] nor sort before post-epoch IDs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the timestamp is not an integral
    /// millisecond count. The counter is left untouched in that case.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), ret, err))]
    pub fn generate(&self, options: GenerateOptions) -> Result<u64> {
        let timestamp = match options.timestamp {
            Some(timestamp) => timestamp.millis()?,
            None => i128::from(self.clock.current_millis()),
        };

        let increment = match options.increment {
            Some(increment) => increment,
            None => u64::from(self.advance_increment()),
        };
        let worker_id = options
            .worker_id
            .unwrap_or_else(|| u64::from(self.worker_id()));
        let process_id = options
            .process_id
            .unwrap_or_else(|| u64::from(self.process_id()));

        let elapsed = timestamp.wrapping_sub(i128::from(self.epoch));
        Ok(layout::pack(elapsed, worker_id, process_id, increment))
    }

    /// Returns the current counter value and advances it modulo 4096.
    fn advance_increment(&self) -> u16 {
        let step = |current: u16| Some((current + 1) & MAX_INCREMENT);
        match self
            .increment
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, step)
        {
            Ok(previous) | Err(previous) => previous,
        }
    }

    /// Splits a snowflake into its fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if a string identifier is not a
    /// valid non-negative integer literal.
    ///
    /// # Example
    ///
    /// ```
    /// use sodium_snowflake::Snowflake;
    ///
    /// let parts = Snowflake::discord().deconstruct("1461913675098095707").unwrap();
    /// assert_eq!(parts.timestamp, 1_768_617_781_186);
    /// ```
    pub fn deconstruct<'a>(
        &self,
        id: impl Into<SnowflakeInput<'a>>,
    ) -> Result<DeconstructedSnowflake> {
        let id = id.into().to_u64()?;
        Ok(DeconstructedSnowflake {
            id,
            timestamp: self.absolute(id),
            worker_id: layout::worker_id(id),
            process_id: layout::process_id(id),
            increment: layout::increment(id),
            epoch: self.epoch,
        })
    }

    /// Returns the absolute timestamp stored in a snowflake.
    ///
    /// Equivalent to `deconstruct(id)?.timestamp` without decoding the other
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if a string identifier is not a
    /// valid non-negative integer literal.
    pub fn timestamp_from<'a>(&self, id: impl Into<SnowflakeInput<'a>>) -> Result<u64> {
        Ok(self.absolute(id.into().to_u64()?))
    }

    fn absolute(&self, id: u64) -> u64 {
        layout::elapsed(id).wrapping_add(self.epoch)
    }
}
