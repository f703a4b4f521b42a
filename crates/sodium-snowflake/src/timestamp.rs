use crate::{Error, Result};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A timestamp accepted by [`Snowflake::generate`].
///
/// Integers are taken as milliseconds since the UNIX epoch. Dates are
/// converted to their millisecond timestamp. Floats must be finite and
/// integral: `1.5` milliseconds cannot be encoded and is rejected rather than
/// rounded.
///
/// Conversions are provided through `From`, so any of these work as the
/// argument to [`GenerateOptions::timestamp`]:
///
/// ```
/// use sodium_snowflake::Timestamp;
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let a = Timestamp::from(1_768_617_781_186_u64);
/// let b = Timestamp::from(UNIX_EPOCH + Duration::from_millis(1_768_617_781_186));
/// let c = Timestamp::from(1_768_617_781_186.0_f64);
///
/// assert_eq!(a.millis().unwrap(), b.millis().unwrap());
/// assert_eq!(b.millis().unwrap(), c.millis().unwrap());
/// ```
///
/// [`Snowflake::generate`]: crate::Snowflake::generate
/// [`GenerateOptions::timestamp`]: crate::GenerateOptions::timestamp
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Timestamp {
    /// Milliseconds since the UNIX epoch, possibly negative.
    Millis(i128),
    /// An unsigned 128-bit millisecond count. Values above `i128::MAX` are
    /// rejected.
    Wide(u128),
    /// A floating point millisecond count.
    Float(f64),
    /// A point in time.
    System(SystemTime),
}

impl Timestamp {
    /// Normalizes the timestamp to signed milliseconds since the UNIX epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] for a non-finite or fractional
    /// float, or for an unsigned value too wide for the codec's arithmetic.
    pub fn millis(self) -> Result<i128> {
        match self {
            Self::Millis(ms) => Ok(ms),
            Self::Wide(ms) => i128::try_from(ms).map_err(|_| Error::InvalidTimestamp {
                reason: format!("{ms} does not fit in a signed 128-bit millisecond count"),
            }),
            Self::Float(ms) => {
                if !ms.is_finite() {
                    return Err(Error::InvalidTimestamp {
                        reason: format!("{ms} is not a finite number"),
                    });
                }
                if ms.fract() != 0.0 {
                    return Err(Error::InvalidTimestamp {
                        reason: format!("{ms} is not an integral number of milliseconds"),
                    });
                }
                // Every finite integral f64 is within i128's range except the
                // very largest magnitudes.
                if ms.abs() >= 2f64.powi(127) {
                    return Err(Error::InvalidTimestamp {
                        reason: format!("{ms} is out of range"),
                    });
                }
                Ok(ms as i128)
            }
            Self::System(time) => Ok(match time.duration_since(UNIX_EPOCH) {
                Ok(after) => after.as_millis() as i128,
                Err(before) => -(before.duration().as_millis() as i128),
            }),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Timestamp {
                fn from(ms: $ty) -> Self {
                    Self::Millis(ms as i128)
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl From<u128> for Timestamp {
    fn from(ms: u128) -> Self {
        Self::Wide(ms)
    }
}

impl From<f64> for Timestamp {
    fn from(ms: f64) -> Self {
        Self::Float(ms)
    }
}

impl From<f32> for Timestamp {
    fn from(ms: f32) -> Self {
        Self::Float(f64::from(ms))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::System(time)
    }
}

/// A [`Duration`] is read as the offset from the UNIX epoch.
impl From<Duration> for Timestamp {
    fn from(since_unix_epoch: Duration) -> Self {
        Self::Millis(since_unix_epoch.as_millis() as i128)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Timestamp {
    fn from(date: chrono::DateTime<Tz>) -> Self {
        Self::Millis(i128::from(date.timestamp_millis()))
    }
}
