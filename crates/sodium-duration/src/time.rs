use core::time::Duration;

/// Common time units.
///
/// Each unit exposes its magnitude in milliseconds ([`Time::millis`]) and in
/// seconds ([`Time::seconds`]). Sub-millisecond units are fractional, which is
/// why both are `f64`. Use [`Time::duration`] when an exact
/// [`core::time::Duration`] is needed.
///
/// # Example
///
/// ```
/// use sodium_duration::Time;
///
/// assert_eq!(Time::Day.millis(), 86_400_000.0);
/// assert_eq!(Time::Hour.seconds(), 3_600.0);
/// assert_eq!(Time::Minute.duration().as_secs(), 60);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Time {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    /// 30 days
    Month,
    /// 365 days
    Year,
    /// Average month (365.25d / 12)
    AverageMonth,
    /// Average year (365.25d, accounting for leap years)
    AverageYear,
}

impl Time {
    /// Every unit, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::AverageMonth,
        Self::AverageYear,
    ];

    /// Exact magnitude of the unit in nanoseconds.
    pub const fn nanos(self) -> u64 {
        match self {
            Self::Nanosecond => 1,
            Self::Microsecond => 1_000,
            Self::Millisecond => 1_000_000,
            Self::Second => 1_000_000_000,
            Self::Minute => 60_000_000_000,
            Self::Hour => 3_600_000_000_000,
            Self::Day => 86_400_000_000_000,
            Self::Week => 604_800_000_000_000,
            Self::Month => 2_592_000_000_000_000,
            Self::Year => 31_536_000_000_000_000,
            Self::AverageMonth => 2_629_800_000_000_000,
            Self::AverageYear => 31_557_600_000_000_000,
        }
    }

    /// Magnitude of the unit in milliseconds.
    pub const fn millis(self) -> f64 {
        match self {
            Self::Nanosecond => 0.000_001,
            Self::Microsecond => 0.001,
            Self::Millisecond => 1.0,
            Self::Second => 1_000.0,
            Self::Minute => 60_000.0,
            Self::Hour => 3_600_000.0,
            Self::Day => 86_400_000.0,
            Self::Week => 604_800_000.0,
            Self::Month => 2_592_000_000.0,
            Self::Year => 31_536_000_000.0,
            Self::AverageMonth => 2_629_800_000.0,
            Self::AverageYear => 31_557_600_000.0,
        }
    }

    /// Magnitude of the unit in seconds.
    pub const fn seconds(self) -> f64 {
        match self {
            Self::Nanosecond => 0.000_000_001,
            Self::Microsecond => 0.000_001,
            Self::Millisecond => 0.001,
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Week => 604_800.0,
            Self::Month => 2_592_000.0,
            Self::Year => 31_536_000.0,
            Self::AverageMonth => 2_629_800.0,
            Self::AverageYear => 31_557_600.0,
        }
    }

    /// The unit as a [`Duration`].
    pub const fn duration(self) -> Duration {
        Duration::from_nanos(self.nanos())
    }
}

impl From<Time> for Duration {
    fn from(time: Time) -> Self {
        time.duration()
    }
}
