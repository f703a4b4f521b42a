use core::fmt;
use sodium_duration::Time;

/// A unit a duration can be parsed from or formatted into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
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
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];

    /// Every unit, largest first. Formatting walks units in this order.
    pub const DESCENDING: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    pub const fn time(self) -> Time {
        match self {
            Self::Millisecond => Time::Millisecond,
            Self::Second => Time::Second,
            Self::Minute => Time::Minute,
            Self::Hour => Time::Hour,
            Self::Day => Time::Day,
            Self::Week => Time::Week,
            Self::Month => Time::Month,
            Self::Year => Time::Year,
        }
    }

    /// Magnitude of the unit in milliseconds.
    pub const fn millis(self) -> f64 {
        self.time().millis()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
