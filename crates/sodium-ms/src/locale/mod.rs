mod builtin;

use crate::Unit;
use core::fmt;
use std::sync::Arc;

type LongForm = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// How one unit is written and read in a locale.
#[derive(Clone)]
pub struct UnitDefinition {
    short: String,
    long: LongForm,
    names: Vec<String>,
}

impl UnitDefinition {
    /// Creates a definition from its short suffix, a long-form function and
    /// the names accepted when parsing.
    ///
    /// `long` receives the absolute value of the amount being printed. Names
    /// are matched case-insensitively; `short` and the long forms are not
    /// added to them automatically.
    pub fn new<N, S>(
        short: impl Into<String>,
        long: impl Fn(f64) -> String + Send + Sync + 'static,
        names: N,
    ) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            short: short.into(),
            long: Arc::new(long),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A definition whose long form is `plural` for counts above one and
    /// `singular` otherwise.
    ///
    /// ```
    /// use sodium_ms::UnitDefinition;
    ///
    /// let day = UnitDefinition::plural("d", "day", "days", ["days", "day", "d"]);
    /// assert_eq!(day.long(1.0), "day");
    /// assert_eq!(day.long(3.0), "days");
    /// assert_eq!(day.long(0.0), "day");
    /// ```
    pub fn plural<N, S>(
        short: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
        names: N,
    ) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let singular = singular.into();
        let plural = plural.into();
        Self::new(
            short,
            move |count| {
                if count > 1.0 {
                    plural.clone()
                } else {
                    singular.clone()
                }
            },
            names,
        )
    }

    /// A definition whose long form never changes with the count.
    pub fn invariant<N, S>(short: impl Into<String>, long: impl Into<String>, names: N) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let long = long.into();
        Self::new(short, move |_| long.clone(), names)
    }

    /// The suffix used by the short format, e.g. `ms`.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// The word used by the long format for `count` units.
    pub fn long(&self, count: f64) -> String {
        (self.long)(count)
    }

    /// The names recognized when parsing.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl fmt::Debug for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitDefinition")
            .field("short", &self.short)
            .field("long", &format_args!("{:?}/{:?}", self.long(1.0), self.long(2.0)))
            .field("names", &self.names)
            .finish()
    }
}

/// The translations of every [`Unit`] for one locale.
#[derive(Clone, Debug)]
pub struct LocaleDefinition {
    pub millisecond: UnitDefinition,
    pub second: UnitDefinition,
    pub minute: UnitDefinition,
    pub hour: UnitDefinition,
    pub day: UnitDefinition,
    pub week: UnitDefinition,
    pub month: UnitDefinition,
    pub year: UnitDefinition,
}

impl LocaleDefinition {
    pub fn unit(&self, unit: Unit) -> &UnitDefinition {
        match unit {
            Unit::Millisecond => &self.millisecond,
            Unit::Second => &self.second,
            Unit::Minute => &self.minute,
            Unit::Hour => &self.hour,
            Unit::Day => &self.day,
            Unit::Week => &self.week,
            Unit::Month => &self.month,
            Unit::Year => &self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_long_form() {
        let month = UnitDefinition::invariant("mo", "mois", ["mois", "mo"]);
        assert_eq!(month.long(1.0), "mois");
        assert_eq!(month.long(12.0), "mois");
        assert_eq!(month.short(), "mo");
        assert_eq!(month.names(), ["mois", "mo"]);
    }

    #[test]
    fn custom_long_form() {
        let second = UnitDefinition::new("s", |count| format!("{count}x"), ["s"]);
        assert_eq!(second.long(3.0), "3x");
    }

    #[test]
    fn unit_lookup() {
        let en = LocaleDefinition::english();
        for unit in Unit::ALL {
            assert_eq!(en.unit(unit).long(1.0), unit.name());
        }
    }

    #[test]
    fn debug_shows_long_forms() {
        let en = LocaleDefinition::english();
        let debug = format!("{:?}", en.day);
        assert!(debug.contains(r#""day"/"days""#), "{debug}");
    }
}
