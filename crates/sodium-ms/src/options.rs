/// The locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en";

/// Options shared by parsing and formatting.
///
/// `long`, `compound` and `max_units` only affect formatting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options {
    /// Locale code, `en` by default.
    pub locale: String,
    /// Write unit names in full: `5 days` instead of `5d`.
    pub long: bool,
    /// Split the duration over several units: `2m50s100ms` instead of `3m`.
    pub compound: bool,
    /// In compound mode, stop after this many non-zero units. Zero means no
    /// limit.
    pub max_units: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            long: false,
            compound: false,
            max_units: 0,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn long(mut self, long: bool) -> Self {
        self.long = long;
        self
    }

    #[must_use]
    pub fn compound(mut self, compound: bool) -> Self {
        self.compound = compound;
        self
    }

    #[must_use]
    pub fn max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }
}
