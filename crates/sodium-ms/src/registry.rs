use std::{collections::HashMap, sync::LazyLock};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, LocaleDefinition, Options, Result, Unit, format, parse};

/// A registered locale: its definition plus the lower-cased unit names used
/// by the parser.
#[derive(Clone, Debug)]
pub(crate) struct Locale {
    definition: LocaleDefinition,
    names: HashMap<String, Unit>,
}

impl Locale {
    fn new(definition: LocaleDefinition) -> Self {
        let mut names = HashMap::new();
        // Later units win when two units share a name.
        for unit in Unit::ALL {
            for name in definition.unit(unit).names() {
                names.insert(name.to_lowercase(), unit);
            }
        }
        Self { definition, names }
    }

    pub(crate) fn unit_named(&self, name: &str) -> Option<Unit> {
        self.names.get(name).copied()
    }
}

/// A set of locales, keyed by code.
///
/// [`Locales::default`] holds the built-in `en`, `fr`, `de` and `es`
/// locales. The free functions [`parse`](crate::parse),
/// [`format`](crate::format) and [`ms`](crate::ms) use a shared read-only
/// copy of it; build your own `Locales` to add or replace locales.
///
/// # Example
///
/// ```
/// use sodium_ms::{LocaleDefinition, Locales, Options, UnitDefinition};
///
/// let mut locales = Locales::default();
/// let mut pirate = LocaleDefinition::english();
/// pirate.day = UnitDefinition::plural("d", "sunrise", "sunrises", ["sunrises", "sunrise"]);
/// locales.set_locale("pirate", pirate);
///
/// let options = Options::new().locale("pirate").long(true);
/// assert_eq!(locales.format(172_800_000.0, &options).unwrap(), "2 sunrises");
/// assert_eq!(locales.parse("3 sunrises", &options).unwrap(), Some(259_200_000.0));
/// ```
#[derive(Clone, Debug)]
pub struct Locales {
    locales: HashMap<String, Locale>,
}

impl Default for Locales {
    fn default() -> Self {
        let mut locales = Self::empty();
        locales.set_locale("en", LocaleDefinition::english());
        locales.set_locale("fr", LocaleDefinition::french());
        locales.set_locale("de", LocaleDefinition::german());
        locales.set_locale("es", LocaleDefinition::spanish());
        locales
    }
}

impl Locales {
    /// A registry without any locale.
    pub fn empty() -> Self {
        Self {
            locales: HashMap::new(),
        }
    }

    /// The shared registry of built-in locales.
    pub fn builtin() -> &'static Self {
        static BUILTIN: LazyLock<Locales> = LazyLock::new(Locales::default);
        &BUILTIN
    }

    /// Adds a locale, replacing any previous definition for `code`.
    pub fn set_locale(&mut self, code: impl Into<String>, definition: LocaleDefinition) {
        self.locales.insert(code.into(), Locale::new(definition));
    }

    pub fn get(&self, code: &str) -> Option<&LocaleDefinition> {
        self.locales.get(code).map(|locale| &locale.definition)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Registered locale codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    fn resolve(&self, code: &str) -> Result<&Locale> {
        self.locales.get(code).ok_or_else(|| Error::UnknownLocale {
            locale: code.to_owned(),
        })
    }

    /// Parses `text` into milliseconds.
    ///
    /// Returns `Ok(None)` when the text is not a duration in the selected
    /// locale.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `text` is empty or longer than
    ///   [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) UTF-16 code units
    /// - [`Error::UnknownLocale`] if `options.locale` is not registered
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), ret, err))]
    pub fn parse(&self, text: &str, options: &Options) -> Result<Option<f64>> {
        parse::check_len(text)?;
        let locale = self.resolve(&options.locale)?;
        Ok(parse::parse(locale, text))
    }

    /// Formats `ms` milliseconds.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `ms` is NaN or infinite
    /// - [`Error::UnknownLocale`] if `options.locale` is not registered
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), ret, err))]
    pub fn format(&self, ms: f64, options: &Options) -> Result<String> {
        if !ms.is_finite() {
            return Err(Error::InvalidInput {
                reason: format!("cannot format non-finite value {ms}"),
            });
        }
        let locale = self.resolve(&options.locale)?;
        Ok(format::format(&locale.definition, ms, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitDefinition;

    #[test]
    fn builtin_codes() {
        let mut codes: Vec<&str> = Locales::builtin().codes().collect();
        codes.sort_unstable();
        assert_eq!(codes, ["de", "en", "es", "fr"]);
        assert!(Locales::empty().codes().next().is_none());
    }

    #[test]
    fn names_are_lower_cased() {
        let mut locales = Locales::empty();
        let mut shouty = LocaleDefinition::english();
        shouty.second = UnitDefinition::plural("S", "SEC", "SECS", ["SECS", "SEC"]);
        locales.set_locale("shouty", shouty);

        let options = Options::new().locale("shouty");
        assert_eq!(locales.parse("2 secs", &options), Ok(Some(2_000.0)));
        assert_eq!(locales.parse("2 SECS", &options), Ok(Some(2_000.0)));
        assert_eq!(locales.format(2_000.0, &options), Ok("2S".to_owned()));
    }

    #[test]
    fn set_locale_replaces() {
        let mut locales = Locales::default();
        let mut en = LocaleDefinition::english();
        en.minute = UnitDefinition::plural("min", "minute", "minutes", ["minutes", "min"]);
        locales.set_locale("en", en);

        let options = Options::default();
        assert_eq!(locales.format(120_000.0, &options), Ok("2min".to_owned()));
        assert_eq!(locales.parse("2m", &options), Ok(None));
        assert_eq!(Locales::builtin().format(120_000.0, &options), Ok("2m".to_owned()));
    }

    #[test]
    fn get_and_contains() {
        let locales = Locales::default();
        assert!(locales.contains("fr"));
        assert!(!locales.contains("it"));
        assert_eq!(locales.get("fr").map(|fr| fr.day.short()), Some("j"));
        assert!(locales.get("it").is_none());
    }

    #[test]
    fn later_units_win_shared_names() {
        let mut locales = Locales::empty();
        let mut clash = LocaleDefinition::english();
        clash.second = UnitDefinition::plural("s", "second", "seconds", ["x"]);
        clash.hour = UnitDefinition::plural("h", "hour", "hours", ["x"]);
        locales.set_locale("clash", clash);

        let options = Options::new().locale("clash");
        assert_eq!(locales.parse("1x", &options), Ok(Some(3_600_000.0)));
    }
}
