use regex::Regex;
use std::sync::LazyLock;

use crate::{Error, Result, Unit, registry::Locale};

/// Longest text accepted by the parser, in UTF-16 code units. Characters
/// outside the Basic Multilingual Plane count twice.
pub const MAX_INPUT_LEN: usize = 100;

/// A number followed by an optional unit name. `[0-9]` instead of `\d` keeps
/// non-ASCII digits out.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-?[0-9]*\.?[0-9]+) *([a-zàèìòùáéíóúýâêîôûãñõäëïöüÿçµ]+)?")
        .expect("token pattern is valid")
});

pub(crate) fn check_len(text: &str) -> Result<()> {
    let len = text.encode_utf16().count();
    if len == 0 || len > MAX_INPUT_LEN {
        return Err(Error::InvalidInput {
            reason: format!(
                "text to parse must be 1 to {MAX_INPUT_LEN} UTF-16 code units long, got {len}: {text:?}"
            ),
        });
    }
    Ok(())
}

/// Sums every `<number> <unit>` token in `text`.
///
/// Anything but whitespace between or after tokens, an unknown unit name or
/// the absence of any token yields `None`.
pub(crate) fn parse(locale: &Locale, text: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut consumed = false;
    let mut last = 0;

    for captures in TOKEN.captures_iter(text) {
        let token = captures.get(0)?;
        if !text[last..token.start()].trim().is_empty() {
            return None;
        }

        let value: f64 = captures[1].parse().ok()?;
        let unit = match captures.get(2) {
            Some(name) => locale.unit_named(&name.as_str().to_lowercase())?,
            None => Unit::Millisecond,
        };

        total += value * unit.millis();
        consumed = true;
        last = token.end();
    }

    (consumed && text[last..].trim().is_empty()).then_some(total)
}

#[cfg(test)]
mod tests {
    use crate::{Error, Locales, Options, parse};

    fn en(text: &str) -> Option<f64> {
        parse(text, &Options::default()).unwrap()
    }

    fn with(locale: &str, text: &str) -> Option<f64> {
        parse(text, &Options::new().locale(locale)).unwrap()
    }

    #[test]
    fn plain_numbers_are_milliseconds() {
        assert_eq!(en("100"), Some(100.0));
        assert_eq!(en("1.5"), Some(1.5));
        assert_eq!(en(".5"), Some(0.5));
        assert_eq!(en("-20"), Some(-20.0));
    }

    #[test]
    fn english_units() {
        assert_eq!(en("1s"), Some(1_000.0));
        assert_eq!(en("2 minutes"), Some(120_000.0));
        assert_eq!(en("1h"), Some(3_600_000.0));
        assert_eq!(en("1.5h"), Some(5_400_000.0));
        assert_eq!(en("2d"), Some(172_800_000.0));
        assert_eq!(en("1 week"), Some(604_800_000.0));
        assert_eq!(en("1mo"), Some(2_592_000_000.0));
        assert_eq!(en("1y"), Some(31_536_000_000.0));
        assert_eq!(en("-3 days"), Some(-259_200_000.0));
        assert_eq!(en("53 msecs"), Some(53.0));
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(en("1H"), Some(3_600_000.0));
        assert_eq!(en("2 Days"), Some(172_800_000.0));
        assert_eq!(with("fr", "1 ANNÉE"), Some(31_536_000_000.0));
    }

    #[test]
    fn tokens_add_up() {
        assert_eq!(en("1h 30m"), Some(5_400_000.0));
        assert_eq!(en("1h30m10s"), Some(5_410_000.0));
        assert_eq!(en("1d 2"), Some(86_400_002.0));
        assert_eq!(en("  5m  "), Some(300_000.0));
    }

    #[test]
    fn french() {
        assert_eq!(with("fr", "1 année"), Some(31_536_000_000.0));
        assert_eq!(with("fr", "5 jours"), Some(432_000_000.0));
        assert_eq!(with("fr", "3j2secondes"), Some(259_202_000.0));
        assert_eq!(with("fr", "2 mois"), Some(5_184_000_000.0));
    }

    #[test]
    fn german_and_spanish() {
        assert_eq!(with("de", "2 Tage"), Some(172_800_000.0));
        assert_eq!(with("de", "1j"), Some(31_536_000_000.0));
        assert_eq!(with("es", "3 días"), Some(259_200_000.0));
        assert_eq!(with("es", "1 año 1 mes"), Some(34_128_000_000.0));
    }

    #[test]
    fn unparseable_text_is_none() {
        assert_eq!(en("abc"), None);
        assert_eq!(en("10 lightyears"), None);
        assert_eq!(en("x 5m"), None);
        assert_eq!(en("5m x"), None);
        assert_eq!(en("5m, 3s"), None);
        assert_eq!(en(" "), None);
        assert_eq!(with("fr", "1 day"), None);
    }

    #[test]
    fn length_is_bounded() {
        let err = parse("", &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        let long = "1".repeat(101);
        assert!(matches!(
            parse(&long, &Options::default()),
            Err(Error::InvalidInput { .. })
        ));
        assert!(en(&"1".repeat(100)).is_some());
        // Bounded by UTF-16 code units, not bytes nor scalar values.
        assert!(parse(&"é".repeat(100), &Options::default()).is_ok());
        assert!(parse(&"😀".repeat(50), &Options::default()).is_ok());
        assert!(matches!(
            parse(&"😀".repeat(51), &Options::default()),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn unknown_locale() {
        let err = parse("1s", &Options::new().locale("xx")).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownLocale {
                locale: "xx".to_owned()
            }
        );
        assert!(Locales::empty().parse("1s", &Options::default()).is_err());
    }
}
