//! Locale-aware conversion between human-readable durations and
//! milliseconds.
//!
//! ```
//! use sodium_ms::{Options, ms};
//!
//! assert_eq!(ms("1h 30m", &Options::default()).unwrap(), Some(5_400_000.0));
//! assert_eq!(ms(5_400_000, &Options::default()).unwrap(), "2h");
//!
//! let fr = Options::new().locale("fr").long(true);
//! assert_eq!(ms("5 jours", &fr).unwrap(), Some(432_000_000.0));
//! assert_eq!(ms(432_000_000, &fr).unwrap(), "5 jours");
//!
//! let compound = Options::new().compound(true);
//! assert_eq!(ms(170_100, &compound).unwrap(), "2m50s100ms");
//! ```
//!
//! Parsing is lenient: text that is not a duration yields `Ok(None)` rather
//! than an error. Errors are reserved for empty or oversized text, non-finite
//! numbers and unknown locales.

mod error;
mod format;
mod input;
mod locale;
mod options;
mod parse;
mod registry;
mod unit;

pub use crate::error::*;
pub use crate::input::*;
pub use crate::locale::*;
pub use crate::options::*;
pub use crate::parse::MAX_INPUT_LEN;
pub use crate::registry::*;
pub use crate::unit::*;

/// Parses `text` into milliseconds with the built-in locales.
///
/// See [`Locales::parse`].
pub fn parse(text: &str, options: &Options) -> Result<Option<f64>> {
    Locales::builtin().parse(text, options)
}

/// Formats `ms` milliseconds with the built-in locales.
///
/// See [`Locales::format`].
pub fn format(ms: f64, options: &Options) -> Result<String> {
    Locales::builtin().format(ms, options)
}

/// Parses text or formats a number, depending on the type of `value`.
pub fn ms<I: MsInput>(value: I, options: &Options) -> Result<I::Output> {
    value.convert(Locales::builtin(), options)
}
