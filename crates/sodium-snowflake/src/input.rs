use crate::{Error, Result};
use core::cmp::Ordering;

/// A snowflake in one of its two representations.
///
/// Snowflakes routinely travel as decimal strings because they do not fit in
/// a double. Every API taking an identifier accepts either form through
/// `Into<SnowflakeInput>`:
///
/// ```
/// use sodium_snowflake::SnowflakeInput;
///
/// let numeric = SnowflakeInput::from(1_461_913_675_098_095_707_u64);
/// let text = SnowflakeInput::from("1461913675098095707");
///
/// assert_eq!(numeric.to_u64().unwrap(), text.to_u64().unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SnowflakeInput<'a> {
    Numeric(u64),
    Text(&'a str),
}

impl SnowflakeInput<'_> {
    /// Returns the numeric value, parsing the string form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if the string is empty, contains
    /// anything other than ASCII digits, or does not fit in 64 bits.
    pub fn to_u64(self) -> Result<u64> {
        match self {
            Self::Numeric(id) => Ok(id),
            Self::Text(text) => parse_decimal(text),
        }
    }
}

fn parse_decimal(text: &str) -> Result<u64> {
    // `u64::from_str` also takes a leading `+`, which is not a snowflake.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedIdentifier {
            input: text.to_owned(),
        });
    }
    text.parse().map_err(|_| Error::MalformedIdentifier {
        input: text.to_owned(),
    })
}

/// Orders two decimal strings without parsing them.
///
/// Only valid for digit strings without leading zeros: a shorter string is
/// then always the smaller number, and equal-length strings order the same
/// lexicographically as numerically.
pub(crate) fn cmp_decimal_str(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl From<u64> for SnowflakeInput<'_> {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl<'a> From<&'a str> for SnowflakeInput<'a> {
    fn from(id: &'a str) -> Self {
        Self::Text(id)
    }
}

impl<'a> From<&'a String> for SnowflakeInput<'a> {
    fn from(id: &'a String) -> Self {
        Self::Text(id.as_str())
    }
}
