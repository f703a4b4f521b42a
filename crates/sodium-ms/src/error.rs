pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `sodium-ms` can emit.
///
/// Input that is well-formed but cannot be understood (an unknown unit name,
/// text without any number) is not an error: parsing returns `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text to parse is empty or too long, or the number to format is
    /// not finite.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// No locale is registered under this code.
    #[error("unknown locale {locale:?}")]
    UnknownLocale { locale: String },
}
