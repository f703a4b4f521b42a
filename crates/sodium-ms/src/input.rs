use crate::{Locales, Options, Result};

/// A value [`ms`](crate::ms) can convert: text is parsed into milliseconds,
/// numbers are formatted into text.
pub trait MsInput {
    type Output;

    fn convert(self, locales: &Locales, options: &Options) -> Result<Self::Output>;
}

impl MsInput for &str {
    type Output = Option<f64>;

    fn convert(self, locales: &Locales, options: &Options) -> Result<Self::Output> {
        locales.parse(self, options)
    }
}

impl MsInput for &String {
    type Output = Option<f64>;

    fn convert(self, locales: &Locales, options: &Options) -> Result<Self::Output> {
        locales.parse(self, options)
    }
}

impl MsInput for f64 {
    type Output = String;

    fn convert(self, locales: &Locales, options: &Options) -> Result<Self::Output> {
        locales.format(self, options)
    }
}

macro_rules! impl_ms_input_for_number {
    ($($ty:ty),*) => {
        $(
            impl MsInput for $ty {
                type Output = String;

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn convert(self, locales: &Locales, options: &Options) -> Result<Self::Output> {
                    locales.format(self as f64, options)
                }
            }
        )*
    };
}

impl_ms_input_for_number!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
