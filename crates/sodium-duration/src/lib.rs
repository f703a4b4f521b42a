mod clock;
mod time;

pub use crate::clock::*;
pub use crate::time::*;
