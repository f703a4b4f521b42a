mod deconstructed;
mod options;
mod snowflake;

pub use deconstructed::*;
pub use options::*;
pub use snowflake::*;
