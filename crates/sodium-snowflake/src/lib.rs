#![cfg_attr(docsrs, feature(doc_cfg))]
//! Snowflake ID codec.
//!
//! Packs a millisecond timestamp, a worker ID, a process ID and a rolling
//! increment into a sortable 64-bit identifier, and unpacks it again. See
//! [`Snowflake`] to get started and [`layout`] for the bit positions.

mod codec;
mod error;
mod input;
pub mod layout;
#[cfg(feature = "serde")]
pub mod serde;
mod timestamp;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::input::*;
pub use crate::layout::{
    DISCORD_EPOCH, MAX_INCREMENT, MAX_PROCESS_ID, MAX_WORKER_ID, PROCESS_ID_SHIFT,
    TIMESTAMP_SHIFT, WORKER_ID_SHIFT,
};
pub use crate::timestamp::*;
pub use sodium_duration::{SystemClock, TimeSource};
