use core::fmt;

/// The fields of a snowflake, as returned by [`Snowflake::deconstruct`].
///
/// [`Snowflake::deconstruct`]: crate::Snowflake::deconstruct
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeconstructedSnowflake {
    /// The packed identifier.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::as_string"))]
    pub id: u64,
    /// Absolute timestamp in milliseconds since the UNIX epoch.
    pub timestamp: u64,
    pub worker_id: u8,
    pub process_id: u8,
    pub increment: u16,
    /// The epoch the timestamp was decoded against.
    pub epoch: u64,
}

impl fmt::Display for DeconstructedSnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (timestamp: {}, worker: {}, process: {}, increment: {}, epoch: {})",
            self.id, self.timestamp, self.worker_id, self.process_id, self.increment, self.epoch
        )
    }
}
