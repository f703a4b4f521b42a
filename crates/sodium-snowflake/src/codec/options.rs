use crate::Timestamp;

/// Options for [`Snowflake::generate`].
///
/// Every field is optional. Unset fields fall back to the codec's state:
///
/// - `timestamp`: the codec clock's current time
/// - `increment`: the codec's internal counter, which then advances by one
/// - `worker_id`: [`Snowflake::worker_id`]
/// - `process_id`: [`Snowflake::process_id`]
///
/// `increment`, `worker_id` and `process_id` are truncated to their field
/// width (12, 5 and 5 bits) rather than rejected.
///
/// # Example
///
/// ```
/// use sodium_snowflake::{GenerateOptions, Snowflake};
///
/// let snowflake = Snowflake::new(0);
/// let id = snowflake
///     .generate(GenerateOptions::new().timestamp(1_000_u64).worker_id(3))
///     .unwrap();
///
/// assert_eq!(snowflake.deconstruct(id).unwrap().worker_id, 3);
/// ```
///
/// [`Snowflake::generate`]: crate::Snowflake::generate
/// [`Snowflake::worker_id`]: crate::Snowflake::worker_id
/// [`Snowflake::process_id`]: crate::Snowflake::process_id
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GenerateOptions {
    pub timestamp: Option<Timestamp>,
    pub increment: Option<u64>,
    pub worker_id: Option<u64>,
    pub process_id: Option<u64>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn increment(mut self, increment: u64) -> Self {
        self.increment = Some(increment);
        self
    }

    #[must_use]
    pub fn worker_id(mut self, worker_id: u64) -> Self {
        self.worker_id = Some(worker_id);
        self
    }

    #[must_use]
    pub fn process_id(mut self, process_id: u64) -> Self {
        self.process_id = Some(process_id);
        self
    }
}
