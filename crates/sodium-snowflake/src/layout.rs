//! Bit layout of a 64-bit snowflake.
//!
//! ```text
//!  Bit Index:  63             22 21        17 16         12 11             0
//!              +----------------+------------+-------------+---------------+
//!  Field:      | timestamp (42) | worker (5) | process (5) | increment (12)|
//!              +----------------+------------+-------------+---------------+
//!              |<----- MSB ---------------- 64 bits --------------- LSB ----->|
//! ```
//!
//! The timestamp field holds milliseconds elapsed since the codec's epoch.

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// Bitmask for the 42-bit timestamp field. Occupies bits 22 through 63.
pub const TIMESTAMP_MASK: u64 = (1 << 42) - 1;

/// Bitmask for the 5-bit worker ID field. Occupies bits 17 through 21.
pub const WORKER_ID_MASK: u64 = 0b11111;

/// Bitmask for the 5-bit process ID field. Occupies bits 12 through 16.
pub const PROCESS_ID_MASK: u64 = 0b11111;

/// Bitmask for the 12-bit increment field. Occupies bits 0 through 11.
pub const INCREMENT_MASK: u64 = 0b1111_1111_1111;

/// Number of bits to shift the timestamp to its position (bit 22).
pub const TIMESTAMP_SHIFT: u32 = 22;

/// Number of bits to shift the worker ID to its position (bit 17).
pub const WORKER_ID_SHIFT: u32 = 17;

/// Number of bits to shift the process ID to its position (bit 12).
pub const PROCESS_ID_SHIFT: u32 = 12;

/// The maximum value the worker ID field accepts.
pub const MAX_WORKER_ID: u8 = WORKER_ID_MASK as u8;

/// The maximum value the process ID field accepts.
pub const MAX_PROCESS_ID: u8 = PROCESS_ID_MASK as u8;

/// The maximum value the increment field accepts.
pub const MAX_INCREMENT: u16 = INCREMENT_MASK as u16;

/// Packs the four fields into a snowflake.
///
/// `elapsed` is the signed distance from the epoch. It is shifted as-is and
/// truncated to 64 bits, so a negative value (a timestamp before the epoch)
/// yields its two's-complement bit pattern rather than an error. The other
/// fields are masked to their width before shifting.
pub const fn pack(elapsed: i128, worker_id: u64, process_id: u64, increment: u64) -> u64 {
    let timestamp = (elapsed << TIMESTAMP_SHIFT) as u64;
    let worker_id = (worker_id & WORKER_ID_MASK) << WORKER_ID_SHIFT;
    let process_id = (process_id & PROCESS_ID_MASK) << PROCESS_ID_SHIFT;
    let increment = increment & INCREMENT_MASK;
    timestamp | worker_id | process_id | increment
}

/// Extracts the elapsed-milliseconds field.
pub const fn elapsed(id: u64) -> u64 {
    (id >> TIMESTAMP_SHIFT) & TIMESTAMP_MASK
}

/// Extracts the worker ID field.
pub const fn worker_id(id: u64) -> u8 {
    ((id >> WORKER_ID_SHIFT) & WORKER_ID_MASK) as u8
}

/// Extracts the process ID field.
pub const fn process_id(id: u64) -> u8 {
    ((id >> PROCESS_ID_SHIFT) & PROCESS_ID_MASK) as u8
}

/// Extracts the increment field.
pub const fn increment(id: u64) -> u16 {
    (id & INCREMENT_MASK) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_do_not_overlap() {
        let timestamp = TIMESTAMP_MASK << TIMESTAMP_SHIFT;
        let worker = WORKER_ID_MASK << WORKER_ID_SHIFT;
        let process = PROCESS_ID_MASK << PROCESS_ID_SHIFT;
        let increment = INCREMENT_MASK;

        assert_eq!(timestamp & worker, 0);
        assert_eq!(worker & process, 0);
        assert_eq!(process & increment, 0);
        assert_eq!(timestamp | worker | process | increment, u64::MAX);
    }

    #[test]
    fn pack_and_extract() {
        let id = pack(1_000, 2, 3, 4);
        assert_eq!(elapsed(id), 1_000);
        assert_eq!(worker_id(id), 2);
        assert_eq!(process_id(id), 3);
        assert_eq!(increment(id), 4);
    }

    #[test]
    fn pack_truncates_overrange_fields() {
        assert_eq!(pack(0, 32, 0, 0), pack(0, 0, 0, 0));
        assert_eq!(pack(0, 0, 33, 0), pack(0, 0, 1, 0));
        assert_eq!(pack(0, 0, 0, 4096 + 7), pack(0, 0, 0, 7));
    }

    #[test]
    fn pack_max_values() {
        let id = pack(TIMESTAMP_MASK as i128, 31, 31, 4095);
        assert_eq!(id, u64::MAX);
        assert_eq!(elapsed(id), TIMESTAMP_MASK);
        assert_eq!(worker_id(id), MAX_WORKER_ID);
        assert_eq!(process_id(id), MAX_PROCESS_ID);
        assert_eq!(increment(id), MAX_INCREMENT);
    }

    #[test]
    fn negative_elapsed_is_twos_complement() {
        let id = pack(-1, 0, 0, 0);
        assert_eq!(id, u64::MAX << TIMESTAMP_SHIFT);
        assert_eq!(elapsed(id), TIMESTAMP_MASK);
    }
}
