//! Packing and unpacking of the Snowflake bit layout
//!
//! ```text
//!  63  62                       22 21          10 9          0
//! +---+---------------------------+--------------+------------+
//! | 0 |  elapsed ticks (41 bits)  | machine (12) |  seq (10)  |
//! +---+---------------------------+--------------+------------+
//! ```
//!
//! Nothing here needs a generator; IDs minted by any process with the same
//! layout can be decomposed.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::{
    MACHINE_ID_MASK, MACHINE_ID_SHIFT, SEQUENCE_MASK, TICK, TICK_NANOS, TIME_MASK, TIME_SHIFT,
};
use crate::error::SnowflakeError;

/// Parts of a Snowflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct Decomposition {
    pub id: i64,
    /// Ticks elapsed since the generator's epoch
    pub time: i64,
    pub sequence: i64,
    pub machine_id: i64,
}

impl Decomposition {
    /// Elapsed time since the epoch as a duration. A negative `time` counts as zero.
    pub fn elapsed(&self) -> Duration {
        let ticks = u64::try_from(self.time).unwrap_or(0);
        Duration::from_nanos(ticks.saturating_mul(TICK.as_nanos() as u64))
    }

    /// Wall-clock time the ID was minted at, given the generator's epoch.
    ///
    /// The epoch is truncated to whole ticks the same way the generator does.
    /// Returns `None` when the result is outside chrono's date range.
    pub fn generated_at(&self, epoch: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let ticks = crate::generator::to_ticks(epoch) as i128 + self.time as i128;
        let nanos = ticks * TICK_NANOS as i128;
        let secs = i64::try_from(nanos.div_euclid(1_000_000_000)).ok()?;
        let subsec = nanos.rem_euclid(1_000_000_000) as u32;
        DateTime::from_timestamp(secs, subsec)
    }
}

/// Pack the parts of an ID.
///
/// `machine_id` and `sequence` are masked to their widths. Fails when
/// `elapsed` is negative or does not fit the 41-bit time field.
#[inline]
pub fn compose(elapsed: i64, machine_id: u16, sequence: u16) -> Result<i64, SnowflakeError> {
    if elapsed < 0 {
        return Err(SnowflakeError::NegativeInput { value: elapsed });
    }
    if elapsed > TIME_MASK {
        return Err(SnowflakeError::TimestampOverflow { elapsed });
    }
    Ok(elapsed << TIME_SHIFT
        | ((machine_id & MACHINE_ID_MASK) as i64) << MACHINE_ID_SHIFT
        | (sequence & SEQUENCE_MASK) as i64)
}

/// Split an ID into its parts. Fails for negative input.
pub fn decompose(id: i64) -> Result<Decomposition, SnowflakeError> {
    if id < 0 {
        return Err(SnowflakeError::NegativeInput { value: id });
    }
    Ok(Decomposition {
        id,
        time: time_part(id),
        sequence: sequence_number(id),
        machine_id: machine_id(id),
    })
}

/// Elapsed time encoded in an ID
pub fn elapsed_time(id: i64) -> Result<Duration, SnowflakeError> {
    decompose(id).map(|parts| parts.elapsed())
}

/// Elapsed ticks field
#[inline(always)]
pub fn time_part(id: i64) -> i64 {
    id >> TIME_SHIFT
}

/// Sequence field
#[inline(always)]
pub fn sequence_number(id: i64) -> i64 {
    id & SEQUENCE_MASK as i64
}

/// Machine ID field
#[inline(always)]
pub fn machine_id(id: i64) -> i64 {
    (id >> MACHINE_ID_SHIFT) & MACHINE_ID_MASK as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let id = compose(0x1234567, 42, 123).unwrap();

        assert_eq!(time_part(id), 0x1234567);
        assert_eq!(machine_id(id), 42);
        assert_eq!(sequence_number(id), 123);

        let parts = decompose(id).unwrap();
        assert_eq!(
            parts,
            Decomposition {
                id,
                time: 0x1234567,
                sequence: 123,
                machine_id: 42,
            }
        );
    }

    #[test]
    fn test_component_boundaries() {
        let id = compose(TIME_MASK, MACHINE_ID_MASK, SEQUENCE_MASK).unwrap();
        assert_eq!(id, i64::MAX);

        let parts = decompose(id).unwrap();
        assert_eq!(parts.time, TIME_MASK);
        assert_eq!(parts.machine_id, MACHINE_ID_MASK as i64);
        assert_eq!(parts.sequence, SEQUENCE_MASK as i64);
    }

    #[test]
    fn test_compose_masks_narrow_fields() {
        assert_eq!(compose(0, 0x1FFF, 0).unwrap(), compose(0, 0xFFF, 0).unwrap());
        assert_eq!(compose(0, 0, 0x7FF).unwrap(), 0x3FF);
    }

    #[test]
    fn test_compose_rejects_out_of_range_time() {
        assert_eq!(
            compose(TIME_MASK + 1, 0, 0),
            Err(SnowflakeError::TimestampOverflow {
                elapsed: TIME_MASK + 1
            })
        );
        assert_eq!(
            compose(-1, 0, 0),
            Err(SnowflakeError::NegativeInput { value: -1 })
        );
    }

    #[test]
    fn test_elapsed_duration() {
        let id = compose(1000, 7, 3).unwrap();
        assert_eq!(
            elapsed_time(id).unwrap(),
            Duration::from_nanos(1000 * 1_048_576)
        );
        assert_eq!(
            elapsed_time(-5),
            Err(SnowflakeError::NegativeInput { value: -5 })
        );
    }

    #[test]
    fn test_generated_at() {
        let epoch = DateTime::from_timestamp_nanos(100 * TICK_NANOS);
        let parts = decompose(compose(25, 1, 0).unwrap()).unwrap();
        assert_eq!(
            parts.generated_at(epoch),
            Some(DateTime::from_timestamp_nanos(125 * TICK_NANOS))
        );
    }

    #[test]
    fn test_generated_at_out_of_range() {
        let parts = decompose(i64::MAX).unwrap();
        assert_eq!(parts.generated_at(DateTime::<Utc>::MAX_UTC), None);
        assert!(parts.generated_at(DateTime::<Utc>::UNIX_EPOCH).is_some());
    }

    #[test]
    fn test_elapsed_of_hand_built_parts() {
        let negative = Decomposition {
            id: 0,
            time: -3,
            sequence: 0,
            machine_id: 0,
        };
        assert_eq!(negative.elapsed(), Duration::ZERO);

        let max = decompose(i64::MAX).unwrap();
        assert_eq!(max.elapsed(), Duration::from_nanos(TIME_MASK as u64 * 1_048_576));
    }
}
