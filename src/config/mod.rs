//! Settings and bit layout for the Snowflake generator

mod builder;

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use once_cell::sync::Lazy;
use thiserror::Error;

pub use builder::SettingsBuilder;

/// Total number of bits carried by an ID (the sign bit stays clear)
pub const ID_BITS: u32 = 63;
/// Bits used for ticks elapsed since the epoch
pub const TIME_BITS: u32 = 41;
/// Bits used for the machine ID hashed from the identity
pub const MACHINE_ID_BITS: u32 = 12;
/// Bits used for the per-tick sequence
pub const SEQUENCE_BITS: u32 = 10;

pub const TIME_MASK: i64 = (1 << TIME_BITS) - 1;
pub const MACHINE_ID_MASK: u16 = (1 << MACHINE_ID_BITS) - 1;
pub const SEQUENCE_MASK: u16 = (1 << SEQUENCE_BITS) - 1;

pub(crate) const MACHINE_ID_SHIFT: u32 = SEQUENCE_BITS;
pub(crate) const TIME_SHIFT: u32 = MACHINE_ID_BITS + SEQUENCE_BITS;

/// Length of one tick in nanoseconds (2^20 ns, about 1.048576 ms)
pub const TICK_NANOS: i64 = 1 << 20;
/// Length of one tick
pub const TICK: Duration = Duration::from_nanos(TICK_NANOS as u64);

/// Epoch used when none is configured explicitly: 2024-01-01T00:00:00Z
pub static DEFAULT_EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(1_704_067_200));

/// Errors raised while validating [`Settings`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No epoch was configured
    #[error("no start time is provided")]
    ZeroStartTime,
    /// The epoch lies after the clock reading taken at construction
    #[error("start time {start} is ahead of now ({now})")]
    StartTimeAhead {
        start: DateTime<Utc>,
        now: DateTime<Utc>,
    },
    /// The identity string is empty
    #[error("identity must not be empty")]
    EmptyIdentity,
}

/// Construction input for [`Snowflake`](crate::Snowflake)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Reference time that elapsed ticks are counted from. `None` is rejected.
    pub epoch_time: Option<DateTime<Utc>>,
    /// Opaque identity, usually a pod or host name, hashed into the machine ID
    pub identity: String,
}

impl Settings {
    /// Create settings from an epoch and an identity
    pub fn new(epoch_time: DateTime<Utc>, identity: impl Into<String>) -> Self {
        Self {
            epoch_time: Some(epoch_time),
            identity: identity.into(),
        }
    }

    /// Create a new settings builder
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Check the settings against the clock reading `now`, returning the epoch
    pub(crate) fn validate(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, SettingsError> {
        let start = self.epoch_time.ok_or(SettingsError::ZeroStartTime)?;
        if start > now {
            return Err(SettingsError::StartTimeAhead { start, now });
        }
        if self.identity.is_empty() {
            return Err(SettingsError::EmptyIdentity);
        }
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(TIME_BITS + MACHINE_ID_BITS + SEQUENCE_BITS, ID_BITS);
        assert_eq!(TIME_SHIFT, 22);
        assert_eq!(MACHINE_ID_SHIFT, 10);
        assert_eq!(MACHINE_ID_MASK, 0xFFF);
        assert_eq!(SEQUENCE_MASK, 0x3FF);
        assert_eq!(TIME_MASK, (1i64 << 41) - 1);
    }

    #[test]
    fn test_tick_length() {
        assert_eq!(TICK.as_nanos(), 1_048_576);
    }

    #[test]
    fn test_default_epoch() {
        assert_eq!(DEFAULT_EPOCH.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_validation_order() {
        let now = *DEFAULT_EPOCH;
        let empty = Settings::default();
        assert_eq!(empty.validate(now), Err(SettingsError::ZeroStartTime));

        let ahead = Settings::new(now + TimeDelta::seconds(1), "");
        assert!(matches!(
            ahead.validate(now),
            Err(SettingsError::StartTimeAhead { .. })
        ));

        let no_identity = Settings::new(now, "");
        assert_eq!(no_identity.validate(now), Err(SettingsError::EmptyIdentity));

        let ok = Settings::new(now, "pod-0");
        assert_eq!(ok.validate(now), Ok(now));
    }
}
