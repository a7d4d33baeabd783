use thiserror::Error;

use crate::config::{SettingsError, TIME_BITS};

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// The settings were rejected at construction
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] SettingsError),
    /// Elapsed ticks no longer fit the time field. The generator is exhausted.
    #[error("timestamp {elapsed} is over the {bits}-bit capacity of Snowflake", bits = TIME_BITS)]
    TimestampOverflow { elapsed: i64 },
    /// A negative value was given where an ID or a field was expected
    #[error("input {value} is negative")]
    NegativeInput { value: i64 },
}
