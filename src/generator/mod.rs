//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last tick and sequence guarded by the lock
//! - `time` - Clock abstraction and tick conversion
//! - `wait` - Sleep computation for sequence exhaustion
//! - `generate` - ID generation logic

mod generate;
mod state;
mod time;
mod wait;

use parking_lot::Mutex;

use crate::config::{Settings, MACHINE_ID_MASK};
use crate::error::SnowflakeError;
use crate::hash::hash;

pub use time::{Clock, SystemClock};
pub(crate) use time::{to_ticks, unix_nanos};

use state::State;

/// Snowflake ID generator for one process or shard.
///
/// Each instance owns its counter; instances never share state. Calls to
/// [`Snowflake::next_id`] on the same instance are serialized by an internal
/// lock, which is also held while the caller waits out an exhausted tick.
#[derive(Debug)]
pub struct Snowflake<C = SystemClock> {
    state: Mutex<State>,
    epoch: i64,
    machine_id: u16,
    clock: C,
}

impl Snowflake<SystemClock> {
    /// Create a generator reading the system wall clock
    pub fn new(settings: Settings) -> Result<Self, SnowflakeError> {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create a generator driven by `clock`.
    ///
    /// Fails with [`SnowflakeError::InvalidConfiguration`] when the epoch is
    /// missing or ahead of `clock.now()`, or when the identity is empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(identity = %settings.identity)))]
    pub fn with_clock(settings: Settings, clock: C) -> Result<Self, SnowflakeError> {
        let start = settings.validate(clock.now())?;
        let machine_id = hash(&settings.identity, MACHINE_ID_MASK);

        #[cfg(feature = "tracing")]
        tracing::debug!(machine_id, epoch = %start, "Snowflake generator created");

        Ok(Self {
            state: Mutex::new(State::default()),
            epoch: to_ticks(start),
            machine_id,
            clock,
        })
    }

    /// Machine ID hashed from the configured identity
    #[inline(always)]
    pub fn machine_id(&self) -> u16 {
        self.machine_id
    }

    /// Epoch in ticks since the Unix epoch
    #[inline(always)]
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Clock the generator reads and sleeps on
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
