//! ID generation logic

use super::wait::sleep_time;
use super::{to_ticks, unix_nanos, Clock, Snowflake};
use crate::error::SnowflakeError;
use crate::extractor::compose;

impl<C: Clock> Snowflake<C> {
    /// Generate the next ID.
    ///
    /// IDs from one instance strictly increase. When the 1024 sequence values
    /// of a tick are used up, the call moves to the next tick and blocks until
    /// real time reaches it, holding the lock so other callers queue behind.
    ///
    /// Fails with [`SnowflakeError::TimestampOverflow`] once the elapsed ticks
    /// no longer fit 41 bits (about 73 years after the epoch). Every later
    /// call fails the same way.
    pub fn next_id(&self) -> Result<i64, SnowflakeError> {
        let mut state = self.state.lock();

        let now = self.clock.now();
        let current = to_ticks(now) - self.epoch;

        if let Some(overtime) = state.advance(current) {
            let wait = sleep_time(overtime, unix_nanos(now));
            #[cfg(feature = "tracing")]
            tracing::trace!(
                elapsed = state.elapsed,
                wait_ns = wait.as_nanos() as u64,
                "sequence exhausted, waiting for next tick"
            );
            self.clock.sleep(wait);
        }

        compose(state.elapsed, self.machine_id, state.sequence)
    }
}
