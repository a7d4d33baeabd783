//! Counter state guarded by the generator lock

use crate::config::SEQUENCE_MASK;

/// Last issued tick and the sequence used within it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) elapsed: i64,
    pub(crate) sequence: u16,
}

impl State {
    /// Move the counter forward for a request observed at tick `current`.
    ///
    /// A strictly later tick resets the sequence. Anything else, including a
    /// clock equal to or behind the last tick, increments it. When the
    /// increment wraps, the state moves one tick past the last one and the
    /// number of ticks it now sits ahead of `current` is returned.
    #[inline]
    pub(crate) fn advance(&mut self, current: i64) -> Option<i64> {
        if current > self.elapsed {
            self.elapsed = current;
            self.sequence = 0;
            return None;
        }

        self.sequence = (self.sequence + 1) & SEQUENCE_MASK;
        if self.sequence != 0 {
            return None;
        }

        self.elapsed += 1;
        Some(self.elapsed - current)
    }
}
