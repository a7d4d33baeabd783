//! Time sources for Snowflake generation
//!
//! Converts wall-clock readings into ticks and abstracts the clock so tests
//! can drive tick boundaries without sleeping.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::TICK_NANOS;

/// Source of the current time and of blocking waits.
///
/// The generator reads [`Clock::now`] once per request and calls
/// [`Clock::sleep`] while holding its lock when a tick's sequence space is
/// exhausted.
pub trait Clock {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;

    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration);
}

/// System wall clock; sleeps the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Nanoseconds since the Unix epoch, without the 2262 limit of `i64` nanos
#[inline(always)]
pub(crate) fn unix_nanos(time: DateTime<Utc>) -> i128 {
    time.timestamp() as i128 * 1_000_000_000 + time.timestamp_subsec_nanos() as i128
}

/// Whole ticks since the Unix epoch, truncated toward zero
#[inline(always)]
pub(crate) fn to_ticks(time: DateTime<Utc>) -> i64 {
    (unix_nanos(time) / TICK_NANOS as i128) as i64
}
