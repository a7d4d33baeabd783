//! Wait computation for sequence exhaustion

use std::time::Duration;

use crate::config::TICK_NANOS;

/// How long to block so that real time reaches a tick `overtime` ticks after
/// the tick containing `now_nanos`.
///
/// Subtracts the part of the current tick that has already passed, so for
/// `overtime == 1` the wait is always shorter than one tick.
#[inline]
pub(crate) fn sleep_time(overtime: i64, now_nanos: i128) -> Duration {
    let tick = TICK_NANOS as i128;
    let nanos = overtime as i128 * tick - now_nanos.rem_euclid(tick);
    Duration::from_nanos(nanos.clamp(0, u64::MAX as i128) as u64)
}
