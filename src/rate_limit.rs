use std::time::{Duration, Instant};

use tokio::sync::{Mutex, MutexGuard};
use tokio::time::sleep;

/// Enforces a minimum delay between successive API calls.
///
/// The completion time of the previous call is kept behind an async mutex,
/// so the spacing guarantee holds even when one client is shared across
/// tasks. [`RateLimiter::acquire`] sleeps out whatever remains of the
/// interval and returns a permit that must be held for the duration of the
/// call; dropping the permit records the completion time. Holding the lock
/// across the call also serializes overlapping requests.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Waits until `min_interval` has elapsed since the previous call
    /// completed. The first call is never delayed.
    pub(crate) async fn acquire(&self) -> RatePermit<'_> {
        let slot = self.last_call.lock().await;
        if let Some(last) = *slot {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        RatePermit { slot }
    }
}

/// Marks a call as in flight; records its completion time when dropped.
pub(crate) struct RatePermit<'a> {
    slot: MutexGuard<'a, Option<Instant>>,
}

impl Drop for RatePermit<'_> {
    fn drop(&mut self) {
        *self.slot = Some(Instant::now());
    }
}
