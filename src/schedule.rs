//! Fixed-interval tick scheduling.

use std::time::{Duration, Instant};

/// Cadence of the dashboard tick loop.
pub const TICK_INTERVAL: Duration = Duration::from_secs(2);

/// Deadline bookkeeping for a fixed-cadence tick loop.
///
/// The scheduler never sleeps and owns no timer; the driver supplies the
/// current instant and decides how to wait. The first tick is due
/// immediately, and each fired tick schedules the next one interval after
/// the poll that fired it, so a late poll never causes catch-up bursts.
#[derive(Copy, Clone, Debug)]
pub struct IntervalScheduler {
    interval: Duration,
    next_due: Instant,
}

impl IntervalScheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
        }
    }

    /// Scheduler at the default dashboard cadence.
    pub fn with_default_interval(now: Instant) -> Self {
        Self::new(TICK_INTERVAL, now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next tick becomes due.
    pub fn next_deadline(&self) -> Instant {
        self.next_due
    }

    /// True when a tick is due at `now`, advancing the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_due_immediately() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::with_default_interval(t0);
        assert!(sched.poll(t0));
    }

    #[test]
    fn holds_cadence_between_ticks() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new(Duration::from_secs(2), t0);
        assert!(sched.poll(t0));
        assert!(!sched.poll(t0 + Duration::from_millis(1999)));
        assert!(sched.poll(t0 + Duration::from_secs(2)));
        assert_eq!(sched.next_deadline(), t0 + Duration::from_secs(4));
    }

    #[test]
    fn late_poll_reschedules_from_the_poll() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new(Duration::from_secs(2), t0);
        assert!(sched.poll(t0));
        // Poll arrives 5s late; the next deadline moves with it.
        let late = t0 + Duration::from_secs(7);
        assert!(sched.poll(late));
        assert!(!sched.poll(late + Duration::from_secs(1)));
        assert_eq!(sched.next_deadline(), late + Duration::from_secs(2));
    }
}
