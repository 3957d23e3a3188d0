//! Cancellable countdown timer driven by the host's clock.

use std::time::{Duration, Instant};

/// Reports how many fixed intervals have elapsed each time it is polled.
///
/// The host loop calls [`poll`](Self::poll) with the current instant and
/// delivers one game tick per interval returned. Stalls are caught up on the
/// next poll. Once cancelled, no more ticks are ever reported.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl CountdownTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// (Re)starts the timer. The first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of intervals that elapsed up to `now` since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        if self.interval.is_zero() {
            return 0;
        }

        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.interval;
        }
        self.next_due = Some(due);
        ticks
    }

    /// Time left until the next tick, or None when stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_new_timer_is_stopped() {
        let mut timer = CountdownTimer::new(SECOND);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(Instant::now() + SECOND * 5), 0);
        assert_eq!(timer.time_until_next(Instant::now()), None);
    }

    #[test]
    fn test_no_tick_before_interval() {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(SECOND);
        timer.start(start);
        assert_eq!(timer.poll(start), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(start + SECOND), 1);
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(SECOND);
        timer.start(start);
        let mut total = 0;
        for ms in (0..=10_000).step_by(50) {
            total += timer.poll(start + Duration::from_millis(ms));
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(SECOND);
        timer.start(start);
        assert_eq!(timer.poll(start + Duration::from_millis(3500)), 3);
        assert_eq!(timer.poll(start + Duration::from_millis(3900)), 0);
        assert_eq!(timer.poll(start + SECOND * 4), 1);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(SECOND);
        timer.start(start);
        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.poll(start + SECOND * 10), 0);
    }

    #[test]
    fn test_time_until_next() {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(SECOND);
        timer.start(start);
        assert_eq!(
            timer.time_until_next(start + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
        assert_eq!(timer.time_until_next(start + SECOND * 2), Some(Duration::ZERO));
    }

    #[test]
    fn test_restart_resets_schedule() {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(SECOND);
        timer.start(start);
        timer.poll(start + SECOND * 2);
        let later = start + SECOND * 5;
        timer.start(later);
        assert_eq!(timer.poll(later + Duration::from_millis(500)), 0);
        assert_eq!(timer.poll(later + SECOND), 1);
    }
}
