use std::time::{Duration, Instant};

use crate::TICK_DELAY_MS;

/// gates physics ticks on wall-clock time. the game loop asks it every iteration whether a tick
/// is due rather than sleeping.
pub struct Ticker {
    delay: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(now: Instant) -> Self {
        Self::with_delay(Duration::from_millis(TICK_DELAY_MS), now)
    }

    pub fn with_delay(delay: Duration, now: Instant) -> Self {
        Self { delay, last: now }
    }

    /// returns true, and starts the next interval, if a full delay has passed since the last tick.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.delay {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// how long until the next tick is due. zero if it is already overdue.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(now.saturating_duration_since(self.last))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::clock::Ticker;

    #[test]
    fn fires_only_after_delay() {
        let start = Instant::now();
        let mut ticker = Ticker::with_delay(Duration::from_millis(40), start);
        assert!(!ticker.due(start));
        assert!(!ticker.due(start + Duration::from_millis(39)));
        assert!(ticker.due(start + Duration::from_millis(40)));
        // the interval restarts from the tick that fired.
        assert!(!ticker.due(start + Duration::from_millis(60)));
        assert!(ticker.due(start + Duration::from_millis(85)));
    }

    #[test]
    fn until_next_counts_down() {
        let start = Instant::now();
        let ticker = Ticker::with_delay(Duration::from_millis(40), start);
        assert_eq!(
            ticker.until_next(start + Duration::from_millis(15)),
            Duration::from_millis(25)
        );
        assert_eq!(
            ticker.until_next(start + Duration::from_millis(100)),
            Duration::ZERO
        );
    }
}
