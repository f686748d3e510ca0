use std::time::{Duration, Instant};

/// Paces the run loop at a fixed tick rate.
pub struct Clock {
    interval: Duration,
    next_tick: Instant,
}

impl Clock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Clock { interval, next_tick: now + interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Schedules the next tick one interval after the one just taken. A loop
    /// that fell a whole interval behind starts counting from `now` instead of
    /// firing a burst of catch-up ticks.
    pub fn mark_tick(&mut self, now: Instant) {
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
    }

    /// Restarts the countdown, e.g. after a pause.
    pub fn reset(&mut self, now: Instant) {
        self.next_tick = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn first_tick_after_one_interval() {
        let start = Instant::now();
        let clock = Clock::new(MS_100, start);

        assert!(!clock.is_due(start));
        assert_eq!(clock.time_until_tick(start), MS_100);
        assert!(clock.is_due(start + MS_100));
        assert_eq!(clock.time_until_tick(start + Duration::from_millis(150)), Duration::ZERO);
    }

    #[test]
    fn ticks_keep_a_steady_cadence() {
        let start = Instant::now();
        let mut clock = Clock::new(MS_100, start);

        // Slightly late tick: the next one still lands on the 200ms mark.
        clock.mark_tick(start + Duration::from_millis(120));
        assert_eq!(clock.time_until_tick(start + Duration::from_millis(120)), Duration::from_millis(80));
    }

    #[test]
    fn falling_behind_does_not_burst() {
        let start = Instant::now();
        let mut clock = Clock::new(MS_100, start);
        let late = start + Duration::from_millis(450);

        clock.mark_tick(late);
        assert!(!clock.is_due(late));
        assert_eq!(clock.time_until_tick(late), MS_100);
    }

    #[test]
    fn reset_restarts_the_countdown() {
        let start = Instant::now();
        let mut clock = Clock::new(MS_100, start);
        let resumed = start + Duration::from_secs(3);

        clock.reset(resumed);
        assert!(!clock.is_due(resumed));
        assert_eq!(clock.time_until_tick(resumed), clock.interval());
    }
}
