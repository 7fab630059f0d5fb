//! Drop clock - turns frame timestamps into fixed-cadence ticks
//!
//! The host calls [`DropClock::advance`] once per animation frame with a
//! monotonic timestamp. Elapsed time accumulates; once the accumulator
//! exceeds the interval a tick is due and the accumulator goes back to zero.
//! It is reset, not decremented, so a long stall yields a single tick.

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u64,
    accumulator_ms: u64,
    last_timestamp_ms: u64,
}

impl DropClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            accumulator_ms: 0,
            last_timestamp_ms: 0,
        }
    }

    /// Feed a frame timestamp; returns true when a tick is due
    ///
    /// The first frame is measured from timestamp 0. Timestamps that go
    /// backwards contribute nothing.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let delta = now_ms.saturating_sub(self.last_timestamp_ms);
        self.last_timestamp_ms = now_ms;
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta);

        if self.accumulator_ms > self.interval_ms {
            self.accumulator_ms = 0;
            return true;
        }
        false
    }

    /// Drop accumulated time; the next delta is measured from `now_ms`
    pub fn restart(&mut self, now_ms: u64) {
        self.accumulator_ms = 0;
        self.last_timestamp_ms = now_ms;
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn accumulator_ms(&self) -> u64 {
        self.accumulator_ms
    }

    pub fn last_timestamp_ms(&self) -> u64 {
        self.last_timestamp_ms
    }
}

impl Default for DropClock {
    fn default() -> Self {
        Self::new(DROP_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_exceeding_interval() {
        let mut clock = DropClock::new(1000);
        assert!(!clock.advance(500));
        assert!(!clock.advance(1000));
        // Exactly the interval is not enough.
        assert_eq!(clock.accumulator_ms(), 1000);
        assert!(clock.advance(1001));
        assert_eq!(clock.accumulator_ms(), 0);
    }

    #[test]
    fn long_stall_yields_one_tick() {
        let mut clock = DropClock::new(1000);
        assert!(clock.advance(5000));
        assert_eq!(clock.accumulator_ms(), 0);
        assert!(!clock.advance(5016));
    }

    #[test]
    fn sixty_fps_ticks_about_once_per_second() {
        let mut clock = DropClock::default();
        let ticks = (1..=600u64).filter(|frame| clock.advance(frame * 16)).count();
        // 9600 ms of frames; each tick needs 1008 ms of 16 ms frames.
        assert_eq!(ticks, 9);
    }

    #[test]
    fn backwards_timestamp_is_ignored() {
        let mut clock = DropClock::new(100);
        clock.advance(80);
        assert!(!clock.advance(10));
        assert_eq!(clock.accumulator_ms(), 80);
        assert_eq!(clock.last_timestamp_ms(), 10);
    }

    #[test]
    fn restart_clears_accumulator() {
        let mut clock = DropClock::new(100);
        clock.advance(90);
        clock.restart(90);
        assert!(!clock.advance(150));
        assert_eq!(clock.accumulator_ms(), 60);
    }
}
