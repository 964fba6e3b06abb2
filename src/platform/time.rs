//! Elapsed-time sources for the outer loop

use std::time::Instant;

/// Milliseconds elapsed since the previous query
pub trait Clock {
    /// Whole milliseconds since the last call; resets the reference point
    fn elapsed_millis(&mut self) -> u64;
}

/// Monotonic wall clock
#[derive(Debug, Clone)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn elapsed_millis(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_millis() as u64;
        // Only advance by whole milliseconds so fractions are not lost
        self.last += std::time::Duration::from_millis(elapsed);
        elapsed
    }
}

/// Manually advanced clock for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pending: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `ms` milliseconds pass
    pub fn advance(&mut self, ms: u64) {
        self.pending += ms;
    }
}

impl Clock for ManualClock {
    fn elapsed_millis(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_resets_on_query() {
        let mut clock = ManualClock::new();
        clock.advance(10);
        clock.advance(23);
        assert_eq!(clock.elapsed_millis(), 33);
        assert_eq!(clock.elapsed_millis(), 0);
    }

    #[test]
    fn test_wall_clock_is_monotonic() {
        let mut clock = WallClock::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.elapsed_millis() >= 5);
    }
}
