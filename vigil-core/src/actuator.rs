//! Alarm actuation blink timing
//!
//! [`Blinker`] computes the logical level of the LED/buzzer pair. The
//! output toggles exactly once per period while running; `stop` forces
//! the level low unconditionally. Applying the level to pins is the
//! drivers' job.

/// Periodic on/off level generator
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blinker {
    period_ms: u32,
    last_toggle_ms: u32,
    level: bool,
    running: bool,
}

impl Blinker {
    /// Create a stopped blinker
    pub const fn new() -> Self {
        Self {
            period_ms: 0,
            last_toggle_ms: 0,
            level: false,
            running: false,
        }
    }

    /// Start blinking with the given period, output high immediately
    pub fn start(&mut self, period_ms: u32, now_ms: u32) {
        // Zero period would toggle on every poll
        self.period_ms = period_ms.max(1);
        self.last_toggle_ms = now_ms;
        self.level = true;
        self.running = true;
    }

    /// Advance time; toggles at most once per call and once per period
    ///
    /// Returns the level after the tick.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        if self.running && now_ms.wrapping_sub(self.last_toggle_ms) >= self.period_ms {
            self.level = !self.level;
            self.last_toggle_ms = now_ms;
        }
        self.level
    }

    /// Force the output low and stop toggling
    pub fn stop(&mut self) {
        self.running = false;
        self.level = false;
    }

    /// Current output level
    pub fn level(&self) -> bool {
        self.level
    }

    /// Check if the blinker is toggling
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_high() {
        let mut b = Blinker::new();
        assert!(!b.level());
        b.start(300, 0);
        assert!(b.level());
        assert!(b.is_running());
    }

    #[test]
    fn test_toggles_once_per_period() {
        let mut b = Blinker::new();
        b.start(300, 0);
        assert!(b.tick(100));
        assert!(b.tick(299));
        assert!(!b.tick(300));
        assert!(!b.tick(310)); // no double toggle right after
        assert!(b.tick(600));
    }

    #[test]
    fn test_stop_forces_low() {
        let mut b = Blinker::new();
        b.start(300, 0);
        b.stop();
        assert!(!b.level());
        assert!(!b.is_running());
        // Stopped blinker ignores time
        assert!(!b.tick(10_000));
    }

    #[test]
    fn test_restart_resets_phase() {
        let mut b = Blinker::new();
        b.start(300, 0);
        b.tick(300);
        b.stop();
        b.start(250, 1000);
        assert!(b.level());
        assert!(b.tick(1249));
        assert!(!b.tick(1250));
    }
}
