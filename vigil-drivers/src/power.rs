//! Poll-mode power manager
//!
//! For platforms and harnesses without a true low-power halt: an active
//! poll loop with bounded sleep granularity checking both the motion
//! level and the shutdown-request flag, so a pending remote stop is never
//! starved by the wait.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use vigil_core::input::EventFlags;
use vigil_core::power::{PowerManager, WakePolicy, WakeReason};
use vigil_core::state::Event;

/// Hard ceiling on the poll granularity
pub const MAX_POLL_GRANULARITY_MS: u32 = 10;

/// Cooperative poll-loop wait over a motion pin and the shared flags
pub struct PollWait<'a, P, D> {
    motion: P,
    delay: D,
    flags: &'a EventFlags,
    granularity_ms: u32,
}

impl<'a, P: InputPin, D: DelayNs> PollWait<'a, P, D> {
    /// Create a poll-mode wait
    ///
    /// `granularity_ms` is clamped to `1..=10` so the wait stays
    /// responsive to a shutdown request.
    pub fn new(motion: P, delay: D, flags: &'a EventFlags, granularity_ms: u32) -> Self {
        Self {
            motion,
            delay,
            flags,
            granularity_ms: granularity_ms.clamp(1, MAX_POLL_GRANULARITY_MS),
        }
    }
}

impl<P: InputPin, D: DelayNs> PowerManager for PollWait<'_, P, D> {
    fn enter_wait(&mut self, policy: WakePolicy) -> WakeReason {
        let mut waited_ms = 0u32;
        loop {
            if self.flags.pending(Event::RemoteStop) {
                return WakeReason::ShutdownRequested;
            }
            if matches!(self.motion.is_high(), Ok(true)) {
                self.flags.raise(Event::MotionDetected);
                return WakeReason::MotionLevel;
            }
            if waited_ms >= policy.max_wait_ms {
                self.flags.raise(Event::WakeTimeout);
                return WakeReason::Timeout;
            }
            self.delay.delay_ms(self.granularity_ms);
            waited_ms = waited_ms.saturating_add(self.granularity_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Pin that goes high after a set number of reads
    struct ScriptedPin {
        reads: Rc<Cell<u32>>,
        high_after: u32,
    }

    impl embedded_hal::digital::ErrorType for ScriptedPin {
        type Error = Infallible;
    }

    impl InputPin for ScriptedPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            let n = self.reads.get();
            self.reads.set(n + 1);
            Ok(n >= self.high_after)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.is_high()?)
        }
    }

    /// Delay that only counts elapsed time
    #[derive(Default)]
    struct CountingDelay {
        slept_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.slept_ns += u64::from(ns);
        }
    }

    fn quiet_pin() -> ScriptedPin {
        ScriptedPin {
            reads: Rc::new(Cell::new(0)),
            high_after: u32::MAX,
        }
    }

    #[test]
    fn test_times_out_and_raises_wake() {
        let flags = EventFlags::new();
        let mut wait = PollWait::new(quiet_pin(), CountingDelay::default(), &flags, 10);
        let reason = wait.enter_wait(WakePolicy { max_wait_ms: 100 });
        assert_eq!(reason, WakeReason::Timeout);
        assert!(flags.take(Event::WakeTimeout));
        assert!(!flags.any_pending());
    }

    #[test]
    fn test_motion_level_wakes_and_raises_flag() {
        let flags = EventFlags::new();
        let pin = ScriptedPin {
            reads: Rc::new(Cell::new(0)),
            high_after: 3,
        };
        let mut wait = PollWait::new(pin, CountingDelay::default(), &flags, 10);
        let reason = wait.enter_wait(WakePolicy { max_wait_ms: 10_000 });
        assert_eq!(reason, WakeReason::MotionLevel);
        assert!(flags.take(Event::MotionDetected));
    }

    #[test]
    fn test_pending_shutdown_is_never_starved() {
        let flags = EventFlags::new();
        flags.raise(Event::RemoteStop);
        let mut wait = PollWait::new(quiet_pin(), CountingDelay::default(), &flags, 10);
        let reason = wait.enter_wait(WakePolicy { max_wait_ms: u32::MAX });
        assert_eq!(reason, WakeReason::ShutdownRequested);
        // The flag is peeked, not consumed; the controller takes it
        assert!(flags.pending(Event::RemoteStop));
    }

    #[test]
    fn test_granularity_is_bounded() {
        let flags = EventFlags::new();
        let mut wait = PollWait::new(quiet_pin(), CountingDelay::default(), &flags, 500);
        wait.enter_wait(WakePolicy { max_wait_ms: 20 });
        // Clamped to 10 ms: two sleeps, not one long one
        assert_eq!(wait.delay.slept_ns, 20_000_000);
    }
}
