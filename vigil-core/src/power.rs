//! Low-power wait policy
//!
//! The controller requests a wait through [`WakePolicy`]; a platform
//! [`PowerManager`] suspends execution until motion is possible again,
//! a shutdown request is pending, or the periodic wake timer elapses.
//!
//! Two conforming modes exist. On hardware with a true low-power halt the
//! wait suspends the processor until a motion-capable interrupt fires. On
//! platforms without one it is a cooperative poll loop with bounded
//! granularity checking both the motion level and the shutdown-request
//! flag (see `vigil_drivers::power::PollWait`). Under both modes a pending
//! remote stop is never starved.

/// Why a low-power wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeReason {
    /// Motion input level went high
    MotionLevel,
    /// A shutdown request is pending
    ShutdownRequested,
    /// The periodic wake timer elapsed
    Timeout,
}

/// Bounds for one low-power wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakePolicy {
    /// Upper bound on the wait; the periodic wake timer
    pub max_wait_ms: u32,
}

/// Platform seam for entering a low-power wait
pub trait PowerManager {
    /// Suspend until the wake condition becomes true or the timer bound
    /// elapses; never blocks past `policy.max_wait_ms` without returning.
    fn enter_wait(&mut self, policy: WakePolicy) -> WakeReason;
}
