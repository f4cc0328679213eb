//! Timing configuration
//!
//! Every interval in the control loop is a tunable parameter, not a fixed
//! constant of the design. `Default` carries the reference values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing parameters for the alarm controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Startup animation blink period (on/off)
    pub startup_blink_ms: u32,
    /// Total length of the startup animation
    pub startup_total_ms: u32,
    /// Alarm actuation blink period
    pub alarm_blink_ms: u32,
    /// How long "Alarm ugasen" stays on the display after a silence
    pub silence_notice_ms: u32,
    /// How long "Stanje mirovanja" stays on the display before the
    /// sensor-settle wait
    pub idle_notice_ms: u32,
    /// How long "Sustav ugasen" stays on the display before reaching
    /// `Stopped`
    pub shutdown_notice_ms: u32,
    /// Button debounce window
    pub button_debounce_ms: u32,
    /// Remote-repeat suppression window
    pub remote_repeat_ms: u32,
    /// Periodic wake timer bound for the low-power wait
    pub wake_interval_ms: u32,
    /// Poll granularity of the cooperative (non-halting) power wait
    pub wake_poll_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            startup_blink_ms: 250,
            startup_total_ms: 3000,
            alarm_blink_ms: 300,
            silence_notice_ms: 1500,
            idle_notice_ms: 2000,
            shutdown_notice_ms: 3000,
            button_debounce_ms: 250,
            remote_repeat_ms: 500,
            wake_interval_ms: 1000,
            wake_poll_ms: 10,
        }
    }
}
