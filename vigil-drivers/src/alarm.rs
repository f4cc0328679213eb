//! GPIO alarm output
//!
//! Drives the LED/buzzer pair from one logical level so both always move
//! together. Pin errors are swallowed: the pins on supported boards are
//! infallible push-pull outputs.

use embedded_hal::digital::{OutputPin, PinState};

use vigil_core::traits::AlarmOutput;

/// LED + buzzer pair over two output pins
pub struct GpioAlarm<L, B> {
    led: L,
    buzzer: B,
    level: bool,
}

impl<L: OutputPin, B: OutputPin> GpioAlarm<L, B> {
    /// Create the alarm output with both pins forced low
    pub fn new(led: L, buzzer: B) -> Self {
        let mut alarm = Self {
            led,
            buzzer,
            level: false,
        };
        alarm.set_level(false);
        alarm
    }

    /// Current logical level
    pub fn level(&self) -> bool {
        self.level
    }

    /// Release the pins
    pub fn release(self) -> (L, B) {
        (self.led, self.buzzer)
    }
}

impl<L: OutputPin, B: OutputPin> AlarmOutput for GpioAlarm<L, B> {
    fn set_level(&mut self, on: bool) {
        self.level = on;
        let state = PinState::from(on);
        let _ = self.led.set_state(state);
        let _ = self.buzzer.set_state(state);
    }
}
