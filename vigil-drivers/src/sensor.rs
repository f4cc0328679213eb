//! PIR motion sensor input
//!
//! AM312-class sensors drive their output high while motion is present
//! and keep it high for their own hold time after the last detection.
//! The controller's settle wait relies on reading that level directly,
//! so this driver stays a thin level reader.

use embedded_hal::digital::InputPin;

/// PIR sensor over a digital input pin (high = motion present)
pub struct PirSensor<P> {
    pin: P,
}

impl<P: InputPin> PirSensor<P> {
    /// Wrap the sensor pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Current output level
    pub fn motion_present(&mut self) -> bool {
        matches!(self.pin.is_high(), Ok(true))
    }

    /// Check that the output has returned to its quiescent level
    pub fn is_quiescent(&mut self) -> bool {
        !self.motion_present()
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}
