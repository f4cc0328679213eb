//! Alarm output trait
//!
//! LED and buzzer move together; the controller computes one logical
//! level per loop iteration and the driver applies it to both pins.

/// Trait for the combined LED/buzzer actuator
pub trait AlarmOutput {
    /// Apply the logical level to both outputs
    fn set_level(&mut self, on: bool);

    /// Force both outputs low unconditionally
    ///
    /// Called on every exit from the alarm state.
    fn stop(&mut self) {
        self.set_level(false);
    }
}
