//! Polled debounced button
//!
//! For platforms that poll instead of taking edge interrupts: samples the
//! pin each call and runs it through the core edge detector. The button
//! is wired active-low with a pull-up.

use embedded_hal::digital::InputPin;

use vigil_core::input::{DebouncedEdge, EdgePolarity};

/// Active-low button over a polled input pin
pub struct PolledButton<P> {
    pin: P,
    edge: DebouncedEdge,
}

impl<P: InputPin> PolledButton<P> {
    /// Create a button with the given debounce window
    pub fn new(pin: P, debounce_ms: u32) -> Self {
        Self {
            pin,
            edge: DebouncedEdge::new(EdgePolarity::Falling, debounce_ms, true),
        }
    }

    /// Sample the pin; returns `true` on a debounced press
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let high = matches!(self.pin.is_high(), Ok(true));
        self.edge.observe(high, now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct FakePin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_press_release_press() {
        let mut button = PolledButton::new(FakePin { high: true }, 250);

        button.pin.high = false;
        assert!(button.poll(0));
        assert!(!button.poll(10)); // held

        button.pin.high = true;
        assert!(!button.poll(300));

        button.pin.high = false;
        assert!(button.poll(400));
    }

    #[test]
    fn test_bounce_collapses() {
        let mut button = PolledButton::new(FakePin { high: true }, 250);

        button.pin.high = false;
        assert!(button.poll(0));
        button.pin.high = true;
        assert!(!button.poll(30));
        button.pin.high = false;
        assert!(!button.poll(60)); // inside the window
    }
}
