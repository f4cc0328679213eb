//! Debounce policy and edge detection
//!
//! [`DebounceWindow`] is the shared minimum-quiet-interval policy: a
//! transition is honored only when at least `window_ms` has passed since
//! the last accepted one. It is reused for button debounce and for
//! remote-repeat suppression.
//!
//! [`DebouncedEdge`] turns a polled raw level into at most one logical
//! event per physical press/detection.

/// Minimum interval between two accepted transitions on the same input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceWindow {
    window_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl DebounceWindow {
    /// Create a window of `window_ms` milliseconds
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Try to accept a transition at `now_ms`
    ///
    /// Accepts when no transition was accepted yet, or when
    /// `now - last >= window`. Rejected transitions do not move the
    /// reference point.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        let ok = match self.last_accepted_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.window_ms,
        };
        if ok {
            self.last_accepted_ms = Some(now_ms);
        }
        ok
    }

    /// Forget the last accepted transition
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}

/// Which level transition fires the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgePolarity {
    /// Low to high (motion sensor output)
    Rising,
    /// High to low (pulled-up button)
    Falling,
}

/// Polled edge detector with a debounce window
///
/// `observe` must be called with the raw level on every poll. The
/// previous-level memory updates on every call regardless of whether an
/// event is emitted; skipping that update would silently drop the next
/// real transition.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedEdge {
    polarity: EdgePolarity,
    prev_high: bool,
    window: DebounceWindow,
}

impl DebouncedEdge {
    /// Create an edge detector
    ///
    /// `initial_high` is the quiescent level of the input (high for a
    /// pulled-up button, low for a PIR output).
    pub const fn new(polarity: EdgePolarity, window_ms: u32, initial_high: bool) -> Self {
        Self {
            polarity,
            prev_high: initial_high,
            window: DebounceWindow::new(window_ms),
        }
    }

    /// Feed one raw level sample; returns `true` when a debounced logical
    /// event fired on this sample.
    pub fn observe(&mut self, level_high: bool, now_ms: u32) -> bool {
        let fired = match self.polarity {
            EdgePolarity::Rising => !self.prev_high && level_high,
            EdgePolarity::Falling => self.prev_high && !level_high,
        };
        self.prev_high = level_high;
        fired && self.window.accept(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u32 = 250;

    fn button() -> DebouncedEdge {
        DebouncedEdge::new(EdgePolarity::Falling, WINDOW, true)
    }

    #[test]
    fn test_window_first_accept_is_free() {
        let mut w = DebounceWindow::new(WINDOW);
        assert!(w.accept(0));
    }

    #[test]
    fn test_window_boundary() {
        let mut w = DebounceWindow::new(WINDOW);
        assert!(w.accept(1000));
        assert!(!w.accept(1000 + WINDOW - 1));
        assert!(w.accept(1000 + WINDOW));
    }

    #[test]
    fn test_window_rejection_keeps_reference() {
        let mut w = DebounceWindow::new(WINDOW);
        assert!(w.accept(0));
        // Rejected attempts must not push the window forward
        assert!(!w.accept(100));
        assert!(!w.accept(200));
        assert!(w.accept(250));
    }

    #[test]
    fn test_window_wraparound() {
        let mut w = DebounceWindow::new(WINDOW);
        assert!(w.accept(u32::MAX - 10));
        assert!(!w.accept(100)); // 111 ms across the wrap
        assert!(w.accept(239)); // exactly 250 ms across the wrap
    }

    #[test]
    fn test_falling_edge_fires_once_per_press() {
        let mut b = button();
        assert!(b.observe(false, 0)); // press
        assert!(!b.observe(false, 10)); // held
        assert!(!b.observe(true, 500)); // release
        assert!(b.observe(false, 600)); // next press
    }

    #[test]
    fn test_bounce_inside_window_collapses() {
        let mut b = button();
        assert!(b.observe(false, 0));
        assert!(!b.observe(true, 40));
        assert!(!b.observe(false, 80)); // bounce, rejected by window
        assert!(!b.observe(true, 120));
        // Two presses < 250 ms apart collapse to exactly one event
    }

    #[test]
    fn test_two_presses_outside_window() {
        let mut b = button();
        assert!(b.observe(false, 0));
        assert!(!b.observe(true, 100));
        assert!(b.observe(false, 250));
    }

    #[test]
    fn test_prev_level_updates_on_rejected_edge() {
        let mut b = button();
        assert!(b.observe(false, 0));
        assert!(!b.observe(true, 40));
        // Rejected by the window, but the level memory must still follow
        assert!(!b.observe(false, 80));
        assert!(!b.observe(false, 300)); // still low: no edge, no phantom event
        assert!(!b.observe(true, 320));
        assert!(b.observe(false, 400)); // real new press is honored
    }

    #[test]
    fn test_rising_polarity() {
        let mut m = DebouncedEdge::new(EdgePolarity::Rising, 0, false);
        assert!(!m.observe(false, 0));
        assert!(m.observe(true, 10));
        assert!(!m.observe(true, 20));
        assert!(!m.observe(false, 30));
        assert!(m.observe(true, 40));
    }
}
